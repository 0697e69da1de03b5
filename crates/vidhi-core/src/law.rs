//! Shared types for law records exchanged with the remote store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad area of law a statute belongs to.
///
/// Serialised as the plain string form (`"Constitutional"`, `"Criminal"`, ...)
/// to match the `category` column in the remote `laws` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Constitutional,
    Criminal,
    Civil,
    Property,
    Family,
    Labor,
    Tax,
    Corporate,
    Cyber,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Constitutional => "Constitutional",
            Category::Criminal => "Criminal",
            Category::Civil => "Civil",
            Category::Property => "Property",
            Category::Family => "Family",
            Category::Labor => "Labor",
            Category::Tax => "Tax",
            Category::Corporate => "Corporate",
            Category::Cyber => "Cyber",
        };
        f.write_str(s)
    }
}

/// One Indian law entry.
///
/// `title` is the sole business key: the remote store is queried by exact
/// title match, and a second record with the same title is treated as an
/// update target, never a duplicate row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawRecord {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub year_enacted: i32,
    pub status: String,
    pub official_url: String,
}

/// Primary key of an existing row in the remote `laws` table.
///
/// PostgREST backends key this table with either a bigint or a uuid, so both
/// wire shapes are accepted. `Display` yields the raw unquoted value for use
/// in `?id=eq.<id>` filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LawId {
    Int(i64),
    Str(String),
}

impl fmt::Display for LawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LawId::Int(n) => write!(f, "{n}"),
            LawId::Str(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_wire_shape() {
        let law = LawRecord {
            title: "Information Technology Act".into(),
            description: "Legal recognition for electronic transactions.".into(),
            category: Category::Cyber,
            year_enacted: 2000,
            status: "Active".into(),
            official_url: "https://legislative.gov.in/sites/default/files/A2000-21.pdf".into(),
        };
        let json = serde_json::to_value(&law).unwrap();
        assert_eq!(json["title"], "Information Technology Act");
        assert_eq!(json["category"], "Cyber");
        assert_eq!(json["year_enacted"], 2000);
        assert_eq!(json["status"], "Active");
    }

    #[test]
    fn record_json_roundtrip() {
        let law = LawRecord {
            title: "Companies Act".into(),
            description: "Regulates incorporation and winding up of companies.".into(),
            category: Category::Corporate,
            year_enacted: 2013,
            status: "Active".into(),
            official_url: "https://legislative.gov.in/sites/default/files/A2013-18.pdf".into(),
        };
        let json = serde_json::to_string(&law).unwrap();
        let parsed: LawRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, "Companies Act");
        assert_eq!(parsed.category, Category::Corporate);
    }

    #[test]
    fn law_id_integer_form() {
        let id: LawId = serde_json::from_str("42").unwrap();
        assert_eq!(id, LawId::Int(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn law_id_uuid_form() {
        let id: LawId = serde_json::from_str("\"3e2a1f90-0b77-4b2e-9c1d-8f0a6d4c5e21\"").unwrap();
        assert_eq!(id.to_string(), "3e2a1f90-0b77-4b2e-9c1d-8f0a6d4c5e21");
    }
}
