//! HTTP client for the Supabase `laws` table.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use vidhi_core::{LawId, LawRecord};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Remote store operations the loader needs: one read-check and two writes.
#[async_trait]
pub trait LawStore {
    /// Look up an existing row by exact title match.
    async fn find_id_by_title(&self, title: &str) -> Result<Option<LawId>, StoreError>;

    /// Overwrite the row with the given id with the full record payload.
    async fn update(&self, id: &LawId, law: &LawRecord) -> Result<(), StoreError>;

    /// Create a new row from the full record payload.
    async fn insert(&self, law: &LawRecord) -> Result<(), StoreError>;
}

/// `LawStore` backed by Supabase's PostgREST surface.
///
/// Every request carries the service key twice (`apikey` header and bearer
/// token) plus `Prefer: resolution=merge-duplicates`, matching what the
/// `laws` table's row-level security expects from a service-role writer.
pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: String,
    service_key: String,
}

#[derive(Deserialize)]
struct ExistingRow {
    id: LawId,
}

impl SupabaseStore {
    /// Create a store client for the given Supabase project base URL.
    ///
    /// A trailing slash on `base_url` is trimmed before the `/rest/v1/laws`
    /// endpoint is derived.
    pub fn new(base_url: &str, service_key: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{base}/rest/v1/laws"),
            service_key: service_key.to_string(),
        }
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("Prefer", "resolution=merge-duplicates")
    }
}

/// Classify a write response: PostgREST answers 200, 201, or 204 depending on
/// the `Prefer` header and whether a body is returned.
async fn check_write(resp: reqwest::Response) -> Result<(), StoreError> {
    match resp.status().as_u16() {
        200 | 201 | 204 => Ok(()),
        status => {
            let body = resp.text().await.unwrap_or_default();
            Err(StoreError::Server { status, body })
        }
    }
}

#[async_trait]
impl LawStore for SupabaseStore {
    async fn find_id_by_title(&self, title: &str) -> Result<Option<LawId>, StoreError> {
        debug!(title, "checking for existing law");
        let resp = self
            .request(Method::GET, &self.endpoint)
            .query(&[("title", format!("eq.{title}"))])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<ExistingRow> = serde_json::from_str(&resp.text().await?)?;
        Ok(rows.into_iter().next().map(|row| row.id))
    }

    async fn update(&self, id: &LawId, law: &LawRecord) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{id}", self.endpoint);
        debug!(title = %law.title, %id, "updating existing law");
        let resp = self
            .request(Method::PATCH, &url)
            .json(law)
            .send()
            .await?;
        check_write(resp).await
    }

    async fn insert(&self, law: &LawRecord) -> Result<(), StoreError> {
        debug!(title = %law.title, "inserting new law");
        let resp = self
            .request(Method::POST, &self.endpoint)
            .json(law)
            .send()
            .await?;
        check_write(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_trims_trailing_slash() {
        let store = SupabaseStore::new("https://abc.supabase.co/", "key");
        assert_eq!(store.endpoint, "https://abc.supabase.co/rest/v1/laws");
    }

    #[test]
    fn store_keeps_bare_base_url() {
        let store = SupabaseStore::new("https://abc.supabase.co", "key");
        assert_eq!(store.endpoint, "https://abc.supabase.co/rest/v1/laws");
    }

    #[test]
    fn existing_row_integer_id() {
        let rows: Vec<ExistingRow> = serde_json::from_str(r#"[{"id": 7, "title": "x"}]"#).unwrap();
        assert_eq!(rows[0].id, LawId::Int(7));
    }

    #[test]
    fn existing_row_uuid_id() {
        let rows: Vec<ExistingRow> =
            serde_json::from_str(r#"[{"id": "9b2f", "title": "x"}]"#).unwrap();
        assert_eq!(rows[0].id.to_string(), "9b2f");
    }

    #[test]
    fn empty_check_response_means_no_match() {
        let rows: Vec<ExistingRow> = serde_json::from_str("[]").unwrap();
        assert!(rows.is_empty());
    }
}
