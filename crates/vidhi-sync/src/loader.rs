//! Sequential upsert loop with per-record error isolation.

use std::fmt;

use tracing::{info, warn};
use vidhi_core::LawRecord;

use crate::store::{LawStore, StoreError};

/// Outcome tally for one loader run.
///
/// `success + error == total` holds for any mix of remote responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub success: usize,
    pub error: usize,
    pub total: usize,
}

enum Action {
    Inserted,
    Updated,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Inserted => "inserted",
            Action::Updated => "updated",
        })
    }
}

/// Push every record to the store, in source order.
///
/// Each record is checked by title first: a match becomes a partial update
/// against the found id, no match becomes an insert. Failures (bad status or
/// transport) are counted and logged, never propagated; the run always
/// completes and reports the full tally.
pub async fn load_catalog(store: &dyn LawStore, laws: &[LawRecord]) -> Summary {
    let mut success = 0usize;
    let mut error = 0usize;

    for law in laws {
        match upsert_one(store, law).await {
            Ok(action) => {
                info!(title = %law.title, %action, "upsert ok");
                success += 1;
            }
            Err(err) => {
                warn!(title = %law.title, error = %err, "upsert failed");
                error += 1;
            }
        }
    }

    Summary {
        success,
        error,
        total: laws.len(),
    }
}

async fn upsert_one(store: &dyn LawStore, law: &LawRecord) -> Result<Action, StoreError> {
    match store.find_id_by_title(&law.title).await? {
        Some(id) => {
            store.update(&id, law).await?;
            Ok(Action::Updated)
        }
        None => {
            store.insert(law).await?;
            Ok(Action::Inserted)
        }
    }
}
