//! Sync layer: Supabase REST client for the `laws` table and the sequential
//! upsert loop that pushes the static catalog into it.

mod loader;
mod store;

pub use loader::{Summary, load_catalog};
pub use store::{LawStore, StoreError, SupabaseStore};
