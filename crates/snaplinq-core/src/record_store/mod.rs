//! Persistent link record store.
//!
//! [`RecordStore`] is the seam between the catalog and durable storage. Every
//! call is scoped to an owner id so one user never sees another's links.
//! [`SqliteRecordStore`] is the bundled implementation (SQLite via sqlx).

mod db;
mod links;
mod types;


pub use db::{unix_timestamp, SqliteRecordStore};
pub use types::*;

use async_trait::async_trait;

use crate::error::StoreError;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All links owned by `owner_id`, newest first.
    async fn list_links(&self, owner_id: &str) -> Result<Vec<Link>, StoreError>;

    /// Insert a link and return the stored record with its assigned id.
    async fn insert_link(&self, record: NewLinkRecord) -> Result<Link, StoreError>;

    /// Apply `patch` to link `id`. Fails with [`StoreError::NotFound`] when the
    /// link does not exist or belongs to someone else.
    async fn update_link(&self, owner_id: &str, id: LinkId, patch: &LinkPatch)
        -> Result<(), StoreError>;

    /// Delete link `id`. Deleting a missing link succeeds.
    async fn delete_link(&self, owner_id: &str, id: LinkId) -> Result<(), StoreError>;

    /// Move every link of `owner_id` in `match_category` to `new_category`.
    /// Returns the number of links changed.
    async fn bulk_update_links_by_category(
        &self,
        owner_id: &str,
        match_category: &str,
        new_category: &str,
    ) -> Result<u64, StoreError>;
}
