//! SQLite-backed record store.
//!
//! Handles connection and migrations. Link CRUD lives in `links`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::types::{Link, LinkId, LinkPatch, NewLinkRecord};
use super::RecordStore;
use crate::error::StoreError;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite link database.
///
/// The default file lives under the XDG state directory:
/// `~/.local/state/snaplinq/links.db`.
#[derive(Clone)]
pub struct SqliteRecordStore {
    pub(crate) pool: Pool<Sqlite>,
}

impl SqliteRecordStore {
    /// Default database path under the XDG state dir.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("snaplinq")?;
        Ok(xdg_dirs.get_state_home().join("snaplinq").join("links.db"))
    }

    /// Open (or create) the default database and run migrations.
    pub async fn open_default() -> Result<Self> {
        Self::open_at(Self::default_path()?).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let store = SqliteRecordStore { pool };
        store.migrate().await?;
        tracing::debug!(path = %path.display(), "opened link database");
        Ok(store)
    }

    /// Open a throwaway in-memory database (nothing touches disk).
    pub async fn open_in_memory() -> Result<Self> {
        // Single connection so the pool never hands back a different, empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = SqliteRecordStore { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS links (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id TEXT NOT NULL,
                url TEXT NOT NULL,
                title TEXT NOT NULL,
                icon TEXT,
                category TEXT NOT NULL DEFAULT 'Uncategorized',
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS links_owner_created
            ON links (owner_id, created_at DESC);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Close the pool, waiting for open connections to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn list_links(&self, owner_id: &str) -> Result<Vec<Link>, StoreError> {
        self.select_links(owner_id).await
    }

    async fn insert_link(&self, record: NewLinkRecord) -> Result<Link, StoreError> {
        self.insert_row(record).await
    }

    async fn update_link(
        &self,
        owner_id: &str,
        id: LinkId,
        patch: &LinkPatch,
    ) -> Result<(), StoreError> {
        self.update_row(owner_id, id, patch).await
    }

    async fn delete_link(&self, owner_id: &str, id: LinkId) -> Result<(), StoreError> {
        self.delete_row(owner_id, id).await
    }

    async fn bulk_update_links_by_category(
        &self,
        owner_id: &str,
        match_category: &str,
        new_category: &str,
    ) -> Result<u64, StoreError> {
        self.recategorize_rows(owner_id, match_category, new_category)
            .await
    }
}

/// Current time as Unix seconds.
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
