//! Link read operations: list and get.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::super::db::SqliteRecordStore;
use super::super::types::{Link, LinkId, UNCATEGORIZED};
use crate::error::StoreError;

pub(super) fn link_from_row(row: &SqliteRow) -> Link {
    let category: String = row.get("category");
    Link {
        id: row.get("id"),
        url: row.get("url"),
        title: row.get("title"),
        icon: row.get::<Option<String>, _>("icon").filter(|s| !s.is_empty()),
        category: if category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            category
        },
        created_at: row.get("created_at"),
        owner_id: row.get("owner_id"),
    }
}

impl SqliteRecordStore {
    /// All links for `owner_id`, newest first.
    pub(crate) async fn select_links(&self, owner_id: &str) -> Result<Vec<Link>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, url, title, icon, category, created_at
            FROM links
            WHERE owner_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(link_from_row).collect())
    }

    /// Fetch a single link owned by `owner_id`.
    pub async fn get_link(&self, owner_id: &str, id: LinkId) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, url, title, icon, category, created_at
            FROM links
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(link_from_row))
    }
}
