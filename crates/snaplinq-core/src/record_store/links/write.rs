//! Link write operations: insert, update, delete, bulk recategorize.

use super::super::db::{unix_timestamp, SqliteRecordStore};
use super::super::types::{Link, LinkId, LinkPatch, NewLinkRecord};
use crate::error::StoreError;

impl SqliteRecordStore {
    pub(crate) async fn insert_row(&self, record: NewLinkRecord) -> Result<Link, StoreError> {
        let now = unix_timestamp();
        let icon = record.icon.filter(|s| !s.is_empty());

        let id = sqlx::query(
            r#"
            INSERT INTO links (
                owner_id, url, title, icon, category, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&record.owner_id)
        .bind(&record.url)
        .bind(&record.title)
        .bind(icon.as_deref())
        .bind(&record.category)
        .bind(record.created_at)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Link {
            id,
            url: record.url,
            title: record.title,
            icon,
            category: record.category,
            created_at: record.created_at,
            owner_id: record.owner_id,
        })
    }

    /// Apply the non-`None` fields of `patch`. An empty icon clears the column.
    pub(crate) async fn update_row(
        &self,
        owner_id: &str,
        id: LinkId,
        patch: &LinkPatch,
    ) -> Result<(), StoreError> {
        let now = unix_timestamp();
        let r = sqlx::query(
            r#"
            UPDATE links
            SET url = COALESCE(?1, url),
                title = COALESCE(?2, title),
                icon = CASE
                    WHEN ?3 IS NULL THEN icon
                    WHEN ?3 = '' THEN NULL
                    ELSE ?3
                END,
                category = COALESCE(?4, category),
                updated_at = ?5
            WHERE id = ?6 AND owner_id = ?7
            "#,
        )
        .bind(patch.url.as_deref())
        .bind(patch.title.as_deref())
        .bind(patch.icon.as_deref())
        .bind(patch.category.as_deref())
        .bind(now)
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        if r.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    /// Permanently remove a link row. Missing rows are not an error.
    pub(crate) async fn delete_row(&self, owner_id: &str, id: LinkId) -> Result<(), StoreError> {
        let r = sqlx::query(
            r#"
            DELETE FROM links
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        if r.rows_affected() == 0 {
            tracing::debug!(link_id = id, "delete of missing link ignored");
        }
        Ok(())
    }

    pub(crate) async fn recategorize_rows(
        &self,
        owner_id: &str,
        match_category: &str,
        new_category: &str,
    ) -> Result<u64, StoreError> {
        let now = unix_timestamp();
        let r = sqlx::query(
            r#"
            UPDATE links
            SET category = ?1,
                updated_at = ?2
            WHERE owner_id = ?3 AND category = ?4
            "#,
        )
        .bind(new_category)
        .bind(now)
        .bind(owner_id)
        .bind(match_category)
        .execute(&self.pool)
        .await?;

        Ok(r.rows_affected())
    }
}
