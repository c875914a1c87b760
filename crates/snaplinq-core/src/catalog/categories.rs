//! Category set and the category operations of the catalog store.
//!
//! Categories are client-local: they are not stored as records of their own.
//! The set is seeded from config and grows with names found on loaded links.
//! Rename and delete cascade to the user's stored links first and only touch
//! the local set once the store has accepted the change.

use super::CatalogStore;
use crate::error::{CatalogError, ValidationError};
use crate::record_store::UNCATEGORIZED;

/// Insertion-ordered set of category names that always contains the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: vec![UNCATEGORIZED.to_string()],
        }
    }
}

impl CategorySet {
    /// Builds a set from `seed`, dropping blanks and duplicates. The default
    /// category is placed first when the seed lacks it.
    pub fn seeded<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self { names: Vec::new() };
        for name in seed {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                set.insert(name);
            }
        }
        if !set.contains(UNCATEGORIZED) {
            set.names.insert(0, UNCATEGORIZED.to_string());
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Appends `name` if absent. Returns whether it was added.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Replaces `old` with `new` at the same position.
    pub(crate) fn rename(&mut self, old: &str, new: &str) {
        if let Some(slot) = self.names.iter_mut().find(|n| *n == old) {
            *slot = new.to_string();
        }
    }

    pub(crate) fn remove(&mut self, name: &str) {
        if name != UNCATEGORIZED {
            self.names.retain(|n| n != name);
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }
}

fn non_blank(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Blank { field: "category" });
    }
    Ok(name)
}

impl CatalogStore {
    /// Adds a category to the local set. Returns `Ok(false)` if it already exists.
    pub fn add_category(&self, name: &str) -> Result<bool, CatalogError> {
        let name = non_blank(name)?;
        let added = self.write_state().categories.insert(name);
        if added {
            tracing::debug!(category = name, "category added");
        }
        Ok(added)
    }

    /// Renames a category and moves its links to the new name.
    pub async fn rename_category(&self, old_name: &str, new_name: &str) -> Result<(), CatalogError> {
        if old_name == UNCATEGORIZED {
            return Err(ValidationError::ProtectedCategory { action: "renamed" }.into());
        }
        let new_name = non_blank(new_name)?;
        {
            let state = self.read_state();
            if state.categories.contains(new_name) {
                return Err(ValidationError::DuplicateCategory(new_name.to_string()).into());
            }
            if !state.categories.contains(old_name) {
                return Err(ValidationError::UnknownCategory(old_name.to_string()).into());
            }
        }
        let session = self.require_session()?;

        let moved = self
            .store
            .bulk_update_links_by_category(&session.user_id, old_name, new_name)
            .await
            .map_err(|e| {
                tracing::warn!(category = old_name, "rename cascade failed: {}", e);
                e
            })?;

        {
            let mut state = self.write_state();
            state.categories.rename(old_name, new_name);
            self.supersede_reloads(&mut state);
        }
        tracing::info!(from = old_name, to = new_name, moved, "category renamed");
        self.reload_after("rename_category").await;
        Ok(())
    }

    /// Deletes a category; its links fall back to the default category.
    pub async fn delete_category(&self, name: &str) -> Result<(), CatalogError> {
        if name == UNCATEGORIZED {
            return Err(ValidationError::ProtectedCategory { action: "deleted" }.into());
        }
        let session = self.require_session()?;

        let moved = self
            .store
            .bulk_update_links_by_category(&session.user_id, name, UNCATEGORIZED)
            .await
            .map_err(|e| {
                tracing::warn!(category = name, "delete cascade failed: {}", e);
                e
            })?;

        {
            let mut state = self.write_state();
            state.categories.remove(name);
            self.supersede_reloads(&mut state);
        }
        tracing::info!(category = name, moved, "category deleted");
        self.reload_after("delete_category").await;
        Ok(())
    }

    /// Number of loaded links per category, in category order.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let state = self.read_state();
        state
            .categories
            .iter()
            .map(|c| {
                let n = state.links.iter().filter(|l| l.category == c).count();
                (c.to_string(), n)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_forces_default_first() {
        let set = CategorySet::seeded(["Work", "Home", "Work", "  "]);
        assert_eq!(set.to_vec(), vec!["Uncategorized", "Work", "Home"]);
    }

    #[test]
    fn seeded_keeps_configured_default_position() {
        let set = CategorySet::seeded(["Work", "Uncategorized"]);
        assert_eq!(set.to_vec(), vec!["Work", "Uncategorized"]);
    }

    #[test]
    fn rename_keeps_position() {
        let mut set = CategorySet::seeded(["Uncategorized", "A", "B", "C"]);
        set.rename("B", "Z");
        assert_eq!(set.to_vec(), vec!["Uncategorized", "A", "Z", "C"]);
    }

    #[test]
    fn default_is_never_removed() {
        let mut set = CategorySet::default();
        set.remove(UNCATEGORIZED);
        assert!(set.contains(UNCATEGORIZED));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_is_case_sensitive() {
        let mut set = CategorySet::default();
        assert!(set.insert("Work"));
        assert!(!set.insert("Work"));
        assert!(set.insert("work"));
        assert_eq!(set.len(), 3);
    }
}
