//! Types exchanged with the record store.

use serde::{Deserialize, Serialize};

/// Link identifier, assigned by the record store.
pub type LinkId = i64;

/// Name of the permanent default category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A saved link as stored for one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
    /// Unix seconds.
    pub created_at: i64,
    pub owner_id: String,
}

/// Fully-populated row handed to [`super::RecordStore::insert_link`].
#[derive(Debug, Clone)]
pub struct NewLinkRecord {
    pub owner_id: String,
    pub url: String,
    pub title: String,
    pub icon: Option<String>,
    pub category: String,
    pub created_at: i64,
}

/// Partial update for a link. `None` fields are left untouched.
///
/// `icon: Some("")` clears the stored icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.title.is_none() && self.icon.is_none() && self.category.is_none()
    }

    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            ..Self::default()
        }
    }
}
