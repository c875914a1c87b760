//! Catalog store: the signed-in user's links and categories.
//!
//! A [`CatalogStore`] is built once with its auth and record-store
//! collaborators and handed to whoever needs it. Every mutation writes
//! through the record store and then reloads the full link list, so the
//! in-memory view always reflects the last completed operation.
//!
//! Reloads are numbered when they start. A reload whose number is not newer
//! than the last applied one is discarded, so a slow, older fetch can never
//! overwrite fresher data.

mod categories;
mod view;


pub use categories::CategorySet;
pub use view::{matches_query, sections, Section};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::auth::{AuthProvider, Session};
use crate::error::{CatalogError, ValidationError};
use crate::metadata::AutoFill;
use crate::record_store::{
    unix_timestamp, Link, LinkId, LinkPatch, NewLinkRecord, RecordStore, UNCATEGORIZED,
};

/// Input for [`CatalogStore::create_link`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub url: String,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    /// Fill a missing title/icon, and replace an unset or default category,
    /// with values inferred from the URL.
    pub auto_fill: bool,
}

impl LinkDraft {
    /// Draft for `url` with auto-fill enabled, as produced by a share action.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auto_fill: true,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
struct CatalogState {
    links: Vec<Link>,
    categories: CategorySet,
    in_flight: usize,
    applied_reload: u64,
}

pub struct CatalogStore {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn RecordStore>,
    autofill: AutoFill,
    state: RwLock<CatalogState>,
    reload_seq: AtomicU64,
}

impl CatalogStore {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn RecordStore>,
        categories: CategorySet,
        autofill: AutoFill,
    ) -> Self {
        Self {
            auth,
            store,
            autofill,
            state: RwLock::new(CatalogState {
                links: Vec::new(),
                categories,
                in_flight: 0,
                applied_reload: 0,
            }),
            reload_seq: AtomicU64::new(0),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn require_session(&self) -> Result<Session, CatalogError> {
        self.auth.current_session().ok_or(CatalogError::NotSignedIn)
    }

    /// Marks every reload started so far as stale. Call with the state lock
    /// held, in the same scope as the local change it must not undo.
    fn supersede_reloads(&self, state: &mut CatalogState) {
        state.applied_reload = self.reload_seq.fetch_add(1, Ordering::SeqCst) + 1;
    }

    pub fn session(&self) -> Option<Session> {
        self.auth.current_session()
    }

    /// Loaded links, newest first.
    pub fn links(&self) -> Vec<Link> {
        self.read_state().links.clone()
    }

    pub fn link(&self, id: LinkId) -> Option<Link> {
        self.read_state().links.iter().find(|l| l.id == id).cloned()
    }

    pub fn categories(&self) -> Vec<String> {
        self.read_state().categories.to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().in_flight > 0
    }

    /// Fetch the user's links from the record store.
    ///
    /// Without a session the link list is cleared. On failure the previous
    /// state is kept and the error is returned; nothing is retried.
    pub async fn load(&self) -> Result<(), CatalogError> {
        let Some(session) = self.auth.current_session() else {
            let mut state = self.write_state();
            state.links.clear();
            self.supersede_reloads(&mut state);
            return Ok(());
        };

        let seq = self.reload_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.write_state().in_flight += 1;

        let result = self.store.list_links(&session.user_id).await;

        let mut state = self.write_state();
        state.in_flight = state.in_flight.saturating_sub(1);
        let links = match result {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!(user_id = %session.user_id, "loading links failed: {}", e);
                return Err(e.into());
            }
        };
        if seq <= state.applied_reload {
            tracing::debug!(seq, applied = state.applied_reload, "discarding stale reload");
            return Ok(());
        }
        state.applied_reload = seq;
        for link in &links {
            if state.categories.insert(&link.category) {
                tracing::debug!(category = %link.category, "discovered category from links");
            }
        }
        tracing::debug!(count = links.len(), "links loaded");
        state.links = links;
        Ok(())
    }

    /// Reload after a successful write. The write already happened, so a
    /// failed reload is only logged; the next load picks the change up.
    async fn reload_after(&self, op: &'static str) {
        if let Err(e) = self.load().await {
            tracing::warn!(op, "reload after write failed: {}", e);
        }
    }

    /// Validate, optionally auto-fill, and store a new link.
    ///
    /// Returns `Ok(None)` without touching the store when nobody is signed in.
    pub async fn create_link(&self, draft: LinkDraft) -> Result<Option<Link>, CatalogError> {
        let url = draft.url.trim().to_string();
        if url.is_empty() {
            return Err(ValidationError::Blank { field: "url" }.into());
        }
        validate_url(&url)?;

        let mut title = draft.title.map(|t| t.trim().to_string()).unwrap_or_default();
        let mut icon = draft.icon.map(|i| i.trim().to_string()).unwrap_or_default();
        let mut category = draft
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        if draft.auto_fill {
            let inferred = self.autofill.infer(&url);
            if title.is_empty() {
                title = inferred.title;
            }
            if icon.is_empty() {
                icon = inferred.icon;
            }
            if category == UNCATEGORIZED {
                category = inferred.category.to_string();
            }
        }
        if title.is_empty() {
            return Err(ValidationError::Blank { field: "title" }.into());
        }

        let Some(session) = self.auth.current_session() else {
            tracing::debug!("create_link ignored: no session");
            return Ok(None);
        };

        let record = NewLinkRecord {
            owner_id: session.user_id,
            url,
            title,
            icon: Some(icon).filter(|i| !i.is_empty()),
            category,
            created_at: unix_timestamp(),
        };
        let link = self.store.insert_link(record).await.map_err(|e| {
            tracing::warn!("create_link failed: {}", e);
            e
        })?;
        tracing::info!(link_id = link.id, category = %link.category, "link created");

        self.reload_after("create_link").await;
        Ok(Some(link))
    }

    /// Apply a partial update to one of the user's links.
    ///
    /// An empty patch changes nothing but still fails for an unknown id.
    pub async fn update_link(&self, id: LinkId, patch: LinkPatch) -> Result<(), CatalogError> {
        let patch = normalize_patch(patch)?;
        let session = self.require_session()?;

        self.store
            .update_link(&session.user_id, id, &patch)
            .await
            .map_err(|e| {
                tracing::warn!(link_id = id, "update_link failed: {}", e);
                e
            })?;
        tracing::info!(link_id = id, "link updated");

        self.reload_after("update_link").await;
        Ok(())
    }

    /// Permanently delete a link. Deleting a missing link succeeds.
    pub async fn delete_link(&self, id: LinkId) -> Result<(), CatalogError> {
        let session = self.require_session()?;
        self.store
            .delete_link(&session.user_id, id)
            .await
            .map_err(|e| {
                tracing::warn!(link_id = id, "delete_link failed: {}", e);
                e
            })?;
        tracing::info!(link_id = id, "link deleted");

        self.reload_after("delete_link").await;
        Ok(())
    }

    /// Grouped view of the loaded links matching `query`.
    pub fn sections(&self, query: &str) -> Vec<Section> {
        let state = self.read_state();
        sections(&state.links, &state.categories, query)
    }

    /// Follow session changes until the auth provider goes away: load on
    /// sign-in, clear on sign-out.
    pub async fn follow_session(&self) {
        let mut rx = self.auth.subscribe();
        while rx.changed().await.is_ok() {
            let user = rx.borrow_and_update().as_ref().map(|s| s.user_id.clone());
            tracing::debug!(user_id = ?user, "session changed");
            if let Err(e) = self.load().await {
                tracing::warn!("reload on session change failed: {}", e);
            }
        }
    }
}

/// Submission-time URL check: must parse as an absolute URL with a host.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(()),
        _ => Err(ValidationError::MalformedUrl(url.to_string())),
    }
}

fn normalize_patch(patch: LinkPatch) -> Result<LinkPatch, ValidationError> {
    let url = match patch.url.map(|u| u.trim().to_string()) {
        Some(u) if u.is_empty() => return Err(ValidationError::Blank { field: "url" }),
        Some(u) => {
            validate_url(&u)?;
            Some(u)
        }
        None => None,
    };
    let title = match patch.title.map(|t| t.trim().to_string()) {
        Some(t) if t.is_empty() => return Err(ValidationError::Blank { field: "title" }),
        other => other,
    };
    let category = match patch.category.map(|c| c.trim().to_string()) {
        Some(c) if c.is_empty() => return Err(ValidationError::Blank { field: "category" }),
        other => other,
    };
    Ok(LinkPatch {
        url,
        title,
        icon: patch.icon.map(|i| i.trim().to_string()),
        category,
    })
}
