//! File-backed local session.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

use super::{user_id_for, AuthError, AuthProvider, Session};
use crate::record_store::unix_timestamp;

/// Local auth provider. Sessions survive restarts when a path is configured.
pub struct LocalAuth {
    path: Option<PathBuf>,
    tx: watch::Sender<Option<Session>>,
}

impl LocalAuth {
    /// Default session path: `~/.local/state/snaplinq/session.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("snaplinq")?;
        Ok(xdg_dirs
            .get_state_home()
            .join("snaplinq")
            .join("session.json"))
    }

    /// Session kept in memory only.
    pub fn in_memory() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { path: None, tx }
    }

    /// Load the session stored at `path`, if any. A missing file means signed out.
    pub fn load_from_path(path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let path = path.into();
        let session = read_session(&path)?;
        if let Some(s) = &session {
            tracing::debug!(user_id = %s.user_id, "restored session");
        }
        let (tx, _rx) = watch::channel(session);
        Ok(Self {
            path: Some(path),
            tx,
        })
    }

    fn persist(&self, session: Option<&Session>) -> Result<(), AuthError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_err = |source| AuthError::Io {
            path: path.display().to_string(),
            source,
        };
        match session {
            Some(s) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(io_err)?;
                }
                let json = serde_json::to_string_pretty(s).map_err(|source| AuthError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?;
                std::fs::write(path, json).map_err(io_err)?;
            }
            None => match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(io_err(e)),
            },
        }
        Ok(())
    }
}

fn read_session(path: &Path) -> Result<Option<Session>, AuthError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(AuthError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };
    let session = serde_json::from_slice(&bytes).map_err(|source| AuthError::Corrupt {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(session))
}

impl AuthProvider for LocalAuth {
    fn current_session(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    fn sign_in(&self, identity: &str) -> Result<Session, AuthError> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(AuthError::BlankIdentity);
        }
        let session = Session {
            user_id: user_id_for(identity),
            identity: identity.to_string(),
            signed_in_at: unix_timestamp(),
        };
        self.persist(Some(&session))?;
        tracing::info!(user_id = %session.user_id, "signed in");
        self.tx.send_replace(Some(session.clone()));
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.persist(None)?;
        if let Some(old) = self.tx.send_replace(None) {
            tracing::info!(user_id = %old.user_id, "signed out");
        }
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out_in_memory() {
        let auth = LocalAuth::in_memory();
        assert!(auth.current_session().is_none());

        let s = auth.sign_in("  Alice@Example.com ").unwrap();
        assert_eq!(s.user_id, "alice@example.com");
        assert_eq!(s.identity, "Alice@Example.com");
        assert_eq!(auth.current_session(), Some(s));

        auth.sign_out().unwrap();
        assert!(auth.current_session().is_none());
        // Signing out twice is fine.
        auth.sign_out().unwrap();
    }

    #[test]
    fn blank_identity_rejected() {
        let auth = LocalAuth::in_memory();
        assert!(matches!(auth.sign_in("   "), Err(AuthError::BlankIdentity)));
    }

    #[test]
    fn session_survives_reload_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("session.json");

        let auth = LocalAuth::load_from_path(&path).unwrap();
        assert!(auth.current_session().is_none());
        auth.sign_in("bob").unwrap();

        let again = LocalAuth::load_from_path(&path).unwrap();
        assert_eq!(again.current_session().unwrap().user_id, "bob");

        again.sign_out().unwrap();
        assert!(!path.exists());
        let third = LocalAuth::load_from_path(&path).unwrap();
        assert!(third.current_session().is_none());
    }

    #[test]
    fn corrupt_session_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            LocalAuth::load_from_path(&path),
            Err(AuthError::Corrupt { .. })
        ));
    }

    #[test]
    fn subscribers_see_changes() {
        let auth = LocalAuth::in_memory();
        let mut rx = auth.subscribe();
        assert!(!rx.has_changed().unwrap());
        auth.sign_in("carol").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().user_id, "carol");
        auth.sign_out().unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());
    }
}
