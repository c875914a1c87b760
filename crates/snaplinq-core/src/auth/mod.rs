//! Authentication collaborator.
//!
//! The catalog only needs the current session, sign-in/sign-out and a way to
//! hear about session changes. [`LocalAuth`] keeps the session in a JSON file
//! under the XDG state dir so consecutive CLI invocations share it.

mod local;

pub use local::LocalAuth;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// An authenticated user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable owner id used to scope every record-store query.
    pub user_id: String,
    /// What the user signed in with (e.g. an email address).
    pub identity: String,
    /// Unix seconds.
    pub signed_in_at: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identity must not be blank")]
    BlankIdentity,

    #[error("session file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait AuthProvider: Send + Sync {
    fn current_session(&self) -> Option<Session>;

    fn sign_in(&self, identity: &str) -> Result<Session, AuthError>;

    fn sign_out(&self) -> Result<(), AuthError>;

    /// Receiver that observes every session change (sign-in and sign-out).
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// Owner id for an identity: trimmed and lowercased, so `Alice@Example.com`
/// and `alice@example.com` own the same links.
pub fn user_id_for(identity: &str) -> String {
    identity.trim().to_lowercase()
}
