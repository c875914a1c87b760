pub mod config;
pub mod logging;

pub mod auth;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod metadata;
pub mod record_store;

pub use catalog::{CatalogStore, CategorySet, LinkDraft, Section};
pub use classify::classify;
pub use error::{CatalogError, StoreError, ValidationError};
pub use metadata::{infer_favicon, infer_title};
