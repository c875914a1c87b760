//! Link row operations for [`super::SqliteRecordStore`].

mod read;
mod write;
