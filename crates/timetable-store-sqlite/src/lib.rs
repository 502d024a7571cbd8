//! SQLite backend for the Timetable schedule store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The database is used as a plain
//! key-value store: the whole lesson collection is one JSON value under one
//! key.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_KEY, SqliteStore};
