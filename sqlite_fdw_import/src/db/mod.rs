//! Database module for sqlite_fdw_import
//!
//! This module handles the SQLite connection and catalog cursors.

pub mod catalog;
pub mod connection;
pub mod cursor;

// Re-export key types
pub use catalog::SchemaSource;
pub use connection::SqliteSource;
pub use cursor::{MetadataCursor, PragmaCursor};
