//! Utilities for sqlite_fdw_import
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use naming::{quote_literal, quote_sqlite, IdentifierQuoter, PgQuoter};
