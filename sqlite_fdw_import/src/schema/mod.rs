//! Schema module for sqlite_fdw_import
//!
//! This module handles type classification, table scoping and foreign table
//! generation.

pub mod classifier;
pub mod generator;
pub mod scope;
pub mod types;

// Re-export key types
pub use classifier::{affinity_of, classify, NumericFallback, TypeClassifier};
pub use generator::{synthesize, ForeignTableGenerator};
pub use scope::is_in_scope;
pub use types::{
    Affinity, ColumnMetadata, ForeignColumn, ImportOptions, ScopePolicy, TableDefinition,
    TargetType,
};
