//! Type definitions for translated schema objects

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SQLite column affinity, derived from a declared column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affinity {
    Text,
    Numeric,
    Integer,
    Real,
    Blob,
}

/// PostgreSQL column type emitted in a foreign table definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Text,
    BigInt,
    DoublePrecision,
    Bytea,
    Timestamp,
    Date,
    Boolean,
}

impl TargetType {
    /// The type name as written in PostgreSQL DDL
    pub fn as_sql(&self) -> &'static str {
        match self {
            TargetType::Text => "text",
            TargetType::BigInt => "bigint",
            TargetType::DoublePrecision => "double precision",
            TargetType::Bytea => "bytea",
            TargetType::Timestamp => "timestamp",
            TargetType::Date => "date",
            TargetType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// One row of column metadata reported by the source catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    pub declared_type: Option<String>,
    pub not_null: bool,
    pub default: Option<String>,
}

impl ColumnMetadata {
    /// Create column metadata with the given name and declared type
    pub fn new(name: &str, declared_type: &str) -> Self {
        Self {
            name: name.to_string(),
            declared_type: Some(declared_type.to_string()),
            not_null: false,
            default: None,
        }
    }

    /// Create column metadata for a column declared without a type
    pub fn untyped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            declared_type: None,
            not_null: false,
            default: None,
        }
    }

    /// Set the NOT NULL flag
    pub fn not_null(mut self, not_null: bool) -> Self {
        self.not_null = not_null;
        self
    }

    /// Set the default value text
    pub fn default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// Which optional column clauses to carry over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub import_not_null: bool,
    pub import_default: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            import_not_null: true,
            import_default: false,
        }
    }
}

/// Table selection for an import pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePolicy {
    LimitTo(IndexSet<String>),
    Except(IndexSet<String>),
    #[default]
    Unrestricted,
}

/// A column of a synthesized foreign table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignColumn {
    pub name: String,
    pub data_type: TargetType,
    pub not_null: bool,
    pub default: Option<String>,
}

/// A synthesized `CREATE FOREIGN TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub schema: String,
    pub table: String,
    pub server: String,
    pub columns: Vec<ForeignColumn>,
    pub sql: String,
}

impl TableDefinition {
    /// The statement text
    pub fn as_sql(&self) -> &str {
        &self.sql
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ForeignColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for TableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
