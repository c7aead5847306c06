//! sqlite_fdw_import: PostgreSQL foreign table definitions from SQLite schemas
//!
//! Reads the column declarations of a SQLite database and generates the
//! `CREATE FOREIGN TABLE` statements a sqlite foreign data wrapper server
//! needs. Declared types are classified strictly: a column whose type cannot
//! be mapped to an exact PostgreSQL type fails its table instead of being
//! guessed.

pub mod config;
pub mod db;
pub mod error;
pub mod schema;
pub mod utils;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export main types for easier access
pub use config::Config;
pub use db::{MetadataCursor, SchemaSource, SqliteSource};
pub use error::{Error, Result};
pub use schema::{
    ForeignTableGenerator, ImportOptions, ScopePolicy, TableDefinition, TargetType,
    TypeClassifier,
};

/// Initialize an importer from the specified configuration file
pub async fn init(config_path: &str) -> Result<SchemaImporter<SqliteSource>> {
    let config = config::load_from_file(config_path)?;
    SchemaImporter::new(config).await
}

/// A table that could not be translated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub table: String,
    pub column: Option<String>,
    pub declaration: Option<String>,
    pub message: String,
}

impl ImportFailure {
    fn new(table: &str, error: &Error) -> Self {
        let column = match error {
            Error::ColumnTranslation { column, .. } => Some(column.clone()),
            _ => None,
        };

        Self {
            table: table.to_string(),
            column,
            declaration: error.declaration().map(str::to_string),
            message: error.to_string(),
        }
    }
}

/// Outcome of one import pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub generated_at: DateTime<Utc>,
    pub server: String,
    pub local_schema: String,
    pub tables: Vec<TableDefinition>,
    pub skipped: Vec<String>,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    fn new(server: &str, local_schema: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            server: server.to_string(),
            local_schema: local_schema.to_string(),
            tables: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Statement texts, in source table order
    pub fn statements(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.as_sql()).collect()
    }

    /// True when no table failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Render the report as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a schema import against a catalog source
pub struct SchemaImporter<S: SchemaSource> {
    config: Config,
    source: S,
    scope: ScopePolicy,
    fail_fast: bool,
}

impl SchemaImporter<SqliteSource> {
    /// Connect to the configured SQLite database
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let source = SqliteSource::connect(&config.source).await?;
        Ok(Self::with_source(config, source))
    }
}

impl<S: SchemaSource + Sync> SchemaImporter<S> {
    /// Create an importer over an already opened source
    pub fn with_source(config: Config, source: S) -> Self {
        let scope = config.scope_policy();
        Self {
            config,
            source,
            scope,
            fail_fast: false,
        }
    }

    /// Stop at the first table that fails instead of collecting failures
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn generator(&self) -> ForeignTableGenerator<'_> {
        ForeignTableGenerator::new(
            &self.scope,
            &self.config.import.local_schema,
            &self.config.import.server_name,
        )
        .options(self.config.import_options())
        .classifier(self.config.classifier())
    }

    /// Generate the definition of one table, or `None` if it is out of scope
    pub async fn import_table(&self, table_name: &str) -> Result<Option<TableDefinition>> {
        if !self.scope.is_in_scope(table_name) {
            tracing::info!(table = table_name, "Table is outside the import scope, skipping");
            return Ok(None);
        }

        // Dropped on every path out of this function
        let mut cursor = self.source.column_cursor(table_name).await?;
        self.generator().synthesize(table_name, &mut cursor)
    }

    /// Generate definitions for every table the source lists
    pub async fn import_schema(&self) -> Result<ImportReport> {
        let mut report = ImportReport::new(
            &self.config.import.server_name,
            &self.config.import.local_schema,
        );

        for table_name in self.source.list_tables().await? {
            match self.import_table(&table_name).await {
                Ok(Some(definition)) => report.tables.push(definition),
                Ok(None) => report.skipped.push(table_name),
                Err(e) => {
                    tracing::warn!(table = %table_name, error = %e, "Failed to import table");
                    if self.fail_fast {
                        return Err(e);
                    }
                    report.failures.push(ImportFailure::new(&table_name, &e));
                }
            }
        }

        tracing::info!(
            imported = report.tables.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "Schema import finished"
        );

        Ok(report)
    }
}
