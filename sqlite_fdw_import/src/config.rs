//! Configuration handling for sqlite_fdw_import

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::{Error, Result};
use crate::schema::classifier::{NumericFallback, TypeClassifier};
use crate::schema::types::{ImportOptions, ScopePolicy};

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    Config::from_toml_str(&config_str)
}

/// Represents the complete import configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub import: ImportConfig,
    #[serde(default)]
    pub type_mapping: TypeMappingConfig,
    pub logging: Option<LoggingConfig>,
}

/// SQLite source database configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default)]
    pub database: String,
    pub pool_size: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

/// Schema import configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImportConfig {
    #[serde(default)]
    pub local_schema: String,
    #[serde(default)]
    pub server_name: String,
    #[serde(default = "default_true")]
    pub import_not_null: bool,
    #[serde(default)]
    pub import_default: bool,
    pub limit_to: Option<Vec<String>>,
    pub except: Option<Vec<String>>,
}

/// Type mapping configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TypeMappingConfig {
    #[serde(default)]
    pub numeric_fallback: NumericFallback,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;

        config.validate()?;
        Ok(config)
    }

    /// Check that every required option is present and consistent
    pub fn validate(&self) -> Result<()> {
        if self.source.database.trim().is_empty() {
            return Err(Error::MissingRequiredOption("source.database".to_string()));
        }
        if self.import.local_schema.trim().is_empty() {
            return Err(Error::MissingRequiredOption("import.local_schema".to_string()));
        }
        if self.import.server_name.trim().is_empty() {
            return Err(Error::MissingRequiredOption("import.server_name".to_string()));
        }
        if self.import.limit_to.is_some() && self.import.except.is_some() {
            return Err(Error::ConfigError(
                "import.limit_to and import.except cannot both be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolved clause options
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            import_not_null: self.import.import_not_null,
            import_default: self.import.import_default,
        }
    }

    /// Resolved table scope
    pub fn scope_policy(&self) -> ScopePolicy {
        match (&self.import.limit_to, &self.import.except) {
            (Some(names), _) => ScopePolicy::limit_to(names.iter().cloned()),
            (None, Some(names)) => ScopePolicy::except(names.iter().cloned()),
            (None, None) => ScopePolicy::Unrestricted,
        }
    }

    /// Classifier configured from `[type_mapping]`
    pub fn classifier(&self) -> TypeClassifier {
        TypeClassifier::new(self.type_mapping.numeric_fallback)
    }
}

/// Where a foreign table reads its rows from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    pub database: String,
    pub table: String,
}

impl TableSource {
    /// Resolve `database` and `table` from foreign table and server options.
    ///
    /// Options are scanned table-level first, then server-level, and the last
    /// match wins, so a server-level `database` or `table` overrides the table's.
    /// `table` falls back to the name of the foreign relation.
    pub fn from_options(
        table_options: &[(String, String)],
        server_options: &[(String, String)],
        relation_name: Option<&str>,
    ) -> Result<Self> {
        let lookup = |key: &str| {
            table_options
                .iter()
                .chain(server_options.iter())
                .filter(|(name, _)| name == key)
                .last()
                .map(|(_, value)| value.clone())
        };

        let database = lookup("database");
        let table = lookup("table").or_else(|| relation_name.map(str::to_string));

        match (database, table) {
            (Some(database), Some(table)) => Ok(Self { database, table }),
            _ => Err(Error::MissingRequiredOption(
                "a database and a table must be specified".to_string(),
            )),
        }
    }
}
