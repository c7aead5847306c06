//! Foreign table generator
//!
//! This module turns the column metadata of one SQLite table into a
//! `CREATE FOREIGN TABLE` statement for the PostgreSQL side.

use crate::db::cursor::MetadataCursor;
use crate::error::{Error, Result};
use crate::schema::classifier::TypeClassifier;
use crate::schema::types::{ColumnMetadata, ForeignColumn, ImportOptions, ScopePolicy, TableDefinition};
use crate::utils::naming::{quote_literal, IdentifierQuoter, PgQuoter};

/// Declared type used for columns the catalog reports without one
pub const UNDECLARED_TYPE: &str = "blob";

/// Foreign table SQL generator
pub struct ForeignTableGenerator<'a, Q: IdentifierQuoter = PgQuoter> {
    classifier: TypeClassifier,
    options: ImportOptions,
    scope: &'a ScopePolicy,
    local_schema: &'a str,
    server_name: &'a str,
    quoter: Q,
}

impl<'a> ForeignTableGenerator<'a, PgQuoter> {
    /// Create a generator that quotes identifiers the way PostgreSQL does
    pub fn new(scope: &'a ScopePolicy, local_schema: &'a str, server_name: &'a str) -> Self {
        Self::with_quoter(scope, local_schema, server_name, PgQuoter)
    }
}

impl<'a, Q: IdentifierQuoter> ForeignTableGenerator<'a, Q> {
    /// Create a generator with a caller-owned identifier quoter
    pub fn with_quoter(
        scope: &'a ScopePolicy,
        local_schema: &'a str,
        server_name: &'a str,
        quoter: Q,
    ) -> Self {
        Self {
            classifier: TypeClassifier::default(),
            options: ImportOptions::default(),
            scope,
            local_schema,
            server_name,
            quoter,
        }
    }

    /// Set which optional column clauses are emitted
    pub fn options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the type classifier
    pub fn classifier(mut self, classifier: TypeClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Generate the statement for one table.
    ///
    /// Returns `Ok(None)` when the table is outside the import scope. Any
    /// column that fails to classify aborts the whole table; nothing is
    /// returned for it. The cursor is only read, never released here.
    pub fn synthesize<C>(&self, table_name: &str, columns: &mut C) -> Result<Option<TableDefinition>>
    where
        C: MetadataCursor + ?Sized,
    {
        if !self.scope.is_in_scope(table_name) {
            tracing::info!(table = table_name, "Table is outside the import scope, skipping");
            return Ok(None);
        }

        let quoted_table = self.quoter.quote_identifier(table_name)?;
        let mut sql = format!(
            "CREATE FOREIGN TABLE {}.{} (",
            self.quoter.quote_identifier(self.local_schema)?,
            quoted_table
        );

        let mut foreign_columns: Vec<ForeignColumn> = Vec::new();
        while let Some(column) = columns.next_column()? {
            let (clause, foreign_column) = self.generate_column_definition(table_name, &column)?;

            if !foreign_columns.is_empty() {
                sql.push(',');
            }
            sql.push('\n');
            sql.push_str(&clause);

            foreign_columns.push(foreign_column);
        }

        sql.push_str(&format!(
            "\n) SERVER {}\nOPTIONS (table {})",
            self.quoter.quote_identifier(self.server_name)?,
            quote_literal(&quoted_table)
        ));

        tracing::info!(
            table = table_name,
            columns = foreign_columns.len(),
            "Generated foreign table definition"
        );

        Ok(Some(TableDefinition {
            schema: self.local_schema.to_string(),
            table: table_name.to_string(),
            server: self.server_name.to_string(),
            columns: foreign_columns,
            sql,
        }))
    }

    /// Generate the clause for one column
    fn generate_column_definition(
        &self,
        table_name: &str,
        column: &ColumnMetadata,
    ) -> Result<(String, ForeignColumn)> {
        let declaration = column.declared_type.as_deref().unwrap_or(UNDECLARED_TYPE);

        let data_type = self.classifier.classify(declaration).map_err(|e| match e {
            Error::UnsupportedType(declaration) => Error::ColumnTranslation {
                table: table_name.to_string(),
                column: column.name.clone(),
                declaration,
            },
            other => other,
        })?;

        tracing::debug!(
            table = table_name,
            column = %column.name,
            declared = declaration,
            target = %data_type,
            "Classified column"
        );

        let mut clause = format!(
            "{} {} ",
            self.quoter.quote_identifier(&column.name)?,
            data_type
        );

        let not_null = self.options.import_not_null && column.not_null;
        if not_null {
            clause.push_str(" NOT NULL ");
        }

        let default = if self.options.import_default {
            column.default.clone()
        } else {
            None
        };
        if let Some(default_val) = &default {
            // Passed through verbatim; it is already SQL expression text
            clause.push_str(&format!(" DEFAULT {} ", default_val));
        }

        Ok((
            clause,
            ForeignColumn {
                name: column.name.clone(),
                data_type,
                not_null,
                default,
            },
        ))
    }
}

/// Generate the statement for one table in a single call
pub fn synthesize<C, Q>(
    table_name: &str,
    columns: &mut C,
    options: ImportOptions,
    scope: &ScopePolicy,
    local_schema: &str,
    server_name: &str,
    quoter: Q,
) -> Result<Option<TableDefinition>>
where
    C: MetadataCursor + ?Sized,
    Q: IdentifierQuoter,
{
    ForeignTableGenerator::with_quoter(scope, local_schema, server_name, quoter)
        .options(options)
        .synthesize(table_name, columns)
}
