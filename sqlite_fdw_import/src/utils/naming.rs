//! Identifier and literal quoting
//!
//! Identifiers cannot be bound as query parameters, so every schema, table,
//! server and column name that ends up in generated SQL goes through an
//! [`IdentifierQuoter`]. The generator never quotes on its own.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::error::{Error, Result};

/// PostgreSQL keywords that `quote_identifier` always quotes
/// (reserved, type/function-name and column-name keywords)
static PG_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // reserved
        "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric", "both",
        "case", "cast", "check", "collate", "column", "constraint", "create", "current_catalog",
        "current_date", "current_role", "current_time", "current_timestamp", "current_user",
        "default", "deferrable", "desc", "distinct", "do", "else", "end", "except", "false",
        "fetch", "for", "foreign", "from", "grant", "group", "having", "in", "initially",
        "intersect", "into", "lateral", "leading", "limit", "localtime", "localtimestamp", "not",
        "null", "offset", "on", "only", "or", "order", "placing", "primary", "references",
        "returning", "select", "session_user", "some", "symmetric", "system_user", "table",
        "then", "to", "trailing", "true", "union", "unique", "user", "using", "variadic", "when",
        "where", "window", "with",
        // type or function names
        "authorization", "binary", "collation", "concurrently", "cross", "current_schema",
        "freeze", "full", "ilike", "inner", "is", "isnull", "join", "left", "like", "natural",
        "notnull", "outer", "overlaps", "right", "similar", "tablesample", "verbose",
        // column names
        "between", "bigint", "bit", "boolean", "char", "character", "coalesce", "dec", "decimal",
        "exists", "extract", "float", "greatest", "grouping", "inout", "int", "integer",
        "interval", "json", "json_array", "json_arrayagg", "json_exists", "json_object",
        "json_objectagg", "json_query", "json_scalar", "json_serialize", "json_table",
        "json_value", "least", "merge_action", "national", "nchar", "none", "normalize",
        "nullif", "numeric", "out", "overlay", "position", "precision", "real", "row", "setof",
        "smallint", "substring", "time", "timestamp", "treat", "trim", "values", "varchar",
        "xmlattributes", "xmlconcat", "xmlelement", "xmlexists", "xmlforest", "xmlnamespaces",
        "xmlparse", "xmlpi", "xmlroot", "xmlserialize", "xmltable",
    ]
    .into_iter()
    .collect()
});

/// Caller-supplied identifier quoting
pub trait IdentifierQuoter {
    /// Quote an identifier for embedding in a generated statement
    fn quote_identifier(&self, ident: &str) -> Result<String>;
}

impl<F> IdentifierQuoter for F
where
    F: Fn(&str) -> Result<String>,
{
    fn quote_identifier(&self, ident: &str) -> Result<String> {
        self(ident)
    }
}

/// PostgreSQL `quote_identifier` semantics: quote only when needed
#[derive(Debug, Clone, Copy, Default)]
pub struct PgQuoter;

impl IdentifierQuoter for PgQuoter {
    fn quote_identifier(&self, ident: &str) -> Result<String> {
        validate_identifier(ident)?;

        if is_safe_identifier(ident) {
            Ok(ident.to_string())
        } else {
            Ok(format!("\"{}\"", ident.replace('"', "\"\"")))
        }
    }
}

/// Reject identifiers that can never be quoted safely
pub fn validate_identifier(ident: &str) -> Result<()> {
    if ident.is_empty() {
        return Err(Error::ValidationError("Identifier cannot be empty".to_string()));
    }

    if ident.contains('\0') {
        return Err(Error::ValidationError(format!(
            "Identifier contains a null byte: {:?}",
            ident
        )));
    }

    Ok(())
}

/// Whether an identifier can be emitted without quotes
pub fn is_safe_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let first_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_');

    first_ok
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !PG_KEYWORDS.contains(ident)
}

/// Always double-quote an identifier for use in SQLite queries
pub fn quote_sqlite(ident: &str) -> Result<String> {
    validate_identifier(ident)?;
    Ok(format!("\"{}\"", ident.replace('"', "\"\"")))
}

/// Single-quote a string literal, doubling embedded quotes
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lowercase_names_stay_bare() {
        assert_eq!(PgQuoter.quote_identifier("users").unwrap(), "users");
        assert_eq!(PgQuoter.quote_identifier("_t1").unwrap(), "_t1");
    }

    #[test]
    fn mixed_case_digits_and_keywords_are_quoted() {
        assert_eq!(PgQuoter.quote_identifier("Users").unwrap(), "\"Users\"");
        assert_eq!(PgQuoter.quote_identifier("1st").unwrap(), "\"1st\"");
        assert_eq!(PgQuoter.quote_identifier("order").unwrap(), "\"order\"");
        assert_eq!(PgQuoter.quote_identifier("my table").unwrap(), "\"my table\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(PgQuoter.quote_identifier("a\"b").unwrap(), "\"a\"\"b\"");
        assert_eq!(quote_sqlite("a\"b").unwrap(), "\"a\"\"b\"");
        assert_eq!(quote_literal("it's"), "'it''s'");
    }

    #[test]
    fn empty_and_nul_identifiers_are_rejected() {
        assert!(matches!(PgQuoter.quote_identifier(""), Err(Error::ValidationError(_))));
        assert!(matches!(quote_sqlite("a\0b"), Err(Error::ValidationError(_))));
    }
}
