//! Column type classifier
//!
//! Maps a SQLite declared column type to an affinity and then to the exact
//! PostgreSQL type used in the foreign table. SQLite itself tolerates any
//! declaration and falls back to permissive storage; the classifier does not.
//! Only declarations that map to Text, Integer, Real or Blob affinity, or that
//! name an explicit timestamp, date or boolean type, are accepted. Anything
//! else is reported as [`Error::UnsupportedType`].
//!
//! See <https://sqlite.org/datatype3.html> section 3.1 for the affinity rules.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::types::{Affinity, TargetType};

/// Affinity rules, checked in order. The first rule with a keyword contained
/// in the lowercased declaration wins, so "integer text" is Integer.
pub const AFFINITY_RULES: &[(&[&str], Affinity)] = &[
    (&["int"], Affinity::Integer),
    (&["char", "clob", "text"], Affinity::Text),
    (&["blob"], Affinity::Blob),
    (&["real", "floa", "doub"], Affinity::Real),
];

/// How Numeric-affinity declarations are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFallback {
    /// `timestamp` and `date` must match exactly, `bool*` maps to boolean
    #[default]
    Exact,
    /// Every Numeric declaration except exactly `date` becomes timestamp.
    /// `date` continues to the `bool` prefix test and is rejected.
    LegacyTimestamp,
}

/// Compute the affinity of a declared type
pub fn affinity_of(declaration: &str) -> Affinity {
    let lowered = declaration.to_lowercase();
    affinity_of_lowered(&lowered)
}

fn affinity_of_lowered(lowered: &str) -> Affinity {
    AFFINITY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, affinity)| *affinity)
        .unwrap_or(Affinity::Numeric)
}

/// Stateless classifier from declared types to target types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeClassifier {
    numeric_fallback: NumericFallback,
}

impl TypeClassifier {
    /// Create a classifier with the given Numeric fallback behaviour
    pub fn new(numeric_fallback: NumericFallback) -> Self {
        Self { numeric_fallback }
    }

    pub fn numeric_fallback(&self) -> NumericFallback {
        self.numeric_fallback
    }

    /// Classify a declared type, failing closed on anything unrecognised
    pub fn classify(&self, declaration: &str) -> Result<TargetType> {
        let lowered = declaration.to_lowercase();

        match affinity_of_lowered(&lowered) {
            Affinity::Text => Ok(TargetType::Text),
            Affinity::Integer => Ok(TargetType::BigInt),
            Affinity::Real => Ok(TargetType::DoublePrecision),
            Affinity::Blob => Ok(TargetType::Bytea),
            Affinity::Numeric => self.classify_numeric(declaration, &lowered),
        }
    }

    fn classify_numeric(&self, declaration: &str, lowered: &str) -> Result<TargetType> {
        match self.numeric_fallback {
            NumericFallback::Exact => match lowered {
                "timestamp" => return Ok(TargetType::Timestamp),
                "date" => return Ok(TargetType::Date),
                _ => {}
            },
            NumericFallback::LegacyTimestamp => {
                if lowered != "date" {
                    return Ok(TargetType::Timestamp);
                }
            }
        }

        if lowered.starts_with("bool") {
            return Ok(TargetType::Boolean);
        }

        Err(Error::UnsupportedType(declaration.to_string()))
    }
}

/// Classify with the default (exact) Numeric fallback
pub fn classify(declaration: &str) -> Result<TargetType> {
    TypeClassifier::default().classify(declaration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_puts_integer_first() {
        assert_eq!(AFFINITY_RULES[0].1, Affinity::Integer);
        assert_eq!(affinity_of("integer text"), Affinity::Integer);
        assert_eq!(affinity_of("text blob"), Affinity::Text);
        assert_eq!(affinity_of("blob real"), Affinity::Blob);
    }

    #[test]
    fn affinity_defaults_to_numeric() {
        assert_eq!(affinity_of("decimal(10,2)"), Affinity::Numeric);
        assert_eq!(affinity_of(""), Affinity::Numeric);
    }

    #[test]
    fn point_matches_int_substring() {
        // "point" contains "int"
        assert_eq!(affinity_of("POINT"), Affinity::Integer);
    }

    #[test]
    fn unsupported_type_reports_declaration_as_written() {
        let err = classify("DECIMAL(10,2)").unwrap_err();
        assert_eq!(err.declaration(), Some("DECIMAL(10,2)"));
    }
}
