//! Tests for declared type classification

use pretty_assertions::assert_eq;
use rstest::*;

use sqlite_fdw_import::schema::classifier::{affinity_of, classify, NumericFallback, TypeClassifier};
use sqlite_fdw_import::schema::types::{Affinity, TargetType};
use sqlite_fdw_import::Error;

#[rstest]
#[case("INT")]
#[case("integer")]
#[case("TINYINT")]
#[case("BIGINT")]
#[case("unsigned big int")]
#[case("INT8")]
#[case("mediumint")]
#[case("FLOATING POINT")]
fn int_substring_maps_to_bigint(#[case] declaration: &str) {
    assert_eq!(affinity_of(declaration), Affinity::Integer);
    assert_eq!(classify(declaration).unwrap(), TargetType::BigInt);
}

#[rstest]
#[case("CHARACTER(20)")]
#[case("VARCHAR(255)")]
#[case("varying character(255)")]
#[case("NCHAR(55)")]
#[case("NVARCHAR(100)")]
#[case("TEXT")]
#[case("clob")]
fn text_keywords_map_to_text(#[case] declaration: &str) {
    assert_eq!(affinity_of(declaration), Affinity::Text);
    assert_eq!(classify(declaration).unwrap(), TargetType::Text);
}

#[test]
fn int_takes_precedence_over_text() {
    assert_eq!(classify("integer text").unwrap(), TargetType::BigInt);
    assert_eq!(classify("text integer").unwrap(), TargetType::BigInt);
}

#[test]
fn blob_is_case_insensitive() {
    assert_eq!(classify("BLOB").unwrap(), TargetType::Bytea);
    assert_eq!(classify("blob").unwrap(), TargetType::Bytea);
    assert_eq!(classify("BLOB").unwrap(), classify("blob").unwrap());
}

#[rstest]
#[case("real")]
#[case("float")]
#[case("double precision")]
#[case("DOUBLE")]
fn floating_types_map_to_double_precision(#[case] declaration: &str) {
    assert_eq!(affinity_of(declaration), Affinity::Real);
    assert_eq!(classify(declaration).unwrap(), TargetType::DoublePrecision);
}

#[rstest]
#[case("boolean")]
#[case("bool")]
#[case("booly")]
#[case("BOOLEAN")]
fn bool_prefix_maps_to_boolean(#[case] declaration: &str) {
    assert_eq!(classify(declaration).unwrap(), TargetType::Boolean);
}

#[test]
fn three_character_prefix_is_not_boolean() {
    let err = classify("boo").unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(ref d) if d == "boo"));
}

#[rstest]
#[case("timestamp", TargetType::Timestamp)]
#[case("TIMESTAMP", TargetType::Timestamp)]
#[case("date", TargetType::Date)]
#[case("Date", TargetType::Date)]
fn exact_fallback_matches_whole_declaration(#[case] declaration: &str, #[case] expected: TargetType) {
    let classifier = TypeClassifier::new(NumericFallback::Exact);
    assert_eq!(classifier.classify(declaration).unwrap(), expected);
}

#[rstest]
#[case("numeric")]
#[case("DECIMAL(10,5)")]
#[case("datetime")]
#[case("STRING")]
#[case("timestamp with time zone")]
fn exact_fallback_fails_closed(#[case] declaration: &str) {
    let classifier = TypeClassifier::new(NumericFallback::Exact);
    let err = classifier.classify(declaration).unwrap_err();
    assert_eq!(err.declaration(), Some(declaration));
}

#[rstest]
#[case("numeric")]
#[case("datetime")]
#[case("timestamp")]
#[case("boolean")]
#[case("DECIMAL(10,5)")]
fn legacy_fallback_turns_numeric_into_timestamp(#[case] declaration: &str) {
    let classifier = TypeClassifier::new(NumericFallback::LegacyTimestamp);
    assert_eq!(classifier.classify(declaration).unwrap(), TargetType::Timestamp);
}

#[test]
fn legacy_fallback_rejects_exact_date() {
    let classifier = TypeClassifier::new(NumericFallback::LegacyTimestamp);
    assert!(matches!(
        classifier.classify("date"),
        Err(Error::UnsupportedType(ref d)) if d == "date"
    ));
    assert!(matches!(
        classifier.classify("DATE"),
        Err(Error::UnsupportedType(ref d)) if d == "DATE"
    ));
}

#[test]
fn legacy_fallback_leaves_other_affinities_alone() {
    let classifier = TypeClassifier::new(NumericFallback::LegacyTimestamp);
    assert_eq!(classifier.classify("INTEGER").unwrap(), TargetType::BigInt);
    assert_eq!(classifier.classify("VARCHAR(3)").unwrap(), TargetType::Text);
    assert_eq!(classifier.classify("blob").unwrap(), TargetType::Bytea);
    assert_eq!(classifier.classify("REAL").unwrap(), TargetType::DoublePrecision);
}

#[test]
fn classification_is_repeatable() {
    let classifier = TypeClassifier::default();
    for declaration in ["VARCHAR(20)", "INTEGER", "BLOB", "bool", "timestamp"] {
        let first = classifier.classify(declaration).unwrap();
        let second = classifier.classify(declaration).unwrap();
        assert_eq!(first, second);
    }
    assert!(classifier.classify("money").is_err());
    assert!(classifier.classify("money").is_err());
}

#[test]
fn target_type_sql_names() {
    assert_eq!(TargetType::DoublePrecision.to_string(), "double precision");
    assert_eq!(TargetType::BigInt.as_sql(), "bigint");
    assert_eq!(TargetType::Bytea.as_sql(), "bytea");
}
