//! Property tests for the cleanup rewrites

use mathsift_extract::clean_expression;
use proptest::prelude::*;

/// Fragments that compose into realistic raw expressions: plain math text,
/// whole LaTeX commands, comments, and blank lines. Fragments are whole
/// tokens so that concatenation never fabricates a half-spliced command.
fn expression_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 +=^_()-]{0,12}",
        Just("\\alpha".to_string()),
        Just("\\frac{a}{b}".to_string()),
        Just("\\label{eq:1}".to_string()),
        Just("\\nonumber".to_string()),
        Just("\\qquad{}".to_string()),
        Just("% trailing comment".to_string()),
        Just("\n".to_string()),
        Just("   \n".to_string()),
    ]
}

fn raw_expression() -> impl Strategy<Value = String> {
    proptest::collection::vec(expression_fragment(), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn cleanup_is_idempotent(raw in raw_expression()) {
        let once = clean_expression(&raw);
        prop_assert_eq!(clean_expression(&once), once);
    }

    #[test]
    fn cleanup_never_panics(raw in "\\PC*") {
        let _ = clean_expression(&raw);
    }

    #[test]
    fn cleanup_output_is_trimmed(raw in raw_expression()) {
        let cleaned = clean_expression(&raw);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
