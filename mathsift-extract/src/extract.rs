//! Scan passes over the source text
//!
//! Six independent passes, one per delimiter convention, each over the whole
//! source. Within a pass, matches are found left-to-right, non-overlapping,
//! shortest-match-first. Output ordering is all matches from pass 1, then all
//! from pass 2, and so on, never merged by source position.

use crate::patterns::scan_passes;

/// Scan `source` for mathematical expressions under every recognized
/// delimiter convention.
///
/// For each match: if the pattern has an inner capture group and the captured
/// text is non-empty, the inner text is kept; otherwise the full matched span
/// (delimiters included) is kept. An empty result means no convention
/// matched; that is not an error.
pub fn extract_math_expressions(source: &str) -> Vec<String> {
    let mut found = Vec::new();
    for pass in scan_passes() {
        for caps in pass.regex.captures_iter(source) {
            let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            if inner.is_empty() {
                found.push(caps[0].to_string());
            } else {
                found.push(inner.to_string());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiters_yields_empty() {
        assert!(extract_math_expressions("nothing mathematical here").is_empty());
        assert!(extract_math_expressions("").is_empty());
    }

    #[test]
    fn test_paren_form_keeps_delimiters() {
        assert_eq!(extract_math_expressions("\\(a+b\\)"), vec!["\\(a+b\\)"]);
    }

    #[test]
    fn test_bracket_form_strips_delimiters() {
        assert_eq!(extract_math_expressions("\\[a+b\\]"), vec!["a+b"]);
    }

    #[test]
    fn test_dollar_pairs_are_separate_matches() {
        assert_eq!(extract_math_expressions("$x$ and $y$"), vec!["x", "y"]);
    }

    #[test]
    fn test_output_is_pass_grouped_not_positional() {
        // The $ match comes first in the text but after the \( \) match in
        // the output, because passes run in fixed order.
        let out = extract_math_expressions("$first$ then \\(second\\)");
        assert_eq!(out, vec!["\\(second\\)", "first"]);
    }

    #[test]
    fn test_environments() {
        let source = "\\begin{equation}\nE = mc^2\n\\end{equation}\n\
                      \\begin{align}\na &= b \\\\\nc &= d\n\\end{align}\n\
                      \\begin{multline}\nx + y\n\\end{multline}";
        let out = extract_math_expressions(source);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "\nE = mc^2\n");
        assert_eq!(out[1], "\na &= b \\\\\nc &= d\n");
        assert_eq!(out[2], "\nx + y\n");
    }

    #[test]
    fn test_double_dollar_missegments() {
        // $$display$$ is not a recognized convention; the single-$ pass eats
        // the leading $ into the captured content. Pinned behavior.
        assert_eq!(extract_math_expressions("$$x+y$$"), vec!["$x+y"]);
    }

    #[test]
    fn test_passes_do_not_consume_for_each_other() {
        // A $ pair inside a bracket block is still found by the $ pass.
        let out = extract_math_expressions("\\[outer $inner$ rest\\]");
        assert_eq!(out, vec!["outer $inner$ rest", "inner"]);
    }
}
