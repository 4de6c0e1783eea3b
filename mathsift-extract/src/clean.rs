//! Cleanup rewrites and output rendering
//!
//! `clean_expression` applies a fixed sequence of textual rewrites to one
//! raw expression. `render_output` produces the final artifact from the
//! cleaned list. Backslash doubling happens only at render time: the cleanup
//! regexes must see single backslashes to match LaTeX command syntax.

use once_cell::sync::Lazy;
use regex::Regex;

/// Unescaped `%` to end of line. The regex crate has no lookbehind;
/// `(^|[^\\])%` is equivalent to `(?<!\\)%` here (both treat `\\%` as
/// escaped).
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)(^|[^\\])%.*$").unwrap());

/// No-visual-effect commands with one brace-delimited argument. Only the
/// brace form is matched: a bare `\nonumber` survives untouched.
static BRACED_NOOP_COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(?:label|nonumber|tag|qquad|quad|vspace|hspace)\{[^}]*\}").unwrap()
});

/// Clean one raw expression. Rewrites, in order: strip line comments, delete
/// braced no-op commands, drop blank lines, trim the whole string.
///
/// Total over any string input; applying it twice gives the same result as
/// applying it once.
pub fn clean_expression(raw: &str) -> String {
    let no_comments = LINE_COMMENT.replace_all(raw, "$1");
    let no_commands = BRACED_NOOP_COMMAND.replace_all(&no_comments, "");
    let lines: Vec<&str> = no_commands
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    lines.join("\n").trim().to_string()
}

/// Render the final artifact: double every backslash in each cleaned
/// expression, trim it, then join with one blank line between expressions.
pub fn render_output(cleaned: &[String]) -> String {
    cleaned
        .iter()
        .map(|expr| expr.replace('\\', "\\\\").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_comment_keeps_line_content() {
        assert_eq!(clean_expression("x = y % not typeset"), "x = y");
        // Content before the comment marker is untouched, including the
        // separating space on interior lines.
        assert_eq!(clean_expression("a % one\nb % two"), "a \nb");
    }

    #[test]
    fn test_escaped_percent_survives() {
        assert_eq!(clean_expression("50\\% of n"), "50\\% of n");
    }

    #[test]
    fn test_comment_only_line_is_dropped() {
        assert_eq!(clean_expression("% preamble note\nx=y"), "x=y");
    }

    #[test]
    fn test_removes_braced_label() {
        assert_eq!(clean_expression("\\label{eq:1}x=y"), "x=y");
        assert_eq!(clean_expression("x=y \\tag{3}"), "x=y");
        assert_eq!(clean_expression("a \\hspace{1em} b"), "a  b");
    }

    #[test]
    fn test_bare_nonumber_survives() {
        // Known gap: only the brace-argument form is removed.
        assert_eq!(clean_expression("x=y \\nonumber"), "x=y \\nonumber");
        assert_eq!(clean_expression("a \\quad b"), "a \\quad b");
    }

    #[test]
    fn test_qquad_brace_form_is_removed_whole() {
        assert_eq!(clean_expression("a\\qquad{}b"), "ab");
    }

    #[test]
    fn test_drops_blank_lines_and_trims() {
        assert_eq!(clean_expression("\n  \na = b\n\t\nc = d\n\n"), "a = b\nc = d");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(clean_expression(""), "");
        assert_eq!(clean_expression("   \n  "), "");
    }

    #[test]
    fn test_render_doubles_backslashes_and_joins() {
        let cleaned = vec!["a\\b".to_string(), "c".to_string()];
        assert_eq!(render_output(&cleaned), "a\\\\b\n\nc");
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_output(&[]), "");
    }
}
