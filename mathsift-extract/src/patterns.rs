//! Delimiter conventions
//!
//! The six recognized conventions, in fixed scan order. All patterns are
//! defined as static references using `once_cell::sync::Lazy`, compiled once
//! on first use and shared across every scan.

use once_cell::sync::Lazy;
use regex::Regex;

/// Inline parenthesis form, `\( ... \)`. No capture group: the full
/// delimited span is the expression.
static INLINE_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\(.+?\\\)").unwrap());

/// Display bracket form, `\[ ... \]`, matched across line boundaries.
static DISPLAY_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\\[(.+?)\\\]").unwrap());

/// Single-dollar inline math. Non-greedy, so `$a$ text $b$` yields two
/// matches. `$$display$$` blocks are mis-segmented by this pass; that is
/// part of the contract (see crate docs).
static INLINE_DOLLAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(.+?)\$").unwrap());

static EQUATION_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{equation\}(.+?)\\end\{equation\}").unwrap());

static ALIGN_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{align\}(.+?)\\end\{align\}").unwrap());

static MULTLINE_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{multline\}(.+?)\\end\{multline\}").unwrap());

/// One recognized delimiter convention.
pub struct DelimiterPattern {
    /// Convention name (used in diagnostics and tests only).
    pub name: &'static str,
    /// Compiled scan pattern. Patterns with a capture group yield the inner
    /// content of a match; patterns without one yield the full span.
    pub regex: &'static Lazy<Regex>,
}

/// The process-wide pattern set, in scan order.
pub fn scan_passes() -> [DelimiterPattern; 6] {
    [
        DelimiterPattern {
            name: "inline-paren",
            regex: &INLINE_PAREN,
        },
        DelimiterPattern {
            name: "display-bracket",
            regex: &DISPLAY_BRACKET,
        },
        DelimiterPattern {
            name: "inline-dollar",
            regex: &INLINE_DOLLAR,
        },
        DelimiterPattern {
            name: "equation-env",
            regex: &EQUATION_ENV,
        },
        DelimiterPattern {
            name: "align-env",
            regex: &ALIGN_ENV,
        },
        DelimiterPattern {
            name: "multline-env",
            regex: &MULTLINE_ENV,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_are_in_fixed_order() {
        let names: Vec<&str> = scan_passes().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "inline-paren",
                "display-bracket",
                "inline-dollar",
                "equation-env",
                "align-env",
                "multline-env",
            ]
        );
    }

    #[test]
    fn test_multi_line_passes_cross_newlines() {
        let source = "\\begin{equation}\na = b\n\\end{equation}";
        assert!(scan_passes()[3].regex.is_match(source));

        // The inline passes stay within a line.
        assert!(!scan_passes()[0].regex.is_match("\\(a\n+b\\)"));
        assert!(!scan_passes()[2].regex.is_match("$a\n+b$"));
    }
}
