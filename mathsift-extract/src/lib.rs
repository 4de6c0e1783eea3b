//! Math-expression extraction core
//!
//!     This crate turns LaTeX-formatted text into an ordered list of the
//!     mathematical expressions it contains. It is the pure center of the
//!     mathsift toolchain: no I/O, no process spawning, no environment access.
//!     Document conversion and output publishing live in mathsift-convert.
//!
//! Architecture
//!
//!     - patterns: the six recognized delimiter conventions, compiled once as
//!       static regexes
//!     - extract: six independent scan passes producing raw expression strings
//!     - clean: per-expression cleanup rewrites and the final output rendering
//!
//!     The file structure :
//!     .
//!     ├── patterns.rs         # Delimiter conventions (static Lazy regexes)
//!     ├── extract.rs          # Scan passes over the source text
//!     ├── clean.rs            # Cleanup rewrites + output rendering
//!     └── lib.rs
//!
//! Design
//!
//!     Matching is deliberately a fixed set of independent regex passes, not a
//!     LaTeX grammar. Each pass scans the whole source; passes do not consume
//!     text from one another, and the output keeps per-pass grouping rather
//!     than being sorted by source position. The single-$ pass mis-segments
//!     $$display$$ blocks; that behavior is part of the contract and is pinned
//!     by tests, do not "fix" it by changing the matching semantics.
//!
//!     Every function here is total over string input and deterministic, so
//!     callers may process documents in parallel with no coordination. The
//!     only shared state is the lazily compiled pattern set (compile once,
//!     read many).

pub mod clean;
pub mod extract;
pub mod patterns;

pub use clean::{clean_expression, render_output};
pub use extract::extract_math_expressions;

/// Full pipeline over one source text: extract, clean each expression,
/// render the final artifact.
///
/// Repeated invocations over the same input produce byte-identical output.
pub fn process_source(source: &str) -> String {
    let raw = extract_math_expressions(source);
    let cleaned: Vec<String> = raw.iter().map(|expr| clean_expression(expr)).collect();
    render_output(&cleaned)
}
