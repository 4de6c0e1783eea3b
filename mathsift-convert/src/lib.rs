//! Document-to-LaTeX conversion and the extraction pipeline
//!
//!     This crate wraps the pure extraction core (mathsift-extract) with the
//!     collaborators that core deliberately excludes: turning an input
//!     document into LaTeX text, publishing the final artifact, and cleaning
//!     up intermediate files.
//!
//!     This is a pure lib, that is, it powers the mathsift CLI but is shell
//!     agnostic: no code here prints, reads env vars or otherwise assumes a
//!     shell environment.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # SourceFormat trait + converter options
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── latex.rs            # Passthrough for inputs already in LaTeX
//!     │   └── pandoc.rs           # Everything else, via the external pandoc tool
//!     ├── pipeline.rs             # ExtractionSpec → ExtractionResult
//!     └── lib.rs
//!
//! Conversion strategy
//!
//!     Conversion is offloaded to pandoc rather than mapping each format's
//!     AST in-process. The scope here is plumbing: locate the tool, run it
//!     with the right arguments, collect its LaTeX output. Inputs that are
//!     already LaTeX never touch the converter.
//!
//!     Every conversion runs inside a scratch directory owned by the
//!     pipeline. It is deleted when the run finishes, success or failure
//!     alike; the keep_intermediate option leaks it for debugging instead.

pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod registry;

pub use error::ConvertError;
pub use format::{ConverterOptions, SourceFormat};
pub use pipeline::{run_extraction, Artifact, ExtractionResult, ExtractionSpec};
pub use registry::FormatRegistry;
