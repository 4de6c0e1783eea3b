//! SourceFormat trait definition
//!
//! This module defines the core SourceFormat trait that all input format
//! implementations must implement, plus the converter settings shared by all
//! of them.

use crate::error::ConvertError;
use std::path::Path;

/// Converter process settings shared by all formats.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterOptions {
    /// Executable used for non-LaTeX inputs.
    pub executable: String,
    /// Extra arguments appended to every converter invocation.
    pub extra_args: Vec<String>,
    /// Keep the intermediate working directory instead of deleting it.
    pub keep_intermediate: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            executable: "pandoc".to_string(),
            extra_args: Vec::new(),
            keep_intermediate: false,
        }
    }
}

/// Trait for input document formats
///
/// Implementors turn one input document into LaTeX-formatted text. `workdir`
/// is a scratch directory owned by the caller; anything written there is
/// cleaned up (or kept) by the pipeline, never by the format itself.
pub trait SourceFormat: Send + Sync {
    /// The name of this format (e.g., "latex", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions recognized as this format (lowercase, no dot)
    fn file_extensions(&self) -> &[&str];

    /// Produce LaTeX-formatted text from the input document
    fn to_latex(
        &self,
        input: &Path,
        workdir: &Path,
        options: &ConverterOptions,
    ) -> Result<String, ConvertError>;
}
