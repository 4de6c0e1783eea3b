//! LaTeX passthrough format
//!
//! Inputs that are already LaTeX skip conversion entirely; the file is read
//! as UTF-8 text and handed straight to the extraction core.

use crate::error::ConvertError;
use crate::format::{ConverterOptions, SourceFormat};
use std::fs;
use std::path::Path;

/// The native input: LaTeX source, no converter involved.
pub struct LatexFormat;

impl SourceFormat for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX source, read as-is without conversion"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn to_latex(
        &self,
        input: &Path,
        _workdir: &Path,
        _options: &ConverterOptions,
    ) -> Result<String, ConvertError> {
        fs::read_to_string(input).map_err(|err| {
            ConvertError::ConversionFailed(format!(
                "could not read '{}': {}",
                input.display(),
                err
            ))
        })
    }
}
