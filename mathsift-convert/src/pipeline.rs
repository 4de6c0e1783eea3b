//! End-to-end extraction pipeline
//!
//! Resolve the input format, convert to LaTeX inside a scratch directory,
//! run the extraction core, publish the artifact. The scratch directory is
//! removed when the run finishes, on success and on every failure path
//! alike; `keep_intermediate` leaks it instead and reports where it is.

use crate::error::ConvertError;
use crate::format::ConverterOptions;
use crate::registry::FormatRegistry;
use mathsift_extract::{clean_expression, extract_math_expressions, render_output};
use std::fs;
use std::path::{Path, PathBuf};

/// One extraction run: input document plus the knobs around it.
#[derive(Debug)]
pub struct ExtractionSpec<'a> {
    pub input: &'a Path,
    /// Format name override; inferred from the file extension when absent.
    pub format: Option<&'a str>,
    /// Write the artifact here; in-memory when absent.
    pub output: Option<PathBuf>,
    pub options: ConverterOptions,
}

impl<'a> ExtractionSpec<'a> {
    pub fn new(input: &'a Path) -> Self {
        Self {
            input,
            format: None,
            output: None,
            options: ConverterOptions::default(),
        }
    }

    pub fn with_format(mut self, format: &'a str) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Cleaned expressions, in extraction order.
    pub expressions: Vec<String>,
    /// The rendered plain-text artifact.
    pub artifact: Artifact,
    /// Where the scratch directory was kept, when requested.
    pub intermediate_dir: Option<PathBuf>,
}

/// Run the whole pipeline for one document.
pub fn run_extraction(spec: ExtractionSpec<'_>) -> Result<ExtractionResult, ConvertError> {
    let registry = FormatRegistry::with_defaults();
    let format = match spec.format {
        Some(name) => registry.get(name)?,
        None => registry.for_path(spec.input)?,
    };

    let workdir = tempfile::tempdir().map_err(|err| {
        ConvertError::ConversionFailed(format!("could not create scratch directory: {err}"))
    })?;

    let latex = format.to_latex(spec.input, workdir.path(), &spec.options)?;

    let expressions: Vec<String> = extract_math_expressions(&latex)
        .iter()
        .map(|raw| clean_expression(raw))
        .collect();
    let rendered = render_output(&expressions);

    let intermediate_dir = if spec.options.keep_intermediate {
        Some(workdir.keep())
    } else {
        None
    };

    let artifact = match spec.output {
        Some(path) => {
            fs::write(&path, rendered.as_bytes()).map_err(|err| {
                ConvertError::ConversionFailed(format!(
                    "could not write '{}': {}",
                    path.display(),
                    err
                ))
            })?;
            Artifact::File(path)
        }
        None => Artifact::InMemory(rendered),
    };

    Ok(ExtractionResult {
        expressions,
        artifact,
        intermediate_dir,
    })
}
