//! Pandoc-backed formats
//!
//! Everything that is not already LaTeX goes through the external pandoc
//! tool: `pandoc -f <format> -t latex -o <workdir>/converted.tex <input>`.
//! One registered instance per supported input format; they differ only in
//! the format name pandoc is told to read.

use crate::error::ConvertError;
use crate::format::{ConverterOptions, SourceFormat};
use std::fs;
use std::path::Path;
use std::process::Command;

/// An input format converted to LaTeX by the external pandoc tool.
pub struct PandocFormat {
    name: &'static str,
    pandoc_name: &'static str,
    extensions: &'static [&'static str],
    description: &'static str,
}

impl PandocFormat {
    pub fn markdown() -> Self {
        PandocFormat {
            name: "markdown",
            pandoc_name: "markdown",
            extensions: &["md", "markdown"],
            description: "Markdown, converted via pandoc",
        }
    }

    pub fn html() -> Self {
        PandocFormat {
            name: "html",
            pandoc_name: "html",
            extensions: &["html", "htm"],
            description: "HTML, converted via pandoc",
        }
    }

    pub fn docx() -> Self {
        PandocFormat {
            name: "docx",
            pandoc_name: "docx",
            extensions: &["docx"],
            description: "Office Open XML, converted via pandoc",
        }
    }

    pub fn rst() -> Self {
        PandocFormat {
            name: "rst",
            pandoc_name: "rst",
            extensions: &["rst"],
            description: "reStructuredText, converted via pandoc",
        }
    }

    pub fn epub() -> Self {
        PandocFormat {
            name: "epub",
            pandoc_name: "epub",
            extensions: &["epub"],
            description: "EPUB, converted via pandoc",
        }
    }
}

impl SourceFormat for PandocFormat {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn file_extensions(&self) -> &[&str] {
        self.extensions
    }

    fn to_latex(
        &self,
        input: &Path,
        workdir: &Path,
        options: &ConverterOptions,
    ) -> Result<String, ConvertError> {
        let executable = which::which(&options.executable).map_err(|_| {
            ConvertError::ConversionFailed(format!(
                "converter '{}' not found on PATH",
                options.executable
            ))
        })?;

        let converted = workdir.join("converted.tex");
        let output = Command::new(&executable)
            .arg("-f")
            .arg(self.pandoc_name)
            .arg("-t")
            .arg("latex")
            .args(&options.extra_args)
            .arg("-o")
            .arg(&converted)
            .arg(input)
            .output()
            .map_err(|err| {
                ConvertError::ConversionFailed(format!(
                    "could not run '{}': {}",
                    executable.display(),
                    err
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::ConversionFailed(format!(
                "'{}' exited with {}: {}",
                executable.display(),
                output.status,
                stderr.trim()
            )));
        }

        fs::read_to_string(&converted).map_err(|err| {
            ConvertError::ConversionFailed(format!(
                "could not read converted output '{}': {}",
                converted.display(),
                err
            ))
        })
    }
}
