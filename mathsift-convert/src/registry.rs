//! Format registry for input format discovery and selection
//!
//! This module provides a centralized registry for all available input
//! formats. Formats can be registered and retrieved by name, or resolved
//! from a file extension.

use crate::error::ConvertError;
use crate::format::SourceFormat;
use std::collections::HashMap;
use std::path::Path;

/// Registry of input document formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let format = registry.get("markdown")?;
/// let latex = format.to_latex(&input, workdir, &options)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn SourceFormat>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: SourceFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn SourceFormat, ConvertError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve a format from a path's file extension (case-insensitive)
    pub fn for_path(&self, path: &Path) -> Result<&dyn SourceFormat, ConvertError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| ConvertError::FormatNotFound(path.display().to_string()))?;
        self.formats
            .values()
            .find(|f| f.file_extensions().contains(&ext.as_str()))
            .map(|f| f.as_ref())
            .ok_or(ConvertError::FormatNotFound(ext))
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::latex::LatexFormat);
        registry.register(crate::formats::pandoc::PandocFormat::markdown());
        registry.register(crate::formats::pandoc::PandocFormat::html());
        registry.register(crate::formats::pandoc::PandocFormat::docx());
        registry.register(crate::formats::pandoc::PandocFormat::rst());
        registry.register(crate::formats::pandoc::PandocFormat::epub());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
