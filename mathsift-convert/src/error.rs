//! Error type for the conversion pipeline

use std::fmt;

/// Error that can occur while turning a document into extracted math
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Format not found in the registry (unknown name or extension)
    FormatNotFound(String),
    /// Collaborator failure: converter missing, process error, I/O.
    /// Single kind carrying a diagnostic message; the extraction core
    /// itself has no failure modes.
    ConversionFailed(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ConvertError::ConversionFailed(msg) => write!(f, "Conversion failed: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConvertError::FormatNotFound("odt".to_string()).to_string(),
            "Format 'odt' not found"
        );
        assert_eq!(
            ConvertError::ConversionFailed("pandoc exited with 64".to_string()).to_string(),
            "Conversion failed: pandoc exited with 64"
        );
    }
}
