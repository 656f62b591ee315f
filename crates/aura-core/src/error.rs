//! Error types for Aura operations.
//!
//! Nothing in the primary query flow is fatal: load failures fall back to
//! the embedded dataset, unresolved references are skipped, and telemetry
//! failures are swallowed. These types cover the paths that do surface
//! errors (report export, explicit file writes).

use std::error::Error;
use std::fmt;

/// Result type for Aura operations.
pub type Result<T> = std::result::Result<T, AuraError>;

/// Errors that can occur during Aura operations.
#[derive(Debug, Clone)]
pub enum AuraError {
    /// Knowledge-base data errors.
    Data(DataError),
    /// Report/export errors.
    Report(ReportError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for AuraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuraError::Data(e) => write!(f, "Data error: {}", e),
            AuraError::Report(e) => write!(f, "Report error: {}", e),
            AuraError::Io(msg) => write!(f, "I/O error: {}", msg),
            AuraError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for AuraError {}

impl From<std::io::Error> for AuraError {
    fn from(e: std::io::Error) -> Self {
        AuraError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for AuraError {
    fn from(e: serde_yaml::Error) -> Self {
        AuraError::Serialization(e.to_string())
    }
}

/// Knowledge-base data errors.
#[derive(Debug, Clone)]
pub enum DataError {
    /// A data source file was not found.
    NotFound(String),
    /// A data source file could not be parsed.
    Malformed(String),
    /// The store contains no records.
    EmptyStore,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::NotFound(path) => write!(f, "Data source not found: {}", path),
            DataError::Malformed(msg) => write!(f, "Malformed data source: {}", msg),
            DataError::EmptyStore => write!(f, "Knowledge store is empty"),
        }
    }
}

/// Report/export errors.
#[derive(Debug, Clone)]
pub enum ReportError {
    /// A page content stream could not be encoded.
    PageEncode(String),
    /// The output document could not be written.
    WriteFailed(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::PageEncode(msg) => write!(f, "Page encoding failed: {}", msg),
            ReportError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

// Convenience constructors
impl AuraError {
    pub fn source_not_found(path: impl Into<String>) -> Self {
        AuraError::Data(DataError::NotFound(path.into()))
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AuraError::Data(DataError::Malformed(msg.into()))
    }

    pub fn page_encode(msg: impl Into<String>) -> Self {
        AuraError::Report(ReportError::PageEncode(msg.into()))
    }

    pub fn write_failed(msg: impl Into<String>) -> Self {
        AuraError::Report(ReportError::WriteFailed(msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let e = AuraError::source_not_found("risks.yaml");
        assert!(e.to_string().contains("Data error"));
        assert!(e.to_string().contains("risks.yaml"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: AuraError = io.into();
        assert!(matches!(e, AuraError::Io(_)));
    }
}
