//! Output format abstraction.

use solara_types::{Assumptions, EstimateResult, ServiceInfo};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON document.
    Json,
}

impl ReportFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes an estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimateResult,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes the reference assumptions.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_assumptions<W: Write>(
        &self,
        assumptions: &Assumptions,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes the service root document.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_service_info<W: Write>(
        &self,
        info: &ServiceInfo,
        base_url: &str,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the format this formatter produces.
    fn format(&self) -> ReportFormat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("TXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!(matches!(
            "yaml".parse::<ReportFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_report_format_display() {
        let names: Vec<_> = ReportFormat::all().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["text", "json"]);
    }
}
