//! JSON output format.

use serde::Serialize;
use solara_types::{Assumptions, EstimateResult, ServiceInfo};
use std::io::Write;

use crate::{FormatError, Formatter, ReportFormat};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

/// Service document together with the URL it was fetched from.
#[derive(Serialize)]
struct ServiceReport<'a> {
    base_url: &'a str,
    #[serde(flatten)]
    info: &'a ServiceInfo,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<W: Write, T: Serialize + ?Sized>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimateResult,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(estimate, writer)
    }

    fn write_assumptions<W: Write>(
        &self,
        assumptions: &Assumptions,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(assumptions, writer)
    }

    fn write_service_info<W: Write>(
        &self,
        info: &ServiceInfo,
        base_url: &str,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(&ServiceReport { base_url, info }, writer)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_estimate_matches_service_body() {
        let body = r#"{"system_size_kw":4.5,"panel_count":9,"monthly_savings_cop":370400,"installation_cost_cop":18900000,"payback_years":4.25,"area_m2":18.9}"#;
        let estimate: EstimateResult = serde_json::from_str(body).unwrap();

        let mut output = Vec::new();
        JsonFormatter::new()
            .write_estimate(&estimate, &mut output)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), format!("{body}\n"));
    }

    #[test]
    fn test_json_assumptions_pretty() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .with_pretty(true)
            .write_assumptions(&Assumptions::REFERENCE, &mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["panel_power_w"], 550.0);
        assert_eq!(value["performance_ratio"], 0.8);
    }

    #[test]
    fn test_json_service_info() {
        let info = ServiceInfo {
            message: "Solar System Sizing API".into(),
            docs: "/docs".into(),
        };
        let mut output = Vec::new();
        JsonFormatter::new()
            .write_service_info(&info, "http://localhost:8000", &mut output)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["base_url"], "http://localhost:8000");
        assert_eq!(value["message"], "Solar System Sizing API");
    }
}
