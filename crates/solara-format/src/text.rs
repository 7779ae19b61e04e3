//! Plain text output format.

use solara_types::{Assumptions, EstimateResult, ServiceInfo, Unit};
use std::io::Write;

use crate::number::{format_currency, format_number};
use crate::{FormatError, Formatter, ReportFormat};

/// Text formatter.
///
/// Estimate values are printed as received; only currency amounts are
/// rounded to whole pesos for readability.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Assumptions used for labels such as the panel rating.
    assumptions: Assumptions,
    /// Width of the label column.
    label_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter using the reference assumptions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assumptions: Assumptions::REFERENCE,
            label_width: 20,
        }
    }

    /// Sets the assumptions used for labels.
    #[must_use]
    pub const fn with_assumptions(mut self, assumptions: Assumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    /// Sets the width of the label column.
    #[must_use]
    pub const fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    fn row<W: Write>(&self, writer: &mut W, label: &str, value: &str) -> std::io::Result<()> {
        writeln!(writer, "{label:<width$} {value}", width = self.label_width)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimateResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let panels_label = format!(
            "Panels ({} W)",
            format_number(self.assumptions.panel_power_w, 0)
        );

        self.row(
            &mut writer,
            "Payback",
            &format!("{} years", estimate.payback_years),
        )?;
        self.row(
            &mut writer,
            "System size",
            &format!("{} kW", estimate.system_size_kw),
        )?;
        self.row(&mut writer, &panels_label, &estimate.panel_count.to_string())?;
        self.row(
            &mut writer,
            "Monthly savings",
            &format_currency(estimate.monthly_savings_cop),
        )?;
        self.row(
            &mut writer,
            "Installation cost",
            &format_currency(estimate.installation_cost_cop),
        )?;
        self.row(&mut writer, "Required area", &format!("{} m²", estimate.area_m2))?;
        Ok(())
    }

    fn write_assumptions<W: Write>(
        &self,
        assumptions: &Assumptions,
        mut writer: W,
    ) -> Result<(), FormatError> {
        for row in assumptions.rows() {
            let value = match row.unit {
                Unit::Cop => format_currency(row.value),
                Unit::Ratio => format_number(row.value, 2),
                unit => format!("{} {}", format_number(row.value, 2), unit.symbol()),
            };
            self.row(&mut writer, row.label, &value)?;
        }
        Ok(())
    }

    fn write_service_info<W: Write>(
        &self,
        info: &ServiceInfo,
        base_url: &str,
        mut writer: W,
    ) -> Result<(), FormatError> {
        self.row(&mut writer, "Service", &info.message)?;
        self.row(&mut writer, "URL", base_url)?;
        if !info.docs.is_empty() {
            let docs = if info.docs.starts_with('/') {
                format!("{base_url}{}", info.docs)
            } else {
                info.docs.clone()
            };
            self.row(&mut writer, "Docs", &docs)?;
        }
        Ok(())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
