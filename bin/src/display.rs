//! Display utilities and output formatting for the solara CLI.

use anyhow::Result;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use solara_lib::prelude::*;
use std::io::Write;
use std::time::Duration;

/// Output format for command results.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReportFormat::from(*self))
    }
}

/// Write an estimate to stdout in the specified format.
pub(crate) fn write_estimate(estimate: &EstimateResult, format: Format, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout().lock();
    match format {
        Format::Text => TextFormatter::new().write_estimate(estimate, stdout)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_estimate(estimate, stdout)?,
    }
    Ok(())
}

/// Write the reference assumptions to stdout in the specified format.
pub(crate) fn write_assumptions(
    assumptions: &Assumptions,
    format: Format,
    pretty: bool,
) -> Result<()> {
    let stdout = std::io::stdout().lock();
    match format {
        Format::Text => TextFormatter::new().write_assumptions(assumptions, stdout)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_assumptions(assumptions, stdout)?,
    }
    Ok(())
}

/// Write the service root document to stdout in the specified format.
pub(crate) fn write_service_info(info: &ServiceInfo, base_url: &str, format: Format) -> Result<()> {
    let stdout = std::io::stdout().lock();
    match format {
        Format::Text => TextFormatter::new().write_service_info(info, base_url, stdout)?,
        Format::Json => JsonFormatter::new().write_service_info(info, base_url, stdout)?,
    }
    Ok(())
}

/// Render the estimate screen: the error line, if any, then either the
/// estimate or the placeholder.
pub(crate) fn render_screen<W: Write>(view: &ScreenView<'_>, mut writer: W) -> Result<()> {
    writeln!(writer)?;
    if let Some(error) = view.error {
        writeln!(writer, "Error: {error}")?;
        writeln!(writer)?;
    }

    match view.body {
        Body::Result(estimate) => {
            writeln!(writer, "Estimated results")?;
            writeln!(writer, "{}", "-".repeat(40))?;
            TextFormatter::new().write_estimate(estimate, &mut writer)?;
        }
        Body::Placeholder => {
            writeln!(writer, "Start by entering your monthly consumption.")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

/// Create a spinner shown while a request is outstanding.
pub(crate) fn spinner(quiet: bool, message: &str) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: &ScreenView<'_>) -> String {
        let mut output = Vec::new();
        render_screen(view, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_placeholder() {
        let text = render(&Screen::new().view());
        assert!(text.contains("Start by entering your monthly consumption."));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_render_error_with_retained_result() {
        let estimate = EstimateResult {
            system_size_kw: 4.5,
            panel_count: 9,
            monthly_savings_cop: 370_400.0,
            installation_cost_cop: 18_900_000.0,
            payback_years: 4.25,
            area_m2: 18.9,
        };
        let mut screen = Screen::new();
        screen.set_input("400");
        screen.begin_submit();
        screen.finish(Ok(estimate));
        screen.set_input("0");
        screen.begin_submit();

        let text = render(&screen.view());

        assert!(text.contains("Error: Enter a value greater than zero."));
        assert!(text.contains("370,400 COP"));
        assert!(text.contains("4.25 years"));
    }
}
