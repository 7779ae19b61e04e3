//! Health command implementation.

use crate::display::{Format, spinner, write_service_info};
use anyhow::{Context, Result};
use solara_lib::prelude::*;

/// Probe the calculation service root and print what it reports.
pub(crate) async fn health(client: &EstimateClient, format: Format, quiet: bool) -> Result<()> {
    let base_url = client.config().base_url.as_str();

    let progress = spinner(quiet || matches!(format, Format::Json), "Contacting service...")?;
    let outcome = client.service_info().await;
    progress.finish_and_clear();

    let info = outcome.with_context(|| format!("Calculation service at {base_url} is unavailable"))?;
    write_service_info(&info, base_url, format)
}
