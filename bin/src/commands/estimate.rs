//! Estimate command implementation.
//!
//! Submits a single consumption value and prints the returned estimate.

use crate::display::{Format, spinner, write_estimate};
use anyhow::Result;
use solara_lib::prelude::*;

/// Request one estimate and write it to stdout.
pub(crate) async fn estimate(
    client: &EstimateClient,
    monthly_kwh: &str,
    format: Format,
    pretty: bool,
    quiet: bool,
) -> Result<()> {
    let progress = spinner(quiet, "Calculating...")?;
    let outcome = client.submit(monthly_kwh).await;
    progress.finish_and_clear();

    write_estimate(&outcome?, format, pretty)
}
