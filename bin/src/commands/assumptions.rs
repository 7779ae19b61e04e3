//! Assumptions command implementation.

use crate::display::{Format, write_assumptions};
use anyhow::Result;
use solara_lib::format_number;
use solara_lib::prelude::*;

/// Show the reference assumptions behind the service's estimates.
pub(crate) fn show_assumptions(format: Format, pretty: bool) -> Result<()> {
    let assumptions = Assumptions::REFERENCE;

    if matches!(format, Format::Text) {
        println!("Model assumptions");
        println!("{}", "-".repeat(40));
    }

    write_assumptions(&assumptions, format, pretty)?;

    if matches!(format, Format::Text) {
        println!(
            "\nEach installed kW yields about {} kWh per day.",
            format_number(assumptions.effective_sun_hours(), 2)
        );
        println!("Note: Estimates are computed by the calculation service.");
    }

    Ok(())
}
