//! Interactive estimate screen.
//!
//! Prompts for the monthly consumption repeatedly and renders the screen
//! after every submission. Esc or Ctrl-C leaves the loop.

use crate::display::{Format, render_screen, spinner, write_assumptions};
use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use solara_lib::format_number;
use solara_lib::prelude::*;

/// Run the prompt loop until the user leaves.
pub(crate) async fn interactive(
    client: &EstimateClient,
    policy: StaleResultPolicy,
    quiet: bool,
) -> Result<()> {
    let assumptions = Assumptions::REFERENCE;
    let mut screen = Screen::with_policy(policy);

    println!("Solar panel simulator");
    println!("Service: {}", client.config().base_url);
    println!();
    write_assumptions(&assumptions, Format::Text, false)?;
    render_screen(&screen.view(), std::io::stdout().lock())?;

    let help = format!(
        "Based on a tariff of {} COP/kWh. Esc to quit.",
        format_number(assumptions.energy_price_cop_per_kwh, 2)
    );

    loop {
        let answer = Text::new("Monthly consumption (kWh):")
            .with_placeholder("e.g. 400")
            .with_initial_value(screen.input())
            .with_help_message(&help)
            .prompt_skippable();

        let raw = match answer {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read consumption"),
        };

        screen.set_input(raw);

        // Validation failures are rendered without touching the network
        if let Some(input) = screen.begin_submit() {
            let progress = spinner(quiet, "Calculating...")?;
            let outcome = client.calculate(input).await;
            progress.finish_and_clear();
            screen.finish(outcome);
        }

        tracing::debug!(phase = %screen.phase(), "submission settled");
        render_screen(&screen.view(), std::io::stdout().lock())?;
    }

    Ok(())
}
