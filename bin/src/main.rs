//! solara CLI - Residential solar panel sizing and payback estimates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solara_lib::prelude::*;
use std::time::Duration;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "solara")]
#[command(about = "Residential solar panel sizing and payback estimates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress spinners and logs)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Calculation service base URL. Defaults to $SOLARA_API_URL, then http://localhost:8000
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Hide the previous estimate when a later submission fails
    #[arg(long, global = true)]
    clear_stale: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter consumption values at a prompt and see estimates (default)
    Interactive,

    /// Request a single estimate
    Estimate {
        /// Monthly consumption in kWh (e.g., 400)
        #[arg(allow_hyphen_values = true)]
        monthly_kwh: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the reference assumptions behind the estimates
    Assumptions {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check that the calculation service is reachable
    Health {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
}

impl Cli {
    fn client(&self) -> Result<EstimateClient> {
        let config = match self.api_url.as_deref() {
            Some(url) => ClientConfig::default().with_base_url(Some(url)),
            None => ClientConfig::from_env(),
        }
        .with_timeout(Duration::from_secs(self.timeout));

        EstimateClient::new(config).context("Failed to create HTTP client")
    }

    const fn policy(&self) -> StaleResultPolicy {
        if self.clear_stale {
            StaleResultPolicy::Clear
        } else {
            StaleResultPolicy::Retain
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command.as_ref() {
        None | Some(Commands::Interactive) => {
            let client = cli.client()?;
            commands::interactive::interactive(&client, cli.policy(), cli.quiet).await
        }
        Some(Commands::Estimate {
            monthly_kwh,
            format,
            pretty,
        }) => {
            let client = cli.client()?;
            commands::estimate::estimate(&client, monthly_kwh, *format, *pretty, cli.quiet).await
        }
        Some(Commands::Assumptions { format, pretty }) => {
            commands::assumptions::show_assumptions(*format, *pretty)
        }
        Some(Commands::Health { format }) => {
            let client = cli.client()?;
            commands::health::health(&client, *format, cli.quiet).await
        }
    }
}
