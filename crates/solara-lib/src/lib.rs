//! Rust library for requesting residential solar sizing estimates.
//!
//! This is a facade crate that re-exports functionality from the solara
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use solara_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EstimateClient::new(ClientConfig::from_env())?;
//!
//!     let mut screen = Screen::new();
//!     screen.set_input("400");
//!     screen.submit(&client).await;
//!
//!     if let Some(estimate) = screen.result() {
//!         println!("{} panels, payback in {} years", estimate.panel_count, estimate.payback_years);
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/solara-energy/solara/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use solara_types::*;

// Re-export the HTTP client
#[cfg(feature = "fetch")]
pub use solara_fetch::{Calculator, ClientConfig, EstimateClient, url};

// Re-export the screen state machine
#[cfg(feature = "screen")]
pub use solara_screen::{Body, Phase, Screen, ScreenView, StaleResultPolicy};

// Re-export formatters
#[cfg(feature = "format")]
pub use solara_format::{
    FormatError, Formatter, JsonFormatter, ReportFormat, TextFormatter, format_currency,
    format_number,
};

/// Prelude module for convenient imports.
///
/// ```
/// use solara_lib::prelude::*;
/// ```
pub mod prelude {
    pub use solara_types::{
        Assumptions, ConsumptionInput, EstimateResult, RequestError, Result, ServiceInfo,
        ValidationError,
    };

    #[cfg(feature = "fetch")]
    pub use solara_fetch::{Calculator, ClientConfig, EstimateClient};

    #[cfg(feature = "screen")]
    pub use solara_screen::{Body, Phase, Screen, ScreenView, StaleResultPolicy};

    #[cfg(feature = "format")]
    pub use solara_format::{Formatter, JsonFormatter, ReportFormat, TextFormatter};
}
