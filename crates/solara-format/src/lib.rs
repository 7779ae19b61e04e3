//! Output formatters for solara estimates.
//!
//! This crate provides writers for estimates and reference assumptions:
//!
//! - [`Formatter`] - Common trait for all output formats
//! - [`TextFormatter`] - Aligned, human-readable text
//! - [`JsonFormatter`] - JSON, compact or pretty-printed
//! - [`format_number`] / [`format_currency`] - Number rendering helpers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/solara-energy/solara/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod formatter;
mod json;
mod number;
mod text;

pub use formatter::{FormatError, Formatter, ReportFormat};
pub use json::JsonFormatter;
pub use number::{format_currency, format_number};
pub use text::TextFormatter;
