//! HTTP client for the solara solar estimate service.
//!
//! This crate provides the request side of solara:
//!
//! - [`url::base_url`] - Normalizes the configured service base URL
//! - [`EstimateClient`] - Validates input and requests an estimate
//! - [`ClientConfig`] - Base URL, timeouts and user agent
//! - [`Calculator`] - Seam for anything that produces estimates

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/solara-energy/solara/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;
mod client;
pub mod url;

pub use calculator::Calculator;
pub use client::{ClientConfig, EstimateClient};
