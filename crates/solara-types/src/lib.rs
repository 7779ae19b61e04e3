//! Core types for the solara solar estimate client.
//!
//! This crate provides the data structures shared across solara:
//!
//! - [`ConsumptionInput`] - Validated monthly electricity consumption
//! - [`CalculationRequest`] - Request body sent to the calculation service
//! - [`EstimateResult`] - Sizing and payback estimate returned by the service
//! - [`Assumptions`] - Reference constants shown alongside results
//! - [`ServiceInfo`] - Root document of the calculation service
//! - [`RequestError`] - Error surfaced to the user for a submission

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/solara-energy/solara/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assumptions;
mod consumption;
mod error;
mod estimate;
mod service;

pub use assumptions::{Assumption, Assumptions, Unit};
pub use consumption::{ConsumptionInput, VALIDATION_MESSAGE, ValidationError};
pub use error::{GENERIC_SERVER_ERROR, RequestError, Result};
pub use estimate::{CalculationRequest, EstimateResult};
pub use service::{ErrorBody, ServiceInfo};
