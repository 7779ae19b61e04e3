//! Estimate screen state machine for the solara client.
//!
//! - [`Screen`] - Owned display state with a single update path
//! - [`Phase`] - Observable submission phase
//! - [`ScreenView`] - What a front end should render right now
//! - [`StaleResultPolicy`] - Whether a failure hides the previous estimate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/solara-energy/solara/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod phase;
mod screen;

pub use phase::Phase;
pub use screen::{Body, Screen, ScreenView, StaleResultPolicy};
