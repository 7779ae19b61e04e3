//! CLI command implementations.

pub(crate) mod assumptions;
pub(crate) mod estimate;
pub(crate) mod health;
pub(crate) mod interactive;
