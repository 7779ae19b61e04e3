//! Abstraction over anything that can produce an estimate.

use async_trait::async_trait;
use solara_types::{ConsumptionInput, EstimateResult, Result};

use crate::EstimateClient;

/// Source of estimates for a validated consumption.
///
/// [`EstimateClient`] is the production implementation; screens accept any
/// implementor so they can be driven without a live service.
#[async_trait]
pub trait Calculator: Send + Sync {
    /// Requests an estimate. Exactly one attempt is made per call.
    ///
    /// # Errors
    ///
    /// Returns a service or network error if no estimate is produced.
    async fn calculate(&self, input: ConsumptionInput) -> Result<EstimateResult>;
}

#[async_trait]
impl Calculator for EstimateClient {
    async fn calculate(&self, input: ConsumptionInput) -> Result<EstimateResult> {
        Self::calculate(self, input).await
    }
}
