//! Wire types exchanged with the calculation service.

use serde::{Deserialize, Serialize};

use crate::ConsumptionInput;

/// Request body for `POST /calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly consumption in kWh.
    #[serde(serialize_with = "number::serialize")]
    pub monthly_kwh: f64,
}

impl CalculationRequest {
    /// Creates the request for a validated consumption.
    #[must_use]
    pub const fn new(input: ConsumptionInput) -> Self {
        Self {
            monthly_kwh: input.monthly_kwh(),
        }
    }

    /// Serializes the request to its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    ///
    /// # Example
    ///
    /// ```
    /// use solara_types::{CalculationRequest, ConsumptionInput};
    ///
    /// let input = ConsumptionInput::new(400.0).unwrap();
    /// let body = CalculationRequest::new(input).to_json().unwrap();
    /// assert_eq!(body, r#"{"monthly_kwh":400}"#);
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ConsumptionInput> for CalculationRequest {
    fn from(input: ConsumptionInput) -> Self {
        Self::new(input)
    }
}

/// Sizing and payback estimate returned by the calculation service.
///
/// Values are kept exactly as the service sent them; nothing here is
/// recomputed on the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Nominal system capacity in kW.
    #[serde(serialize_with = "number::serialize")]
    pub system_size_kw: f64,
    /// Number of panels.
    pub panel_count: u32,
    /// Estimated monthly savings in COP.
    #[serde(serialize_with = "number::serialize")]
    pub monthly_savings_cop: f64,
    /// Estimated installation cost in COP.
    #[serde(serialize_with = "number::serialize")]
    pub installation_cost_cop: f64,
    /// Years until savings offset the installation cost.
    #[serde(serialize_with = "number::serialize")]
    pub payback_years: f64,
    /// Roof area needed for the panels in m².
    #[serde(serialize_with = "number::serialize")]
    pub area_m2: f64,
}

/// Number serialization matching how JSON producers without an integer
/// type print values: integral floats are written without a fraction.
mod number {
    use serde::Serializer;

    /// Largest integer exactly representable in an `f64`.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
