//! Reference assumptions shown next to an estimate.
//!
//! These values describe the model the calculation service uses. They are
//! for display only; the client never derives an estimate from them.

use serde::Serialize;

/// Unit attached to an assumption value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Watts.
    Watts,
    /// Colombian pesos per kWh.
    CopPerKwh,
    /// Colombian pesos.
    Cop,
    /// Hours per day.
    HoursPerDay,
    /// Dimensionless ratio.
    Ratio,
    /// Square metres.
    SquareMeters,
}

impl Unit {
    /// Returns the unit suffix used in text output.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Watts => "W",
            Self::CopPerKwh => "COP/kWh",
            Self::Cop => "COP",
            Self::HoursPerDay => "h/day",
            Self::Ratio => "",
            Self::SquareMeters => "m²",
        }
    }

    /// Returns true for monetary units.
    #[must_use]
    pub const fn is_currency(&self) -> bool {
        matches!(self, Self::Cop | Self::CopPerKwh)
    }
}

/// A single labelled assumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assumption {
    /// Stable identifier.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Value in `unit`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: Unit,
}

/// Model assumptions used by the calculation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assumptions {
    /// Nominal power per panel in W.
    pub panel_power_w: f64,
    /// Energy tariff in COP per kWh.
    pub energy_price_cop_per_kwh: f64,
    /// Installed cost per panel in COP.
    pub panel_cost_cop: f64,
    /// Average peak sun hours per day.
    pub sun_hours_per_day: f64,
    /// Global performance ratio (wiring, inverter, temperature losses).
    pub performance_ratio: f64,
    /// Area occupied by one panel in m².
    pub panel_area_m2: f64,
}

impl Assumptions {
    /// The reference values published with the service.
    pub const REFERENCE: Self = Self {
        panel_power_w: 550.0,
        energy_price_cop_per_kwh: 926.0,
        panel_cost_cop: 2_100_000.0,
        sun_hours_per_day: 5.0,
        performance_ratio: 0.8,
        panel_area_m2: 2.1,
    };

    /// Returns the assumptions as labelled rows, in display order.
    #[must_use]
    pub const fn rows(&self) -> [Assumption; 6] {
        [
            Assumption {
                key: "panel_power_w",
                label: "Panel power",
                value: self.panel_power_w,
                unit: Unit::Watts,
            },
            Assumption {
                key: "energy_price_cop_per_kwh",
                label: "Energy tariff",
                value: self.energy_price_cop_per_kwh,
                unit: Unit::CopPerKwh,
            },
            Assumption {
                key: "sun_hours_per_day",
                label: "Peak sun hours",
                value: self.sun_hours_per_day,
                unit: Unit::HoursPerDay,
            },
            Assumption {
                key: "performance_ratio",
                label: "Performance ratio",
                value: self.performance_ratio,
                unit: Unit::Ratio,
            },
            Assumption {
                key: "panel_cost_cop",
                label: "Cost per panel",
                value: self.panel_cost_cop,
                unit: Unit::Cop,
            },
            Assumption {
                key: "panel_area_m2",
                label: "Area per panel",
                value: self.panel_area_m2,
                unit: Unit::SquareMeters,
            },
        ]
    }

    /// Usable energy per installed kW per day, in kWh.
    #[must_use]
    pub fn effective_sun_hours(&self) -> f64 {
        self.sun_hours_per_day * self.performance_ratio
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::REFERENCE
    }
}
