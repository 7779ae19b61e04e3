//! Monthly consumption input and its validation.

use thiserror::Error;

/// Message shown for any rejected consumption input.
pub const VALIDATION_MESSAGE: &str = "Enter a value greater than zero.";

/// Reasons a raw consumption entry is rejected.
///
/// Every variant displays the same user-facing message; the variant only
/// records why, for logging and tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The input could not be parsed as a number.
    #[error("Enter a value greater than zero.")]
    NotANumber(String),

    /// The input parsed to NaN or an infinity.
    #[error("Enter a value greater than zero.")]
    NotFinite(f64),

    /// The input is zero or negative.
    #[error("Enter a value greater than zero.")]
    NotPositive(f64),
}

/// Monthly electricity consumption in kWh.
///
/// Always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConsumptionInput(f64);

impl ConsumptionInput {
    /// Validates a numeric consumption value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or not greater than zero.
    pub fn new(monthly_kwh: f64) -> Result<Self, ValidationError> {
        if !monthly_kwh.is_finite() {
            return Err(ValidationError::NotFinite(monthly_kwh));
        }
        if monthly_kwh <= 0.0 {
            return Err(ValidationError::NotPositive(monthly_kwh));
        }
        Ok(Self(monthly_kwh))
    }

    /// Parses and validates raw user text.
    ///
    /// Surrounding whitespace is ignored. An empty entry is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a number, or is not a finite
    /// value greater than zero.
    ///
    /// # Example
    ///
    /// ```
    /// use solara_types::ConsumptionInput;
    ///
    /// let input = ConsumptionInput::parse(" 400 ").unwrap();
    /// assert_eq!(input.monthly_kwh(), 400.0);
    /// assert!(ConsumptionInput::parse("0").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    /// Returns the consumption in kWh per month.
    #[must_use]
    pub const fn monthly_kwh(&self) -> f64 {
        self.0
    }
}

impl std::str::FromStr for ConsumptionInput {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ConsumptionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh/month", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(ConsumptionInput::parse("400").unwrap().monthly_kwh(), 400.0);
        assert_eq!(
            ConsumptionInput::parse("412.5").unwrap().monthly_kwh(),
            412.5
        );
        assert_eq!(ConsumptionInput::parse("1e3").unwrap().monthly_kwh(), 1000.0);
        assert_eq!(ConsumptionInput::parse("\t90\n").unwrap().monthly_kwh(), 90.0);
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert_eq!(
            ConsumptionInput::parse("0"),
            Err(ValidationError::NotPositive(0.0))
        );
        assert_eq!(
            ConsumptionInput::parse("-5"),
            Err(ValidationError::NotPositive(-5.0))
        );
        assert!(ConsumptionInput::parse("-0.0").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "12kwh", "1,5"] {
            assert!(
                matches!(
                    ConsumptionInput::parse(raw),
                    Err(ValidationError::NotANumber(_))
                ),
                "expected NotANumber for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for raw in ["inf", "-inf", "NaN", "infinity"] {
            let err = ConsumptionInput::parse(raw).unwrap_err();
            assert!(
                matches!(
                    err,
                    ValidationError::NotFinite(_) | ValidationError::NotPositive(_)
                ),
                "unexpected error for {raw:?}: {err:?}"
            );
        }
        assert!(ConsumptionInput::new(f64::NAN).is_err());
        assert!(ConsumptionInput::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validation_message_is_uniform() {
        let messages: Vec<String> = [
            ValidationError::NotANumber("x".into()),
            ValidationError::NotFinite(f64::NAN),
            ValidationError::NotPositive(0.0),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert!(messages.iter().all(|m| m == VALIDATION_MESSAGE));
    }

    #[test]
    fn test_from_str() {
        let input: ConsumptionInput = "250".parse().unwrap();
        assert_eq!(input.monthly_kwh(), 250.0);
        assert_eq!(input.to_string(), "250 kWh/month");
    }
}
