//! Error types shared across the numerical and thermodynamic modules.
//!
//! Every operation in this crate is a one-shot pure computation, so there is
//! no retry policy and no partial-failure recovery. A non-finite value coming
//! out of the moist-adiabat slope function is deliberately *not* an error:
//! it propagates through the returned profile so callers can see exactly
//! where their surface conditions went degenerate.

/// Errors produced by the climate core computations
#[derive(Debug, Clone, PartialEq)]
pub enum ClimateError {
    /// Temperature input was not a positive Kelvin value.
    /// Usually means the caller passed degrees Celsius by mistake.
    InvalidTemperature {
        /// The offending temperature value [K]
        kelvin: f64,
    },
    /// Pressure input was not strictly positive
    InvalidPressure {
        /// The offending pressure value [Pa]
        pascals: f64,
    },
    /// Interpolation table arrays differ in length (or are empty)
    LengthMismatch {
        /// Length of the independent-variable array
        left: usize,
        /// Length of the dependent-variable array
        right: usize,
    },
    /// A gas record does not carry a property required for the computation
    MissingProperty {
        /// Chemical formula of the gas, e.g. "air"
        formula: String,
        /// Name of the missing field, e.g. "triple_point_t"
        property: &'static str,
    },
    /// Newton iteration hit its iteration cap before the step shrank
    /// below tolerance. Retry with a different initial guess.
    NoConvergence {
        /// Number of iterations performed
        iterations: usize,
    },
}

impl std::fmt::Display for ClimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClimateError::InvalidTemperature { kelvin } => write!(
                f,
                "temperature must be positive Kelvin (got {kelvin}); \
                 inputs in degrees Celsius are a common mistake"
            ),
            ClimateError::InvalidPressure { pascals } => {
                write!(f, "pressure must be positive (got {pascals} Pa)")
            }
            ClimateError::LengthMismatch { left, right } => write!(
                f,
                "input x and y arrays must be the same nonzero length (got {left} and {right})"
            ),
            ClimateError::MissingProperty { formula, property } => {
                write!(f, "gas '{formula}' has no value for '{property}'")
            }
            ClimateError::NoConvergence { iterations } => {
                write!(f, "no convergence after {iterations} iterations")
            }
        }
    }
}

impl std::error::Error for ClimateError {}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, ClimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_celsius_mistake() {
        let err = ClimateError::InvalidTemperature { kelvin: -10.0 };
        assert!(err.to_string().contains("Celsius"));
    }

    #[test]
    fn display_reports_lengths() {
        let err = ClimateError::LengthMismatch { left: 3, right: 5 };
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('5'));
    }
}
