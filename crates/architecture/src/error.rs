//! Construction and configuration errors.
//!
//! Measures themselves never fail: undefined values come back as NaN with a
//! [`Notice`](crate::diagnostics::Notice). These errors only guard building a
//! [`PlanetarySystem`](crate::system::PlanetarySystem) or a solver configuration.

/// Errors raised while assembling inputs for the architecture measures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArchitectureError {
    #[error("Column length mismatch: {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be positive, got {value} (planet {index:?})")]
    NonPositive {
        field: &'static str,
        index: Option<usize>,
        value: f64,
    },

    #[error("{field} must be finite, got {value} (planet {index:?})")]
    NonFinite {
        field: &'static str,
        index: Option<usize>,
        value: f64,
    },

    #[error("Invalid config value for {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ArchitectureError>;

/// Checks a single physical input is finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, index: Option<usize>, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ArchitectureError::NonFinite { field, index, value });
    }
    if value <= 0.0 {
        return Err(ArchitectureError::NonPositive { field, index, value });
    }
    Ok(())
}
