//! Non-fatal diagnostics attached to measure results.

use serde::Serialize;

/// Why a measure came back undefined or should be read with care.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notice {
    /// Fewer planets than the measure is defined for
    TooFewPlanets {
        measure: &'static str,
        required: usize,
        found: usize,
    },
    /// Slices that must correspond element-wise differ in length
    LengthMismatch {
        measure: &'static str,
        expected: usize,
        found: usize,
    },
    /// The inclination fit stopped without reporting convergence
    FitNotConverged { status: String },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPlanets {
                measure,
                required,
                found,
            } => write!(
                f,
                "{measure} is undefined for N < {required} (got {found}); returning NaN"
            ),
            Self::LengthMismatch {
                measure,
                expected,
                found,
            } => write!(
                f,
                "{measure} received {found} entries where {expected} were expected; returning NaN"
            ),
            Self::FitNotConverged { status } => {
                write!(f, "duration fit did not converge: {status}")
            }
        }
    }
}

/// A measure value together with the notices raised while computing it.
///
/// `value` is NaN whenever the measure is undefined for the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measured {
    pub value: f64,
    pub notices: Vec<Notice>,
}

impl Measured {
    pub fn defined(value: f64) -> Self {
        Self {
            value,
            notices: Vec::new(),
        }
    }

    /// An undefined (NaN) result carrying `notice`.
    ///
    /// When `warn` is set the notice is also emitted as a `tracing` warning.
    pub fn undefined(notice: Notice, warn: bool) -> Self {
        Self {
            value: f64::NAN,
            notices: Vec::new(),
        }
        .with_notice(notice, warn)
    }

    pub fn with_notice(mut self, notice: Notice, warn: bool) -> Self {
        if warn {
            tracing::warn!("{notice}");
        }
        self.notices.push(notice);
        self
    }

    pub fn is_defined(&self) -> bool {
        !self.value.is_nan()
    }
}

impl From<Measured> for f64 {
    fn from(measured: Measured) -> f64 {
        measured.value
    }
}
