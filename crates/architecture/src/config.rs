//! Measure and solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ArchitectureError, Result};

/// Tolerances for the Levenberg-Marquardt inclination fit.
///
/// Defaults reproduce `MINPACK lmdif` as driven by `scipy.optimize.leastsq`
/// for a single free parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FitSettings {
    /// Relative reduction in the sum of squares considered converged
    pub ftol: f64,
    /// Relative change in the parameters considered converged
    pub xtol: f64,
    /// Orthogonality between residuals and jacobian columns
    pub gtol: f64,
    /// Relative error of the residual function, sets the finite-difference step
    pub epsfcn: f64,
    /// Initial step bound factor
    pub stepbound: f64,
    /// Maximum residual evaluations, in multiples of `(parameters + 1)`
    pub patience: usize,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            ftol: 1.49012e-8,
            xtol: 1.49012e-8,
            gtol: 0.0,
            epsfcn: f64::EPSILON,
            stepbound: 100.0,
            patience: 200,
        }
    }
}

impl FitSettings {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("ftol", self.ftol),
            ("xtol", self.xtol),
            ("gtol", self.gtol),
            ("epsfcn", self.epsfcn),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ArchitectureError::InvalidConfig {
                    field,
                    message: format!("expected a finite non-negative tolerance, got {value}"),
                });
            }
        }
        if !(self.stepbound.is_finite() && self.stepbound > 0.0) {
            return Err(ArchitectureError::InvalidConfig {
                field: "stepbound",
                message: format!("expected a finite positive factor, got {}", self.stepbound),
            });
        }
        if self.patience == 0 {
            return Err(ArchitectureError::InvalidConfig {
                field: "patience",
                message: "at least one evaluation round is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Options shared by every measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasureOptions {
    /// Emit notices through `tracing` in addition to returning them
    pub warn: bool,
    pub fit: FitSettings,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            warn: true,
            fit: FitSettings::default(),
        }
    }
}

impl MeasureOptions {
    /// Options that keep notices in the result only.
    pub fn quiet() -> Self {
        Self {
            warn: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.fit.validate()
    }
}
