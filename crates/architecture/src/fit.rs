//! Least-squares inclination fit for the transit duration model.
//!
//! The solver sits behind [`LeastSquaresSolver`] so the measures never depend
//! on a particular optimizer. [`MinpackSolver`] is the default backend.

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn};
use serde::Serialize;

use crate::config::FitSettings;
use crate::error::Result;
use crate::transit::{TransitParameters, residuals_for_duration_fit};

/// Residual function over a parameter vector.
pub type ResidualFn<'a> = dyn Fn(&DVector<f64>) -> DVector<f64> + 'a;

/// What a solver reports back after a single minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    pub params: DVector<f64>,
    pub converged: bool,
    /// Solver-specific termination description
    pub status: String,
    pub evaluations: usize,
}

/// Nonlinear least-squares capability: minimize `Σ r(x)²` from `initial`.
///
/// Implementations report failure through [`SolverOutcome::converged`]; they
/// must not panic on NaN residuals.
pub trait LeastSquaresSolver {
    fn minimize(&self, initial: DVector<f64>, residuals: &ResidualFn<'_>) -> SolverOutcome;
}

/// Levenberg-Marquardt (MINPACK `lmdif`) with a forward-difference jacobian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinpackSolver {
    settings: FitSettings,
}

impl MinpackSolver {
    pub fn new(settings: FitSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &FitSettings {
        &self.settings
    }
}

impl LeastSquaresSolver for MinpackSolver {
    fn minimize(&self, initial: DVector<f64>, residuals: &ResidualFn<'_>) -> SolverOutcome {
        let problem = ForwardDifferenceProblem::new(initial, residuals, self.settings.epsfcn);

        let (problem, report) = LevenbergMarquardt::new()
            .with_ftol(self.settings.ftol)
            .with_xtol(self.settings.xtol)
            .with_gtol(self.settings.gtol)
            .with_stepbound(self.settings.stepbound)
            .with_patience(self.settings.patience)
            .minimize(problem);

        SolverOutcome {
            params: problem.params,
            converged: report.termination.was_successful(),
            status: format!("{:?}", report.termination),
            evaluations: report.number_of_evaluations,
        }
    }
}

/// Residual stand-in for non-finite entries.
///
/// Large enough that any trial step reaching it is rejected and the trust
/// region shrinks; small enough that its square stays finite.
const NON_FINITE_RESIDUAL: f64 = 1.0e100;

/// Problem adapter that differentiates the residuals numerically.
///
/// Step size follows `lmdif`: `h = sqrt(max(epsfcn, ε)) · |x|`, falling back
/// to `sqrt(max(epsfcn, ε))` at `x = 0` so a fit seeded at the origin still
/// sees a nonzero slope. Non-finite residuals are replaced by
/// [`NON_FINITE_RESIDUAL`], so a step into undefined territory is rejected
/// instead of ending the solve. Where the forward step is undefined the
/// derivative is taken backward.
struct ForwardDifferenceProblem<'a> {
    params: DVector<f64>,
    residuals: DVector<f64>,
    finite: bool,
    function: &'a ResidualFn<'a>,
    epsfcn: f64,
}

impl<'a> ForwardDifferenceProblem<'a> {
    fn new(params: DVector<f64>, function: &'a ResidualFn<'a>, epsfcn: f64) -> Self {
        let mut problem = Self {
            residuals: DVector::zeros(0),
            finite: false,
            params,
            function,
            epsfcn,
        };
        problem.evaluate();
        problem
    }

    fn evaluate(&mut self) {
        self.residuals = (self.function)(&self.params);
        self.finite = all_finite(self.residuals.as_slice());
        if !self.finite {
            self.residuals
                .iter_mut()
                .filter(|r| !r.is_finite())
                .for_each(|r| *r = NON_FINITE_RESIDUAL);
        }
    }

    /// Difference quotient along parameter `j`, forward first, then backward.
    fn derivative(&self, shifted: &mut DVector<f64>, j: usize, h: f64) -> Option<DVector<f64>> {
        let x = self.params[j];

        shifted[j] = x + h;
        let forward = (self.function)(&*shifted);
        shifted[j] = x;
        if all_finite(forward.as_slice()) {
            return Some((forward - &self.residuals) / h);
        }

        shifted[j] = x - h;
        let backward = (self.function)(&*shifted);
        shifted[j] = x;
        all_finite(backward.as_slice()).then(|| (&self.residuals - backward) / h)
    }
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for ForwardDifferenceProblem<'_> {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;
    type ParameterStorage = Owned<f64, Dyn>;

    fn set_params(&mut self, x: &DVector<f64>) {
        self.params.copy_from(x);
        self.evaluate();
    }

    fn params(&self) -> DVector<f64> {
        self.params.clone()
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        Some(self.residuals.clone())
    }

    fn jacobian(&self) -> Option<DMatrix<f64>> {
        // No slope to take at a point where the residuals are undefined
        if !self.finite {
            return None;
        }

        let eps = self.epsfcn.max(f64::EPSILON).sqrt();
        let mut jacobian = DMatrix::zeros(self.residuals.len(), self.params.len());
        let mut shifted = self.params.clone();

        for j in 0..self.params.len() {
            let x = self.params[j];
            let h = if x == 0.0 { eps } else { eps * x.abs() };
            jacobian.set_column(j, &self.derivative(&mut shifted, j, h)?);
        }

        Some(jacobian)
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Outcome of fitting `cos i` to a set of transit durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitResult {
    /// Fitted cosine of the inclination. Not clamped to [0, 1].
    pub cos_inclination: f64,
    pub converged: bool,
    pub status: String,
    pub evaluations: usize,
}

/// Fit a shared `cos i` to observed durations, starting face-on (`cos i = 0`).
///
/// A single solve with no restarts; non-convergence is reported in the
/// result, never raised.
pub fn fit_inclination(
    params: &TransitParameters<'_>,
    durations: &[f64],
    errors: &[f64],
) -> FitResult {
    fit_inclination_with(&MinpackSolver::default(), params, durations, errors)
}

pub fn fit_inclination_with<S: LeastSquaresSolver + ?Sized>(
    solver: &S,
    params: &TransitParameters<'_>,
    durations: &[f64],
    errors: &[f64],
) -> FitResult {
    let objective = |x: &DVector<f64>| {
        DVector::from_vec(residuals_for_duration_fit(x[0], params, durations, errors))
    };

    let outcome = solver.minimize(DVector::zeros(1), &objective);
    let result = FitResult {
        cos_inclination: outcome.params[0],
        converged: outcome.converged,
        status: outcome.status,
        evaluations: outcome.evaluations,
    };

    tracing::debug!(
        cos_inclination = result.cos_inclination,
        converged = result.converged,
        status = %result.status,
        evaluations = result.evaluations,
        "duration fit finished"
    );

    result
}
