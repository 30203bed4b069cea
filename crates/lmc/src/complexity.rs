/// Disequilibrium and complexity over a normalized probability vector.
///
/// Implementations must accept vectors that are non-negative and sum to one.
/// Degenerate inputs (a single entry, an empty vector) are allowed to
/// produce NaN; callers treat NaN as "undefined", never as an error.
pub trait Complexity {
    /// Disequilibrium `D` in [0, 1]; zero for the uniform distribution.
    fn disequilibrium(&self, p: &[f64]) -> f64;

    /// Statistical complexity `C` in [0, 1]; zero for the uniform distribution
    /// and for a distribution concentrated in a single entry.
    fn complexity(&self, p: &[f64]) -> f64;
}

/// Default LMC backend.
///
/// # Examples
///
/// ```
/// use lmc::{Complexity, Lmc};
///
/// let uniform = [0.25, 0.25, 0.25, 0.25];
/// assert_eq!(Lmc.disequilibrium(&uniform), 0.0);
/// assert_eq!(Lmc.complexity(&uniform), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lmc;

impl Lmc {
    /// Shannon entropy normalized by its maximum `ln N`.
    ///
    /// Zero entries contribute nothing (`0 ln 0 = 0`).
    pub fn entropy(&self, p: &[f64]) -> f64 {
        let n = p.len() as f64;
        let h: f64 = p
            .iter()
            .filter(|&&pi| pi != 0.0)
            .map(|&pi| pi * pi.ln())
            .sum();

        -h / n.ln()
    }
}

impl Complexity for Lmc {
    /// `N/(N-1) · Σ (p_i − 1/N)²`
    fn disequilibrium(&self, p: &[f64]) -> f64 {
        let n = p.len() as f64;
        let spread: f64 = p.iter().map(|&pi| (pi - 1.0 / n).powi(2)).sum();

        n / (n - 1.0) * spread
    }

    fn complexity(&self, p: &[f64]) -> f64 {
        self.entropy(p) * self.disequilibrium(p)
    }
}
