//! López-Ruiz, Mancini & Calbet (LMC) statistical complexity.
//!
//! Information-theoretic statistics over a probability-like vector: the
//! normalized Shannon entropy `H`, the disequilibrium `D` (distance from the
//! uniform distribution) and their product, the complexity `C = H·D`.
//! All three lie in [0, 1] for a normalized vector of two or more entries.
//!
//! The architecture measures only need [`Complexity`]; [`Lmc`] is the default
//! backend and any other implementation of the trait can stand in for it.

pub mod complexity;

#[cfg(test)]
mod complexity_test;

pub use complexity::{Complexity, Lmc};
