//! Ordering and rank correlation helpers for the measures.

use statrs::statistics::{Data, OrderStatistics, RankTieBreaker, Statistics};

/// Indices that sort `values` ascending. Stable, NaN sorts last.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order
}

/// Spearman rank correlation with average ranks for ties.
///
/// NaN for fewer than two samples, mismatched lengths, NaN inputs, or a
/// constant input.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    // Ranking sorts with `partial_cmp`, so NaN must not reach it
    if x.iter().chain(y).any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let rank_x = Data::new(x.to_vec()).ranks(RankTieBreaker::Average);
    let rank_y = Data::new(y.to_vec()).ranks(RankTieBreaker::Average);

    let covariance = rank_x.iter().population_covariance(rank_y.iter());
    let variance = rank_x.iter().population_variance() * rank_y.iter().population_variance();
    covariance / variance.sqrt()
}
