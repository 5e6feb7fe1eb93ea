use crate::core::models::series::{AggregateResult, SeriesTerm};

/// Sums the three terms componentwise. The series is truncated after the third
/// root, so no weighting or tail correction is applied.
pub fn aggregate(terms: &[SeriesTerm; 3]) -> AggregateResult {
    terms
        .iter()
        .copied()
        .fold(SeriesTerm::default(), |acc, term| acc + term)
        .into()
}
