use crate::weights::WeightTable;

/// Weighted average over the attributes actually present.
///
/// Iterates the weight table in declaration order and asks `value_of` for each
/// attribute. Present values contribute `value * weight` to the numerator and
/// `weight` to the denominator; absent ones contribute nothing at all, so a
/// record with three of eight attributes is averaged over those three weights
/// rather than dragged down by the missing five.
///
/// Returns exactly `0.0` when no attribute is present. Input range is the
/// caller's responsibility: with every present value in `[0, 10]` the result
/// is in `[0, 10]`, but nothing here validates that.
pub fn composite_score<F>(table: &WeightTable, mut value_of: F) -> f64
where
    F: FnMut(&str) -> Option<f64>,
{
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (attribute, weight) in table.iter() {
        if let Some(value) = value_of(attribute) {
            weighted_sum += value * weight;
            total_weight += weight;
        }
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    weighted_sum / total_weight
}
