use crate::domain::{BestValue, MetricRow, NormalizedMetrics};

/// Composite "best value" score (0-100).
///
/// The normalized cost and duration are already inverted, so cheaper and
/// shorter courses score higher here, as do widely offered ones. Cluster
/// points are left out: entry requirements are not a measure of value.
pub fn calculate_value_score(norm: &NormalizedMetrics) -> f64 {
    (norm.availability + norm.cost + norm.duration) / 3.0
}

/// Highest scoring row. On a tie the lowest slot wins.
pub fn pick_best_value(rows: &[MetricRow]) -> Option<BestValue> {
    rows.iter()
        .map(|row| (row, calculate_value_score(&row.norm)))
        .fold(None, |best: Option<(&MetricRow, f64)>, (row, score)| match best {
            Some((leader, top)) if top > score || (top == score && leader.slot <= row.slot) => {
                Some((leader, top))
            }
            _ => Some((row, score)),
        })
        .map(|(row, score)| BestValue {
            id: row.id.clone(),
            score,
        })
}
