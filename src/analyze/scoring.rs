use crate::types::report::RiskLabel;
use crate::types::scoring::DepScore;

/// Bucket the number of unused dependencies: 0, 1..=3, 4..=5, 6+.
pub fn calculate_unused_dep_scores<T>(deps: &[T]) -> DepScore {
    match deps.len() {
        0 => 0,
        1..=3 => 1,
        4..=5 => 2,
        _ => 3,
    }
}

/// Map a bucket to its label.
///
/// The scorer never emits more than 3, so `High` and `Unknown` are only reachable
/// through callers passing raw scores.
pub fn aggregate_score(score: DepScore) -> RiskLabel {
    match score {
        0 => RiskLabel::Low,
        1..=3 => RiskLabel::Medium,
        4..=5 => RiskLabel::High,
        _ => RiskLabel::Unknown,
    }
}
