// University recommendation engine.
// Implements: career keyword extraction, admission estimation, cost/ROI, ranking, insights.
// Pure and synchronous over the static catalog; handlers call it directly.

pub mod admission;
pub mod cost;
pub mod handlers;
pub mod insights;
pub mod keywords;
pub mod pipeline;
pub mod ranker;

/// Rounds halves toward positive infinity, so -2.5 becomes -2 rather than -3.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
