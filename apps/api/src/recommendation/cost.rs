//! Cost & ROI — two-year cost of a degree, how much of it the budget covers,
//! and the five-year salary return on it.

use serde::Serialize;

use crate::models::profile::StudentProfile;
use crate::models::university::University;

/// Length of the degree the estimate assumes.
pub const PROGRAM_YEARS: u32 = 2;
/// Flat yearly living allowance, independent of the country's cost table.
pub const LIVING_COST_PER_YEAR: u32 = 15_000;
/// Years of salary counted towards the return.
pub const ROI_HORIZON_YEARS: f64 = 5.0;
/// Ceiling on the ROI contribution to `roi_score`, so very cheap degrees saturate.
const ROI_CONTRIBUTION_CAP: f64 = 30.0;

/// Unrounded cost and return figures for one student/university pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostEstimate {
    pub total_cost: u64,
    /// 0 – 100: share of `total_cost` the budget covers.
    pub budget_feasibility: f64,
    /// Five-year return in percent. Unbounded above, negative if salary never covers cost.
    pub estimated_roi: f64,
    /// 0 – 100 composite of employment, ROI and affordability.
    pub roi_score: f64,
}

pub fn total_cost(university: &University) -> u64 {
    (university.tuition_per_year as u64 + LIVING_COST_PER_YEAR as u64) * PROGRAM_YEARS as u64
}

/// Budget feasibility: 100 when the budget covers everything, otherwise the covered percentage.
pub fn budget_feasibility(budget: f64, total_cost: u64) -> f64 {
    let total = total_cost as f64;
    if budget >= total {
        100.0
    } else {
        (budget / total * 100.0).max(0.0)
    }
}

pub fn estimated_roi(university: &University, total_cost: u64) -> f64 {
    let total = total_cost as f64;
    (university.avg_salary_after_grad as f64 * ROI_HORIZON_YEARS - total) / total * 100.0
}

/// roi_score = employment × 0.4 + min(roi / 10, 30) + feasibility × 0.3, within 0 – 100.
pub fn roi_score(employment_rate: f64, estimated_roi: f64, budget_feasibility: f64) -> f64 {
    let score = employment_rate * 0.4
        + (estimated_roi / 10.0).min(ROI_CONTRIBUTION_CAP)
        + budget_feasibility * 0.3;
    score.clamp(0.0, 100.0)
}

pub fn estimate_cost(profile: &StudentProfile, university: &University) -> CostEstimate {
    let total_cost = total_cost(university);
    let budget_feasibility = budget_feasibility(profile.budget, total_cost);
    let estimated_roi = estimated_roi(university, total_cost);
    let roi_score = roi_score(university.employment_rate, estimated_roi, budget_feasibility);

    CostEstimate {
        total_cost,
        budget_feasibility,
        estimated_roi,
        roi_score,
    }
}
