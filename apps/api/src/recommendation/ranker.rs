//! Recommendation Ranker — scores every candidate university for a profile and
//! returns the best matches.
//!
//! Algorithm:
//! 1. Extract career keywords from the free-text goals
//! 2. Keep universities in the preferred country (all of them for "any")
//! 3. Per university: admission probability, career match, cost/ROI
//! 4. match_score = 0.3·admission + 0.25·career + 0.25·feasibility + 0.2·roi_score
//! 5. Stable sort descending by match_score, keep the first `MAX_RECOMMENDATIONS`

use serde::Serialize;

use crate::catalog::{same_country, universities};
use crate::models::profile::StudentProfile;
use crate::models::university::University;
use crate::recommendation::admission::{AdmissionModel, HeuristicAdmissionModel};
use crate::recommendation::cost::estimate_cost;
use crate::recommendation::keywords::career_keywords;
use crate::recommendation::round_half_up;

pub const MAX_RECOMMENDATIONS: usize = 6;

#[derive(Debug, Clone, Copy)]
struct MatchWeights {
    admission: f64,
    career: f64,
    budget: f64,
    roi: f64,
}

const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    admission: 0.3,
    career: 0.25,
    budget: 0.25,
    roi: 0.2,
};

/// Admission likelihood banding used for display.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionTier {
    High,
    Medium,
    Low,
}

/// One ranked university. Built once per analysis and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub university: &'static University,
    pub admission_probability: u32, // 5 – 95
    pub roi_score: u32,             // 0 – 100
    pub match_score: u32,           // 0 – 100
    pub estimated_total_cost: u64,
    pub estimated_roi: i64, // percent, unbounded
}

impl Recommendation {
    pub fn admission_tier(&self) -> AdmissionTier {
        if self.admission_probability >= 70 {
            AdmissionTier::High
        } else if self.admission_probability >= 40 {
            AdmissionTier::Medium
        } else {
            AdmissionTier::Low
        }
    }
}

/// Ranks the catalog for `profile` with the default heuristic admission model.
pub fn analyze_profile(profile: &StudentProfile) -> Vec<Recommendation> {
    analyze_profile_with(profile, &HeuristicAdmissionModel)
}

/// Ranks the catalog for `profile`. An empty result means no university passed
/// the country filter.
pub fn analyze_profile_with(
    profile: &StudentProfile,
    model: &dyn AdmissionModel,
) -> Vec<Recommendation> {
    let keywords = career_keywords(&profile.career_goals);
    let preference = profile.country_preference();

    let mut recommendations: Vec<Recommendation> = universities()
        .iter()
        .filter(|uni| preference.map_or(true, |c| same_country(uni.country, c)))
        .map(|uni| score_university(profile, uni, &keywords, model))
        .collect();

    // sort_by is stable: equal scores keep catalog order
    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Scores a single university, regardless of the profile's country preference.
pub fn score_university(
    profile: &StudentProfile,
    university: &'static University,
    keywords: &[&str],
    model: &dyn AdmissionModel,
) -> Recommendation {
    let admission_probability = model.estimate(profile, university);
    let career_match = career_match(university, keywords);
    let cost = estimate_cost(profile, university);

    let match_score = admission_probability as f64 * MATCH_WEIGHTS.admission
        + career_match * MATCH_WEIGHTS.career
        + cost.budget_feasibility * MATCH_WEIGHTS.budget
        + cost.roi_score * MATCH_WEIGHTS.roi;

    Recommendation {
        university,
        admission_probability,
        roi_score: round_half_up(cost.roi_score) as u32,
        match_score: round_half_up(match_score).clamp(0.0, 100.0) as u32,
        estimated_total_cost: cost.total_cost,
        estimated_roi: round_half_up(cost.estimated_roi) as i64,
    }
}

/// Percentage of career keywords the university offers a program for, capped at 100.
pub fn career_match(university: &University, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matching = keywords.iter().filter(|k| university.offers(k)).count();
    (matching as f64 / keywords.len() as f64 * 100.0).min(100.0)
}
