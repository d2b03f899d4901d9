//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::find_university;
use crate::errors::AppError;
use crate::models::living_cost::CountryCostView;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::ScholarshipResult;
use crate::planning::scholarships::{summarize_scholarships, ScholarshipSummary};
use crate::recommendation::insights::{
    compare, rank_by_roi, summarize, Comparison, RecommendationStats, MAX_COMPARE,
};
use crate::recommendation::keywords::career_keywords;
use crate::recommendation::pipeline::run_analysis;
use crate::recommendation::ranker::{score_university, Recommendation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub keywords: Vec<&'static str>,
    pub admission_model: &'static str,
    pub recommendations: Vec<Recommendation>,
    pub stats: Option<RecommendationStats>,
    /// University names ordered by ROI score.
    pub roi_ranking: Vec<&'static str>,
    pub scholarships: Vec<ScholarshipResult>,
    pub scholarship_summary: ScholarshipSummary,
    pub cost_of_living: Vec<CountryCostView>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub profile: StudentProfile,
    /// University names, 2 to `MAX_COMPARE` of them.
    pub universities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub recommendations: Vec<Recommendation>,
    pub comparison: Comparison,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Full analysis: ranked universities, headline stats, matching scholarships
/// and living costs for the recommended countries. An empty recommendation
/// list means nothing matched the country preference.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    profile.validate()?;

    let analysis = run_analysis(&profile, state.admission_model.as_ref());
    info!(
        country = %profile.country,
        recommendations = analysis.recommendations.len(),
        "profile analyzed"
    );

    Ok(Json(AnalyzeResponse {
        keywords: analysis.keywords,
        admission_model: state.admission_model.name(),
        stats: summarize(&analysis.recommendations),
        roi_ranking: rank_by_roi(&analysis.recommendations)
            .iter()
            .map(|r| r.university.name)
            .collect(),
        scholarship_summary: summarize_scholarships(&analysis.scholarships),
        recommendations: analysis.recommendations,
        scholarships: analysis.scholarships,
        cost_of_living: analysis
            .living_costs
            .into_iter()
            .map(CountryCostView::from)
            .collect(),
    }))
}

/// POST /api/v1/compare
///
/// Scores the named universities for the profile, whatever its country
/// preference, and lays them out side by side.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    request.profile.validate()?;

    let count = request.universities.len();
    if !(2..=MAX_COMPARE).contains(&count) {
        return Err(AppError::Validation(format!(
            "compare needs between 2 and {MAX_COMPARE} universities, got {count}"
        )));
    }

    let keywords = career_keywords(&request.profile.career_goals);
    let mut recommendations: Vec<Recommendation> = Vec::with_capacity(count);
    for name in &request.universities {
        if recommendations.iter().any(|r| r.university.name == name.as_str()) {
            return Err(AppError::Validation(format!("{name} is listed twice")));
        }
        let university = find_university(name)
            .ok_or_else(|| AppError::NotFound(format!("University {name} not found")))?;
        recommendations.push(score_university(
            &request.profile,
            university,
            &keywords,
            state.admission_model.as_ref(),
        ));
    }

    let comparison = compare(&recommendations);
    Ok(Json(CompareResponse {
        recommendations,
        comparison,
    }))
}
