//! Axum route handlers for scholarship and living-cost lookups.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::living_cost::CountryCostView;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::ScholarshipResult;
use crate::planning::living_costs::cost_of_living;
use crate::planning::scholarships::{
    find_scholarships, scholarships_for_countries, summarize_scholarships, ScholarshipSummary,
};
use crate::recommendation::ranker::analyze_profile_with;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScholarshipRequest {
    pub profile: StudentProfile,
    /// Destination countries to match against. When absent, the profile is
    /// ranked first and its recommended countries are used.
    #[serde(default)]
    pub countries: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ScholarshipResponse {
    pub scholarships: Vec<ScholarshipResult>,
    pub summary: ScholarshipSummary,
}

#[derive(Debug, Deserialize)]
pub struct CostOfLivingRequest {
    pub countries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CostOfLivingResponse {
    pub costs: Vec<CountryCostView>,
}

/// POST /api/v1/scholarships
pub async fn handle_scholarships(
    State(state): State<AppState>,
    Json(request): Json<ScholarshipRequest>,
) -> Result<Json<ScholarshipResponse>, AppError> {
    request.profile.validate()?;

    let scholarships = match &request.countries {
        Some(countries) => {
            let countries: Vec<&str> = countries.iter().map(String::as_str).collect();
            scholarships_for_countries(&request.profile, &countries)
        }
        None => {
            let recommendations =
                analyze_profile_with(&request.profile, state.admission_model.as_ref());
            find_scholarships(&request.profile, &recommendations)
        }
    };

    let summary = summarize_scholarships(&scholarships);
    Ok(Json(ScholarshipResponse {
        scholarships,
        summary,
    }))
}

/// POST /api/v1/cost-of-living
///
/// Unknown countries are left out of the response rather than rejected.
pub async fn handle_cost_of_living(
    Json(request): Json<CostOfLivingRequest>,
) -> Json<CostOfLivingResponse> {
    Json(CostOfLivingResponse {
        costs: cost_of_living(&request.countries)
            .into_iter()
            .map(CountryCostView::from)
            .collect(),
    })
}
