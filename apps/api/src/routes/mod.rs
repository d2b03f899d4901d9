pub mod health;
pub mod universities;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planning::handlers as planning;
use crate::recommendation::handlers as recommendation;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/v1/universities",
            get(universities::handle_list_universities),
        )
        .route(
            "/api/v1/universities/country/:country",
            get(universities::handle_universities_by_country),
        )
        .route(
            "/api/v1/universities/:name",
            get(universities::handle_get_university),
        )
        // Recommendations
        .route("/api/v1/analyze", post(recommendation::handle_analyze))
        .route("/api/v1/compare", post(recommendation::handle_compare))
        // Funding & living costs
        .route("/api/v1/scholarships", post(planning::handle_scholarships))
        .route(
            "/api/v1/cost-of-living",
            post(planning::handle_cost_of_living),
        )
        // Export
        .route("/api/v1/report", post(report::handle_report))
        .route("/api/v1/report/text", post(report::handle_report_text))
        .with_state(state)
}
