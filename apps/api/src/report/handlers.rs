//! Axum route handlers for report export.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::recommendation::pipeline::run_analysis;
use crate::report::builder::{build_report, render_text, AnalysisReport};
use crate::state::AppState;

fn report_for(state: &AppState, profile: &StudentProfile) -> AnalysisReport {
    let analysis = run_analysis(profile, state.admission_model.as_ref());
    let report = build_report(
        profile,
        &analysis.recommendations,
        &analysis.scholarships,
        &analysis.living_costs,
        Utc::now(),
    );
    info!(report_id = %report.report_id, "report generated");
    report
}

/// POST /api/v1/report
pub async fn handle_report(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<AnalysisReport>, AppError> {
    profile.validate()?;
    Ok(Json(report_for(&state, &profile)))
}

/// POST /api/v1/report/text
///
/// Same report as `/api/v1/report`, rendered as a plain-text download.
pub async fn handle_report_text(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<impl IntoResponse, AppError> {
    profile.validate()?;

    let report = report_for(&state, &profile);
    let text = render_text(&report).map_err(anyhow::Error::from)?;
    let disposition = format!(
        "attachment; filename=\"unimatch-report-{}.txt\"",
        report.generated_at.format("%Y-%m-%d")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    ))
}
