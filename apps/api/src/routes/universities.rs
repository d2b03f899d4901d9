//! Read-only listing of the university catalog.

use axum::{extract::Path, Json};

use crate::catalog::{find_university, universities, universities_in};
use crate::errors::AppError;
use crate::models::university::University;

/// GET /api/v1/universities
pub async fn handle_list_universities() -> Json<&'static [University]> {
    Json(universities())
}

/// GET /api/v1/universities/country/:country
///
/// Case-insensitive; an unknown country yields an empty list.
pub async fn handle_universities_by_country(
    Path(country): Path<String>,
) -> Json<Vec<&'static University>> {
    Json(universities_in(&country))
}

/// GET /api/v1/universities/:name
pub async fn handle_get_university(
    Path(name): Path<String>,
) -> Result<Json<&'static University>, AppError> {
    find_university(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("University {name} not found")))
}
