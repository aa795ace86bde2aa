//! Catalog HTTP Routes
//!
//! Read-only endpoints for courses, instructors and testimonials. Inactive
//! courses are filtered by the store, not here.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::schema::{Course, Instructor, Testimonial};

use super::errors::ApiResult;
use super::state::AppState;

/// Create catalog routes
pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(list_courses_handler))
        .route("/courses/category/:category", get(courses_by_category_handler))
        .route("/courses/level/:target_level", get(courses_by_level_handler))
        .route("/instructors", get(list_instructors_handler))
        .route("/testimonials", get(list_testimonials_handler))
        .with_state(state)
}

async fn list_courses_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Course>>> {
    let courses = state
        .store
        .list_courses()
        .map_err(|e| state.internal("Failed to fetch courses", e))?;

    state.metrics.increment_catalog_reads();
    Ok(Json(courses))
}

async fn courses_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<Course>>> {
    let courses = state
        .store
        .list_courses_by_category(&category)
        .map_err(|e| state.internal("Failed to fetch courses by category", e))?;

    state.metrics.increment_catalog_reads();
    Ok(Json(courses))
}

async fn courses_by_level_handler(
    State(state): State<AppState>,
    Path(target_level): Path<String>,
) -> ApiResult<Json<Vec<Course>>> {
    let courses = state
        .store
        .list_courses_by_level(&target_level)
        .map_err(|e| state.internal("Failed to fetch courses by target level", e))?;

    state.metrics.increment_catalog_reads();
    Ok(Json(courses))
}

async fn list_instructors_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Instructor>>> {
    let instructors = state
        .store
        .list_instructors()
        .map_err(|e| state.internal("Failed to fetch instructors", e))?;

    state.metrics.increment_catalog_reads();
    Ok(Json(instructors))
}

async fn list_testimonials_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    let testimonials = state
        .store
        .list_testimonials()
        .map_err(|e| state.internal("Failed to fetch testimonials", e))?;

    state.metrics.increment_catalog_reads();
    Ok(Json(testimonials))
}
