//! Inquiry HTTP Routes
//!
//! Public write endpoints for the contact and enrollment forms, plus the
//! unauthenticated admin listings of what was submitted.
//!
//! Write flow: parse JSON -> validate shape -> one store insert. A body that
//! fails parsing or validation is answered with 400 before the store is
//! touched.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::schema::{
    validate_contact, validate_enrollment, Contact, Enrollment, TargetLevel, ValidationErrors,
    ValidationIssue,
};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;

const INVALID_CONTACT: &str = "Invalid contact data";
const INVALID_ENROLLMENT: &str = "Invalid enrollment data";

const CONTACT_SUBMITTED: &str = "Contact form submitted successfully";
const ENROLLMENT_SUBMITTED: &str = "Class enrollment submitted successfully! You will receive a confirmation email with Zoom details within 24 hours.";

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDetails {
    pub course_name: String,
    pub preferred_schedule: String,
    pub target_level: TargetLevel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCreatedResponse {
    pub message: String,
    pub id: String,
    pub enrollment_details: EnrollmentDetails,
}

// ==================
// Inquiry Routes
// ==================

/// Create inquiry routes. Admin listings are mounted only when
/// `admin_endpoints` is set.
pub fn inquiry_routes(state: AppState, admin_endpoints: bool) -> Router {
    let mut router = Router::new()
        .route("/contact", post(create_contact_handler))
        .route("/enrollment", post(create_enrollment_handler));

    if admin_endpoints {
        router = router
            .route("/contacts", get(list_contacts_handler))
            .route("/enrollments", get(list_enrollments_handler));
    }

    router.with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Unwraps a JSON body, turning an extractor rejection into a validation
/// failure so every bad body gets the same 400 shape.
fn parse_body(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
    message: &'static str,
) -> ApiResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        reject(
            state,
            message,
            ValidationErrors::single(ValidationIssue::malformed_json(rejection.body_text())),
        )
    })
}

fn reject(state: &AppState, message: &'static str, errors: ValidationErrors) -> ApiError {
    tracing::info!(issues = errors.len(), "{}", message);
    state.metrics.increment_submissions_rejected();
    ApiError::validation(message, errors)
}

// ==================
// Handlers
// ==================

async fn create_contact_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ContactCreatedResponse>)> {
    let body = parse_body(&state, body, INVALID_CONTACT)?;
    let input = validate_contact(&body).map_err(|e| reject(&state, INVALID_CONTACT, e))?;

    let contact = state
        .store
        .create_contact(input)
        .map_err(|e| state.internal("Failed to submit contact form", e))?;

    tracing::info!(id = %contact.id, target_level = %contact.target_level, "contact submitted");
    state.metrics.increment_contacts_submitted();

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: CONTACT_SUBMITTED.to_string(),
            id: contact.id,
        }),
    ))
}

async fn list_contacts_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state
        .store
        .list_contacts()
        .map_err(|e| state.internal("Failed to fetch contacts", e))?;

    state.metrics.increment_admin_reads();
    Ok(Json(contacts))
}

async fn create_enrollment_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EnrollmentCreatedResponse>)> {
    let body = parse_body(&state, body, INVALID_ENROLLMENT)?;
    let input =
        validate_enrollment(&body).map_err(|e| reject(&state, INVALID_ENROLLMENT, e))?;

    let enrollment = state
        .store
        .create_enrollment(input)
        .map_err(|e| state.internal("Failed to submit enrollment", e))?;

    tracing::info!(
        id = %enrollment.id,
        course = %enrollment.course_id,
        target_level = %enrollment.target_level,
        "enrollment submitted"
    );
    state.metrics.increment_enrollments_submitted();

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentCreatedResponse {
            message: ENROLLMENT_SUBMITTED.to_string(),
            enrollment_details: EnrollmentDetails {
                course_name: enrollment.course_id,
                preferred_schedule: enrollment.preferred_schedule,
                target_level: enrollment.target_level,
            },
            id: enrollment.id,
        }),
    ))
}

async fn list_enrollments_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Enrollment>>> {
    let enrollments = state
        .store
        .list_enrollments()
        .map_err(|e| state.internal("Failed to fetch enrollments", e))?;

    state.metrics.increment_admin_reads();
    Ok(Json(enrollments))
}
