use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::enrollment::{EnrollmentDetails, EnrollmentInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/getAllEnrollment", get(list))
        .route("/getEnrollment/:id", get(get_one))
        .route("/createEnrollment", post(create))
        .route("/updateEnrollment", put(update))
        .route("/deleteEnrollment/:id", delete(remove))
}

#[utoipa::path(
    get, path = "/Enrollment/getAllEnrollment", tag = "enrollment",
    responses(
        (status = 200, description = "All enrollments with their student and course", body = [crate::openapi::EnrollmentDoc]),
        (status = 500, description = "Database Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EnrollmentDetails>>, JsonApiError> {
    info!("GET /Enrollment/getAllEnrollment");
    Ok(Json(state.enrollments.list().await?))
}

#[utoipa::path(
    get, path = "/Enrollment/getEnrollment/{id}", tag = "enrollment",
    params(("id" = i64, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment found", body = crate::openapi::EnrollmentDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<EnrollmentDetails>, JsonApiError> {
    info!(id, "GET /Enrollment/getEnrollment");
    Ok(Json(state.enrollments.get(id).await?))
}

/// Only `student.idStudent` and `course.idCourse` are read from the nested objects.
#[utoipa::path(
    post, path = "/Enrollment/createEnrollment", tag = "enrollment",
    request_body = crate::openapi::EnrollmentDoc,
    responses(
        (status = 200, description = "Created, with the assigned id", body = crate::openapi::EnrollmentDoc),
        (status = 500, description = "Database Error, including unknown student or course")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<EnrollmentInput>,
) -> Result<Json<EnrollmentDetails>, JsonApiError> {
    info!(status = ?input.status, "POST /Enrollment/createEnrollment");
    Ok(Json(state.enrollments.save(input).await?))
}

#[utoipa::path(
    put, path = "/Enrollment/updateEnrollment", tag = "enrollment",
    request_body = crate::openapi::EnrollmentDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::EnrollmentDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(input): Json<EnrollmentInput>,
) -> Result<Json<EnrollmentDetails>, JsonApiError> {
    info!(id = ?input.id_enrollment, "PUT /Enrollment/updateEnrollment");
    Ok(Json(state.enrollments.save(input).await?))
}

#[utoipa::path(
    delete, path = "/Enrollment/deleteEnrollment/{id}", tag = "enrollment",
    params(("id" = i64, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    info!(id, "DELETE /Enrollment/deleteEnrollment");
    state.enrollments.delete(id).await?;
    Ok(StatusCode::OK)
}
