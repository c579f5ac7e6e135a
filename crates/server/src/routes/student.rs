use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use models::student::{self, StudentInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/getAllStudents", get(list))
        .route("/getStudent/:id", get(get_one))
        .route("/createStudent", post(create))
        .route("/updateStudent", put(update))
        .route("/deleteStudent/:id", delete(remove))
}

#[utoipa::path(
    get, path = "/students/getAllStudents", tag = "student",
    responses(
        (status = 200, description = "All students", body = [crate::openapi::StudentDoc]),
        (status = 500, description = "Database Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<student::Model>>, JsonApiError> {
    info!("GET /students/getAllStudents");
    Ok(Json(state.students.list().await?))
}

/// A missing student answers 200 with an empty body.
#[utoipa::path(
    get, path = "/students/getStudent/{id}", tag = "student",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found, or empty body when absent", body = crate::openapi::StudentDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Response, JsonApiError> {
    info!(id, "GET /students/getStudent");
    Ok(match state.students.get(id).await? {
        Some(s) => Json(s).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

#[utoipa::path(
    post, path = "/students/createStudent", tag = "student",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Created, with the assigned id", body = crate::openapi::StudentDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<StudentInput>,
) -> Result<Json<student::Model>, JsonApiError> {
    info!(email = ?input.email, "POST /students/createStudent");
    Ok(Json(state.students.save(input).await?))
}

#[utoipa::path(
    put, path = "/students/updateStudent", tag = "student",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::StudentDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(input): Json<StudentInput>,
) -> Result<Json<student::Model>, JsonApiError> {
    info!(id = ?input.id_student, "PUT /students/updateStudent");
    Ok(Json(state.students.save(input).await?))
}

#[utoipa::path(
    delete, path = "/students/deleteStudent/{id}", tag = "student",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    info!(id, "DELETE /students/deleteStudent");
    state.students.delete(id).await?;
    Ok(StatusCode::OK)
}
