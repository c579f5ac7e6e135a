use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::course::{self, CourseInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/getAllCourse", get(list))
        .route("/getCourse/:id", get(get_one))
        .route("/createCourse", post(create))
        .route("/updateCourse", put(update))
        .route("/deleteCourse/:id", delete(remove))
}

#[utoipa::path(
    get, path = "/Course/getAllCourse", tag = "course",
    responses(
        (status = 200, description = "All courses", body = [crate::openapi::CourseDoc]),
        (status = 500, description = "Database Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<course::Model>>, JsonApiError> {
    info!("GET /Course/getAllCourse");
    Ok(Json(state.courses.list().await?))
}

#[utoipa::path(
    get, path = "/Course/getCourse/{id}", tag = "course",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = crate::openapi::CourseDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<course::Model>, JsonApiError> {
    info!(id, "GET /Course/getCourse");
    Ok(Json(state.courses.get(id).await?))
}

#[utoipa::path(
    post, path = "/Course/createCourse", tag = "course",
    request_body = crate::openapi::CourseDoc,
    responses(
        (status = 200, description = "Created, with the assigned id", body = crate::openapi::CourseDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CourseInput>) -> Result<Json<course::Model>, JsonApiError> {
    info!(name = ?input.name, "POST /Course/createCourse");
    Ok(Json(state.courses.save(input).await?))
}

#[utoipa::path(
    put, path = "/Course/updateCourse", tag = "course",
    request_body = crate::openapi::CourseDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::CourseDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn update(State(state): State<ServerState>, Json(input): Json<CourseInput>) -> Result<Json<course::Model>, JsonApiError> {
    info!(id = ?input.id_course, "PUT /Course/updateCourse");
    Ok(Json(state.courses.save(input).await?))
}

#[utoipa::path(
    delete, path = "/Course/deleteCourse/{id}", tag = "course",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    info!(id, "DELETE /Course/deleteCourse");
    state.courses.delete(id).await?;
    Ok(StatusCode::OK)
}
