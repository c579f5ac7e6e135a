use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::department::{self, DepartmentInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/getAllDepartment", get(list))
        .route("/getDepartment/:id", get(get_one))
        .route("/createDepartment", post(create))
        .route("/updateDepartment", put(update))
        .route("/deleteDepartment/:id", delete(remove))
}

#[utoipa::path(
    get, path = "/Department/getAllDepartment", tag = "department",
    responses(
        (status = 200, description = "All departments", body = [crate::openapi::DepartmentDoc]),
        (status = 500, description = "Database Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<department::Model>>, JsonApiError> {
    info!("GET /Department/getAllDepartment");
    Ok(Json(state.departments.list().await?))
}

#[utoipa::path(
    get, path = "/Department/getDepartment/{id}", tag = "department",
    params(("id" = i64, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department found", body = crate::openapi::DepartmentDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<department::Model>, JsonApiError> {
    info!(id, "GET /Department/getDepartment");
    Ok(Json(state.departments.get(id).await?))
}

#[utoipa::path(
    post, path = "/Department/createDepartment", tag = "department",
    request_body = crate::openapi::DepartmentDoc,
    responses(
        (status = 200, description = "Created, with the assigned id", body = crate::openapi::DepartmentDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<DepartmentInput>,
) -> Result<Json<department::Model>, JsonApiError> {
    info!(name = ?input.name, "POST /Department/createDepartment");
    Ok(Json(state.departments.save(input).await?))
}

#[utoipa::path(
    put, path = "/Department/updateDepartment", tag = "department",
    request_body = crate::openapi::DepartmentDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::DepartmentDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(input): Json<DepartmentInput>,
) -> Result<Json<department::Model>, JsonApiError> {
    info!(id = ?input.id_department, "PUT /Department/updateDepartment");
    Ok(Json(state.departments.save(input).await?))
}

#[utoipa::path(
    delete, path = "/Department/deleteDepartment/{id}", tag = "department",
    params(("id" = i64, Path, description = "Department id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Database Error")
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    info!(id, "DELETE /Department/deleteDepartment");
    state.departments.delete(id).await?;
    Ok(StatusCode::OK)
}
