use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        pagination::{PaginatedResponse, PaginationParams},
    },
    config::AppState,
    middleware::auth::AuthenticatedAdmin,
    models::disciplina::{CreateDisciplinaPayload, Disciplina, UpdateDisciplinaPayload},
};

// POST /api/disciplinas
#[utoipa::path(
    post,
    path = "/api/disciplinas",
    tag = "Disciplinas",
    request_body = CreateDisciplinaPayload,
    responses(
        (status = 201, description = "Disciplina criada", body = Disciplina),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Json(payload): Json<CreateDisciplinaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let disciplina = app_state
        .disciplina_service
        .create(admin.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(disciplina)))
}

// GET /api/disciplinas
#[utoipa::path(
    get,
    path = "/api/disciplinas",
    tag = "Disciplinas",
    params(PaginationParams),
    responses(
        (status = 200, description = "Lista paginada de disciplinas", body = PaginatedResponse<Disciplina>)
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state
        .disciplina_service
        .find_all(admin.id, &params)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

// GET /api/disciplinas/{id}
#[utoipa::path(
    get,
    path = "/api/disciplinas/{id}",
    tag = "Disciplinas",
    params(("id" = Uuid, Path, description = "ID da disciplina")),
    responses(
        (status = 200, description = "Disciplina encontrada", body = Disciplina),
        (status = 404, description = "Disciplina não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let disciplina = app_state.disciplina_service.find_one(admin.id, id).await?;

    Ok((StatusCode::OK, Json(disciplina)))
}

// PATCH /api/disciplinas/{id}
#[utoipa::path(
    patch,
    path = "/api/disciplinas/{id}",
    tag = "Disciplinas",
    params(("id" = Uuid, Path, description = "ID da disciplina")),
    request_body = UpdateDisciplinaPayload,
    responses(
        (status = 200, description = "Disciplina atualizada", body = Disciplina),
        (status = 404, description = "Disciplina não encontrada"),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDisciplinaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let disciplina = app_state
        .disciplina_service
        .update(admin.id, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(disciplina)))
}

// DELETE /api/disciplinas/{id}
#[utoipa::path(
    delete,
    path = "/api/disciplinas/{id}",
    tag = "Disciplinas",
    params(("id" = Uuid, Path, description = "ID da disciplina")),
    responses(
        (status = 200, description = "Disciplina removida", body = Disciplina),
        (status = 404, description = "Disciplina não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let disciplina = app_state.disciplina_service.remove(admin.id, id).await?;

    Ok((StatusCode::OK, Json(disciplina)))
}
