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
    models::turma::{CreateTurmaPayload, Turma, UpdateTurmaPayload},
};

// POST /api/turmas
#[utoipa::path(
    post,
    path = "/api/turmas",
    tag = "Turmas",
    request_body = CreateTurmaPayload,
    responses(
        (status = 201, description = "Turma criada", body = Turma),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Json(payload): Json<CreateTurmaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let turma = app_state.turma_service.create(admin.id, &payload).await?;

    Ok((StatusCode::CREATED, Json(turma)))
}

// GET /api/turmas
#[utoipa::path(
    get,
    path = "/api/turmas",
    tag = "Turmas",
    params(PaginationParams),
    responses(
        (status = 200, description = "Lista paginada de turmas", body = PaginatedResponse<Turma>)
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state.turma_service.find_all(admin.id, &params).await?;

    Ok((StatusCode::OK, Json(page)))
}

// GET /api/turmas/{id}
#[utoipa::path(
    get,
    path = "/api/turmas/{id}",
    tag = "Turmas",
    params(("id" = Uuid, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Turma encontrada", body = Turma),
        (status = 404, description = "Turma não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let turma = app_state.turma_service.find_one(admin.id, id).await?;

    Ok((StatusCode::OK, Json(turma)))
}

// PATCH /api/turmas/{id}
#[utoipa::path(
    patch,
    path = "/api/turmas/{id}",
    tag = "Turmas",
    params(("id" = Uuid, Path, description = "ID da turma")),
    request_body = UpdateTurmaPayload,
    responses(
        (status = 200, description = "Turma atualizada", body = Turma),
        (status = 404, description = "Turma não encontrada"),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTurmaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let turma = app_state
        .turma_service
        .update(admin.id, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(turma)))
}

// DELETE /api/turmas/{id}
#[utoipa::path(
    delete,
    path = "/api/turmas/{id}",
    tag = "Turmas",
    params(("id" = Uuid, Path, description = "ID da turma")),
    responses(
        (status = 200, description = "Turma removida", body = Turma),
        (status = 404, description = "Turma não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let turma = app_state.turma_service.remove(admin.id, id).await?;

    Ok((StatusCode::OK, Json(turma)))
}
