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
    models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
};

// POST /api/professores
#[utoipa::path(
    post,
    path = "/api/professores",
    tag = "Professores",
    request_body = CreateProfessorPayload,
    responses(
        (status = 201, description = "Professor criado", body = Professor),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Matrícula ou e-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Json(payload): Json<CreateProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let professor = app_state
        .professor_service
        .create(admin.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(professor)))
}

// GET /api/professores
#[utoipa::path(
    get,
    path = "/api/professores",
    tag = "Professores",
    params(PaginationParams),
    responses(
        (status = 200, description = "Lista paginada de professores", body = PaginatedResponse<Professor>)
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state
        .professor_service
        .find_all(admin.id, &params)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

// GET /api/professores/{id}
#[utoipa::path(
    get,
    path = "/api/professores/{id}",
    tag = "Professores",
    params(("id" = Uuid, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Professor encontrado", body = Professor),
        (status = 404, description = "Professor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let professor = app_state.professor_service.find_one(admin.id, id).await?;

    Ok((StatusCode::OK, Json(professor)))
}

// PATCH /api/professores/{id}
#[utoipa::path(
    patch,
    path = "/api/professores/{id}",
    tag = "Professores",
    params(("id" = Uuid, Path, description = "ID do professor")),
    request_body = UpdateProfessorPayload,
    responses(
        (status = 200, description = "Professor atualizado", body = Professor),
        (status = 404, description = "Professor não encontrado"),
        (status = 409, description = "Matrícula ou e-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let professor = app_state
        .professor_service
        .update(admin.id, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(professor)))
}

// DELETE /api/professores/{id}
#[utoipa::path(
    delete,
    path = "/api/professores/{id}",
    tag = "Professores",
    params(("id" = Uuid, Path, description = "ID do professor")),
    responses(
        (status = 200, description = "Professor removido", body = Professor),
        (status = 404, description = "Professor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let professor = app_state.professor_service.remove(admin.id, id).await?;

    Ok((StatusCode::OK, Json(professor)))
}
