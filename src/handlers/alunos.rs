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
    models::aluno::{Aluno, CreateAlunoPayload, UpdateAlunoPayload},
};

// POST /api/alunos
#[utoipa::path(
    post,
    path = "/api/alunos",
    tag = "Alunos",
    request_body = CreateAlunoPayload,
    responses(
        (status = 201, description = "Aluno criado", body = Aluno),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Matrícula ou e-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Json(payload): Json<CreateAlunoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let aluno = app_state.aluno_service.create(admin.id, &payload).await?;

    Ok((StatusCode::CREATED, Json(aluno)))
}

// GET /api/alunos
#[utoipa::path(
    get,
    path = "/api/alunos",
    tag = "Alunos",
    params(PaginationParams),
    responses(
        (status = 200, description = "Lista paginada de alunos", body = PaginatedResponse<Aluno>)
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state.aluno_service.find_all(admin.id, &params).await?;

    Ok((StatusCode::OK, Json(page)))
}

// GET /api/alunos/{id}
#[utoipa::path(
    get,
    path = "/api/alunos/{id}",
    tag = "Alunos",
    params(("id" = Uuid, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno encontrado", body = Aluno),
        (status = 404, description = "Aluno não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = app_state.aluno_service.find_one(admin.id, id).await?;

    Ok((StatusCode::OK, Json(aluno)))
}

// PATCH /api/alunos/{id}
#[utoipa::path(
    patch,
    path = "/api/alunos/{id}",
    tag = "Alunos",
    params(("id" = Uuid, Path, description = "ID do aluno")),
    request_body = UpdateAlunoPayload,
    responses(
        (status = 200, description = "Aluno atualizado", body = Aluno),
        (status = 404, description = "Aluno não encontrado"),
        (status = 409, description = "Matrícula ou e-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAlunoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let aluno = app_state
        .aluno_service
        .update(admin.id, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(aluno)))
}

// DELETE /api/alunos/{id}
#[utoipa::path(
    delete,
    path = "/api/alunos/{id}",
    tag = "Alunos",
    params(("id" = Uuid, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno removido", body = Aluno),
        (status = 404, description = "Aluno não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let aluno = app_state.aluno_service.remove(admin.id, id).await?;

    Ok((StatusCode::OK, Json(aluno)))
}
