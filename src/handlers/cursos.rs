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
    models::curso::{CreateCursoPayload, Curso, CursoComDisciplinas, UpdateCursoPayload},
};

// POST /api/cursos
#[utoipa::path(
    post,
    path = "/api/cursos",
    tag = "Cursos",
    request_body = CreateCursoPayload,
    responses(
        (status = 201, description = "Curso criado", body = Curso),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Json(payload): Json<CreateCursoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let curso = app_state.curso_service.create(admin.id, &payload).await?;

    Ok((StatusCode::CREATED, Json(curso)))
}

// GET /api/cursos
#[utoipa::path(
    get,
    path = "/api/cursos",
    tag = "Cursos",
    params(PaginationParams),
    responses(
        (status = 200, description = "Lista paginada de cursos com as disciplinas de cada um", body = PaginatedResponse<CursoComDisciplinas>)
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state.curso_service.find_all(admin.id, &params).await?;

    Ok((StatusCode::OK, Json(page)))
}

// GET /api/cursos/{id}
#[utoipa::path(
    get,
    path = "/api/cursos/{id}",
    tag = "Cursos",
    params(("id" = Uuid, Path, description = "ID do curso")),
    responses(
        (status = 200, description = "Curso encontrado", body = Curso),
        (status = 404, description = "Curso não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let curso = app_state.curso_service.find_one(admin.id, id).await?;

    Ok((StatusCode::OK, Json(curso)))
}

// PATCH /api/cursos/{id}
#[utoipa::path(
    patch,
    path = "/api/cursos/{id}",
    tag = "Cursos",
    params(("id" = Uuid, Path, description = "ID do curso")),
    request_body = UpdateCursoPayload,
    responses(
        (status = 200, description = "Curso atualizado", body = Curso),
        (status = 404, description = "Curso não encontrado"),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCursoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let curso = app_state
        .curso_service
        .update(admin.id, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(curso)))
}

// DELETE /api/cursos/{id}
#[utoipa::path(
    delete,
    path = "/api/cursos/{id}",
    tag = "Cursos",
    params(("id" = Uuid, Path, description = "ID do curso")),
    responses(
        (status = 200, description = "Curso removido", body = Curso),
        (status = 404, description = "Curso não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove(
    State(app_state): State<AppState>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let curso = app_state.curso_service.remove(admin.id, id).await?;

    Ok((StatusCode::OK, Json(curso)))
}
