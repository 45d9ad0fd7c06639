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
    middleware::auth::CurrentUser,
    models::user::{CreateUserPayload, UpdateUserPayload, User},
    services::user_service::UserKey,
};

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Apenas admins podem criar usuários"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state.user_service.create(&principal, &payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "Lista paginada de usuários", body = PaginatedResponse<User>),
        (status = 403, description = "Apenas admins podem listar usuários")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_all(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state.user_service.find_all(&principal, &params).await?;

    Ok((StatusCode::OK, Json(page)))
}

// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = User),
        (status = 403, description = "Usuário comum só acessa o próprio cadastro"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .find_one(&principal, &UserKey::Id(id))
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

// GET /api/users/email/{email}
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "E-mail do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = User),
        (status = 403, description = "Usuário comum só acessa o próprio cadastro"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_one_by_email(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .find_one(&principal, &UserKey::Email(email))
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

// PATCH /api/users/{id}
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 403, description = "Usuário comum não altera outros cadastros nem o próprio papel"),
        (status = 404, description = "Usuário não encontrado"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .user_service
        .update(&principal, &UserKey::Id(id), &payload)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

// PATCH /api/users/email/{email}
#[utoipa::path(
    patch,
    path = "/api/users/email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "E-mail do usuário")),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 403, description = "Usuário comum não altera outros cadastros nem o próprio papel"),
        (status = 404, description = "Usuário não encontrado"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_by_email(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .user_service
        .update(&principal, &UserKey::Email(email), &payload)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário removido", body = User),
        (status = 403, description = "Usuário comum só remove o próprio cadastro"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .remove(&principal, &UserKey::Id(id))
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

// DELETE /api/users/email/{email}
#[utoipa::path(
    delete,
    path = "/api/users/email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "E-mail do usuário")),
    responses(
        (status = 200, description = "Usuário removido", body = User),
        (status = 403, description = "Usuário comum só remove o próprio cadastro"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn remove_by_email(
    State(app_state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .remove(&principal, &UserKey::Email(email))
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
