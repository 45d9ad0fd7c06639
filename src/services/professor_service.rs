use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PaginatedResponse, PaginationParams},
    },
    db::ProfessorRepository,
    models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct ProfessorService {
    repo: ProfessorRepository,
}

impl ProfessorService {
    pub fn new(repo: ProfessorRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        admin_id: Uuid,
        payload: &CreateProfessorPayload,
    ) -> Result<Professor, AppError> {
        let hashed_password = hash_password(payload.password.clone()).await?;
        self.repo.insert(admin_id, payload, &hashed_password).await
    }

    pub async fn find_all(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<Professor>, AppError> {
        let (total, data) = self.repo.list(admin_id, params).await?;
        Ok(PaginatedResponse::new(total, params, data))
    }

    pub async fn find_one(&self, admin_id: Uuid, id: Uuid) -> Result<Professor, AppError> {
        self.repo.find_by_id(admin_id, id).await
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateProfessorPayload,
    ) -> Result<Professor, AppError> {
        // Só re-hasheia se o PATCH realmente trouxe uma senha nova.
        let hashed_password = match &payload.password {
            Some(password) => Some(hash_password(password.clone()).await?),
            None => None,
        };

        self.repo
            .update(admin_id, id, payload, hashed_password.as_deref())
            .await
    }

    pub async fn remove(&self, admin_id: Uuid, id: Uuid) -> Result<Professor, AppError> {
        self.repo.delete(admin_id, id).await
    }
}
