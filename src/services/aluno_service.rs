use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PaginatedResponse, PaginationParams},
    },
    db::AlunoRepository,
    models::aluno::{Aluno, CreateAlunoPayload, UpdateAlunoPayload},
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct AlunoService {
    repo: AlunoRepository,
}

impl AlunoService {
    pub fn new(repo: AlunoRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        admin_id: Uuid,
        payload: &CreateAlunoPayload,
    ) -> Result<Aluno, AppError> {
        let hashed_password = hash_password(payload.password.clone()).await?;
        self.repo.insert(admin_id, payload, &hashed_password).await
    }

    pub async fn find_all(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<Aluno>, AppError> {
        let (total, data) = self.repo.list(admin_id, params).await?;
        Ok(PaginatedResponse::new(total, params, data))
    }

    pub async fn find_one(&self, admin_id: Uuid, id: Uuid) -> Result<Aluno, AppError> {
        self.repo.find_by_id(admin_id, id).await
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateAlunoPayload,
    ) -> Result<Aluno, AppError> {
        // Só re-hasheia se o PATCH realmente trouxe uma senha nova.
        let hashed_password = match &payload.password {
            Some(password) => Some(hash_password(password.clone()).await?),
            None => None,
        };

        self.repo
            .update(admin_id, id, payload, hashed_password.as_deref())
            .await
    }

    pub async fn remove(&self, admin_id: Uuid, id: Uuid) -> Result<Aluno, AppError> {
        self.repo.delete(admin_id, id).await
    }
}
