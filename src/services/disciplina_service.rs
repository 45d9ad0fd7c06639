use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PaginatedResponse, PaginationParams},
    },
    db::DisciplinaRepository,
    models::disciplina::{CreateDisciplinaPayload, Disciplina, UpdateDisciplinaPayload},
};

#[derive(Clone)]
pub struct DisciplinaService {
    repo: DisciplinaRepository,
}

impl DisciplinaService {
    pub fn new(repo: DisciplinaRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        admin_id: Uuid,
        payload: &CreateDisciplinaPayload,
    ) -> Result<Disciplina, AppError> {
        self.repo.insert(admin_id, payload).await
    }

    pub async fn find_all(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<Disciplina>, AppError> {
        let (total, data) = self.repo.list(admin_id, params).await?;
        Ok(PaginatedResponse::new(total, params, data))
    }

    pub async fn find_one(&self, admin_id: Uuid, id: Uuid) -> Result<Disciplina, AppError> {
        self.repo.find_by_id(admin_id, id).await
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateDisciplinaPayload,
    ) -> Result<Disciplina, AppError> {
        self.repo.update(admin_id, id, payload).await
    }

    pub async fn remove(&self, admin_id: Uuid, id: Uuid) -> Result<Disciplina, AppError> {
        self.repo.delete(admin_id, id).await
    }
}
