use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PaginatedResponse, PaginationParams},
    },
    db::CursoRepository,
    models::curso::{CreateCursoPayload, Curso, CursoComDisciplinas, UpdateCursoPayload},
};

#[derive(Clone)]
pub struct CursoService {
    repo: CursoRepository,
}

impl CursoService {
    pub fn new(repo: CursoRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        admin_id: Uuid,
        payload: &CreateCursoPayload,
    ) -> Result<Curso, AppError> {
        self.repo.insert(admin_id, payload).await
    }

    pub async fn find_all(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<CursoComDisciplinas>, AppError> {
        let (total, data) = self.repo.list(admin_id, params).await?;
        Ok(PaginatedResponse::new(total, params, data))
    }

    pub async fn find_one(&self, admin_id: Uuid, id: Uuid) -> Result<Curso, AppError> {
        self.repo.find_by_id(admin_id, id).await
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateCursoPayload,
    ) -> Result<Curso, AppError> {
        self.repo.update(admin_id, id, payload).await
    }

    pub async fn remove(&self, admin_id: Uuid, id: Uuid) -> Result<Curso, AppError> {
        self.repo.delete(admin_id, id).await
    }
}
