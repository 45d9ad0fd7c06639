use sqlx::PgPool;
use uuid::Uuid;

use super::map_constraint_violation;
use crate::{
    common::{error::AppError, pagination::PaginationParams},
    models::turma::{CreateTurmaPayload, Turma, UpdateTurmaPayload},
};

#[derive(Clone)]
pub struct TurmaRepository {
    pool: PgPool,
}

impl TurmaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(sort: Option<&str>) -> &'static str {
        match sort {
            Some("codigo") => "codigo",
            Some("semestre") => "semestre",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    pub async fn insert(
        &self,
        admin_id: Uuid,
        payload: &CreateTurmaPayload,
    ) -> Result<Turma, AppError> {
        sqlx::query_as::<_, Turma>(
            r#"
            INSERT INTO turmas (codigo, semestre, turno, modalidade, curso_id, admin_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.codigo)
        .bind(&payload.semestre)
        .bind(payload.turno)
        .bind(payload.modalidade)
        .bind(payload.curso_id)
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    pub async fn list(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(i64, Vec<Turma>), AppError> {
        let mut tx = self.pool.begin().await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM turmas WHERE admin_id = $1")
            .bind(admin_id)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "SELECT * FROM turmas WHERE admin_id = $1 ORDER BY {} {} LIMIT $2 OFFSET $3",
            Self::sort_column(params.sort.as_deref()),
            params.sort_dir().as_sql(),
        );
        let data = sqlx::query_as::<_, Turma>(&query)
            .bind(admin_id)
            .bind(params.per_page())
            .bind(params.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((total, data))
    }

    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> Result<Turma, AppError> {
        sqlx::query_as::<_, Turma>("SELECT * FROM turmas WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::TurmaNotFound)
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateTurmaPayload,
    ) -> Result<Turma, AppError> {
        sqlx::query_as::<_, Turma>(
            r#"
            UPDATE turmas SET
                codigo = COALESCE($1, codigo),
                semestre = COALESCE($2, semestre),
                turno = COALESCE($3, turno),
                modalidade = COALESCE($4, modalidade),
                curso_id = COALESCE($5, curso_id),
                updated_at = NOW()
            WHERE id = $6 AND admin_id = $7
            RETURNING *
            "#,
        )
        .bind(payload.codigo.as_deref())
        .bind(payload.semestre.as_deref())
        .bind(payload.turno)
        .bind(payload.modalidade)
        .bind(payload.curso_id)
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::TurmaNotFound)
    }

    pub async fn delete(&self, admin_id: Uuid, id: Uuid) -> Result<Turma, AppError> {
        sqlx::query_as::<_, Turma>(
            "DELETE FROM turmas WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::TurmaNotFound)
    }
}
