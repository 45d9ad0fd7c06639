use sqlx::PgPool;
use uuid::Uuid;

use super::map_constraint_violation;
use crate::{
    common::{error::AppError, pagination::PaginationParams},
    models::disciplina::{CreateDisciplinaPayload, Disciplina, UpdateDisciplinaPayload},
};

#[derive(Clone)]
pub struct DisciplinaRepository {
    pool: PgPool,
}

impl DisciplinaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(sort: Option<&str>) -> &'static str {
        match sort {
            Some("codigo") => "codigo",
            Some("nome") => "nome",
            Some("cargaHoraria") => "carga_horaria",
            Some("periodo") => "periodo",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    pub async fn insert(
        &self,
        admin_id: Uuid,
        payload: &CreateDisciplinaPayload,
    ) -> Result<Disciplina, AppError> {
        sqlx::query_as::<_, Disciplina>(
            r#"
            INSERT INTO disciplinas (codigo, nome, descricao, carga_horaria, periodo, curso_id, admin_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.codigo)
        .bind(&payload.nome)
        .bind(payload.descricao.as_deref().unwrap_or(""))
        .bind(payload.carga_horaria)
        .bind(&payload.periodo)
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
    ) -> Result<(i64, Vec<Disciplina>), AppError> {
        let mut tx = self.pool.begin().await?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM disciplinas WHERE admin_id = $1")
                .bind(admin_id)
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "SELECT * FROM disciplinas WHERE admin_id = $1 ORDER BY {} {} LIMIT $2 OFFSET $3",
            Self::sort_column(params.sort.as_deref()),
            params.sort_dir().as_sql(),
        );
        let data = sqlx::query_as::<_, Disciplina>(&query)
            .bind(admin_id)
            .bind(params.per_page())
            .bind(params.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((total, data))
    }

    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> Result<Disciplina, AppError> {
        sqlx::query_as::<_, Disciplina>("SELECT * FROM disciplinas WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::DisciplinaNotFound)
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateDisciplinaPayload,
    ) -> Result<Disciplina, AppError> {
        sqlx::query_as::<_, Disciplina>(
            r#"
            UPDATE disciplinas SET
                codigo = COALESCE($1, codigo),
                nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                carga_horaria = COALESCE($4, carga_horaria),
                periodo = COALESCE($5, periodo),
                curso_id = COALESCE($6, curso_id),
                updated_at = NOW()
            WHERE id = $7 AND admin_id = $8
            RETURNING *
            "#,
        )
        .bind(payload.codigo.as_deref())
        .bind(payload.nome.as_deref())
        .bind(payload.descricao.as_deref())
        .bind(payload.carga_horaria)
        .bind(payload.periodo.as_deref())
        .bind(payload.curso_id)
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::DisciplinaNotFound)
    }

    pub async fn delete(&self, admin_id: Uuid, id: Uuid) -> Result<Disciplina, AppError> {
        sqlx::query_as::<_, Disciplina>(
            "DELETE FROM disciplinas WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::DisciplinaNotFound)
    }
}
