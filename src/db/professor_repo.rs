use sqlx::PgPool;
use uuid::Uuid;

use super::map_constraint_violation;
use crate::{
    common::{error::AppError, pagination::PaginationParams},
    models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
};

#[derive(Clone)]
pub struct ProfessorRepository {
    pool: PgPool,
}

impl ProfessorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(sort: Option<&str>) -> &'static str {
        match sort {
            Some("matricula") => "matricula",
            Some("nomeCompleto") => "nome_completo",
            Some("especialidade") => "especialidade",
            Some("email") => "email",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    // A senha já chega com hash; o serviço cuida do bcrypt.
    pub async fn insert(
        &self,
        admin_id: Uuid,
        payload: &CreateProfessorPayload,
        password_hash: &str,
    ) -> Result<Professor, AppError> {
        sqlx::query_as::<_, Professor>(
            r#"
            INSERT INTO professores
                (matricula, nome_completo, data_nascimento, especialidade, email, password, admin_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.matricula)
        .bind(&payload.nome_completo)
        .bind(payload.data_nascimento)
        .bind(&payload.especialidade)
        .bind(&payload.email)
        .bind(password_hash)
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    pub async fn list(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(i64, Vec<Professor>), AppError> {
        let mut tx = self.pool.begin().await?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM professores WHERE admin_id = $1")
                .bind(admin_id)
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "SELECT * FROM professores WHERE admin_id = $1 ORDER BY {} {} LIMIT $2 OFFSET $3",
            Self::sort_column(params.sort.as_deref()),
            params.sort_dir().as_sql(),
        );
        let data = sqlx::query_as::<_, Professor>(&query)
            .bind(admin_id)
            .bind(params.per_page())
            .bind(params.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((total, data))
    }

    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> Result<Professor, AppError> {
        sqlx::query_as::<_, Professor>("SELECT * FROM professores WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::ProfessorNotFound)
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateProfessorPayload,
        password_hash: Option<&str>,
    ) -> Result<Professor, AppError> {
        sqlx::query_as::<_, Professor>(
            r#"
            UPDATE professores SET
                matricula = COALESCE($1, matricula),
                nome_completo = COALESCE($2, nome_completo),
                data_nascimento = COALESCE($3, data_nascimento),
                especialidade = COALESCE($4, especialidade),
                email = COALESCE($5, email),
                password = COALESCE($6, password),
                updated_at = NOW()
            WHERE id = $7 AND admin_id = $8
            RETURNING *
            "#,
        )
        .bind(payload.matricula.as_deref())
        .bind(payload.nome_completo.as_deref())
        .bind(payload.data_nascimento)
        .bind(payload.especialidade.as_deref())
        .bind(payload.email.as_deref())
        .bind(password_hash)
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::ProfessorNotFound)
    }

    pub async fn delete(&self, admin_id: Uuid, id: Uuid) -> Result<Professor, AppError> {
        sqlx::query_as::<_, Professor>(
            "DELETE FROM professores WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ProfessorNotFound)
    }
}
