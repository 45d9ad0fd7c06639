use sqlx::PgPool;
use uuid::Uuid;

use super::map_constraint_violation;
use crate::{
    common::{error::AppError, pagination::PaginationParams},
    models::user::{CreateUserPayload, Role, UpdateUserPayload, User},
};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(sort: Option<&str>) -> &'static str {
        match sort {
            Some("email") => "email",
            Some("name") => "name",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    pub async fn insert(
        &self,
        payload: &CreateUserPayload,
        password_hash: &str,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.email)
        .bind(&payload.name)
        .bind(password_hash)
        .bind(payload.role.unwrap_or(Role::User))
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    pub async fn list(
        &self,
        params: &PaginationParams,
    ) -> Result<(i64, Vec<User>), AppError> {
        let mut tx = self.pool.begin().await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "SELECT * FROM users ORDER BY {} {} LIMIT $1 OFFSET $2",
            Self::sort_column(params.sort.as_deref()),
            params.sort_dir().as_sql(),
        );
        let data = sqlx::query_as::<_, User>(&query)
            .bind(params.per_page())
            .bind(params.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((total, data))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateUserPayload,
        password_hash: Option<&str>,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                email = COALESCE($1, email),
                name = COALESCE($2, name),
                password = COALESCE($3, password),
                role = COALESCE($4, role),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(payload.email.as_deref())
        .bind(payload.name.as_deref())
        .bind(password_hash)
        .bind(payload.role)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::UserNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
