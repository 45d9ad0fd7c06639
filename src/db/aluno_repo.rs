use sqlx::PgPool;
use uuid::Uuid;

use super::map_constraint_violation;
use crate::{
    common::{error::AppError, pagination::PaginationParams},
    models::aluno::{Aluno, CreateAlunoPayload, UpdateAlunoPayload},
};

#[derive(Clone)]
pub struct AlunoRepository {
    pool: PgPool,
}

impl AlunoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(sort: Option<&str>) -> &'static str {
        match sort {
            Some("matricula") => "matricula",
            Some("nomeCompleto") => "nome_completo",
            Some("email") => "email",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    // A senha já chega com hash; o serviço cuida do bcrypt.
    pub async fn insert(
        &self,
        admin_id: Uuid,
        payload: &CreateAlunoPayload,
        password_hash: &str,
    ) -> Result<Aluno, AppError> {
        sqlx::query_as::<_, Aluno>(
            r#"
            INSERT INTO alunos
                (matricula, nome_completo, data_nascimento, curso, email, password, admin_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.matricula)
        .bind(&payload.nome_completo)
        .bind(payload.data_nascimento)
        .bind(payload.curso)
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
    ) -> Result<(i64, Vec<Aluno>), AppError> {
        let mut tx = self.pool.begin().await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM alunos WHERE admin_id = $1")
            .bind(admin_id)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "SELECT * FROM alunos WHERE admin_id = $1 ORDER BY {} {} LIMIT $2 OFFSET $3",
            Self::sort_column(params.sort.as_deref()),
            params.sort_dir().as_sql(),
        );
        let data = sqlx::query_as::<_, Aluno>(&query)
            .bind(admin_id)
            .bind(params.per_page())
            .bind(params.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((total, data))
    }

    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> Result<Aluno, AppError> {
        sqlx::query_as::<_, Aluno>("SELECT * FROM alunos WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::AlunoNotFound)
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateAlunoPayload,
        password_hash: Option<&str>,
    ) -> Result<Aluno, AppError> {
        sqlx::query_as::<_, Aluno>(
            r#"
            UPDATE alunos SET
                matricula = COALESCE($1, matricula),
                nome_completo = COALESCE($2, nome_completo),
                data_nascimento = COALESCE($3, data_nascimento),
                curso = COALESCE($4, curso),
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
        .bind(payload.curso)
        .bind(payload.email.as_deref())
        .bind(password_hash)
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::AlunoNotFound)
    }

    pub async fn delete(&self, admin_id: Uuid, id: Uuid) -> Result<Aluno, AppError> {
        sqlx::query_as::<_, Aluno>(
            "DELETE FROM alunos WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AlunoNotFound)
    }
}

// Testes de integração: cada um roda em um banco provisionado pelo
// #[sqlx::test], com as migrações aplicadas.
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn novo_admin(pool: &PgPool) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO admins (email, name, password) VALUES ($1, 'Teste', 'hash') RETURNING id",
        )
        .bind(format!("{}@escola.com", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn novo_curso(pool: &PgPool, admin_id: Uuid) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO cursos (codigo, nome, admin_id) VALUES ($1, 'Curso', $2) RETURNING id",
        )
        .bind(Uuid::new_v4().to_string().to_uppercase())
        .bind(admin_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn payload(matricula: &str, curso: Uuid) -> CreateAlunoPayload {
        CreateAlunoPayload {
            matricula: matricula.into(),
            nome_completo: "Maria Oliveira".into(),
            data_nascimento: NaiveDate::from_ymd_opt(2005, 5, 15).unwrap(),
            curso,
            email: format!("{}@escola.com", matricula.to_lowercase()),
            password: "senhaSegura123".into(),
        }
    }

    #[sqlx::test]
    async fn aluno_de_outro_admin_eh_indistinguivel_de_inexistente(pool: PgPool) {
        let repo = AlunoRepository::new(pool.clone());
        let admin_a = novo_admin(&pool).await;
        let admin_b = novo_admin(&pool).await;
        let curso = novo_curso(&pool, admin_a).await;

        let aluno = repo
            .insert(admin_a, &payload("25A00001", curso), "hash")
            .await
            .unwrap();

        assert!(matches!(
            repo.find_by_id(admin_b, aluno.id).await,
            Err(AppError::AlunoNotFound)
        ));

        let patch: UpdateAlunoPayload = serde_json::from_str(r#"{"nomeCompleto":"Invadida"}"#).unwrap();
        assert!(matches!(
            repo.update(admin_b, aluno.id, &patch, None).await,
            Err(AppError::AlunoNotFound)
        ));
        assert!(matches!(
            repo.delete(admin_b, aluno.id).await,
            Err(AppError::AlunoNotFound)
        ));

        // O dono continua enxergando a linha intacta.
        let intacto = repo.find_by_id(admin_a, aluno.id).await.unwrap();
        assert_eq!(intacto.nome_completo, "Maria Oliveira");
    }

    #[sqlx::test]
    async fn matricula_duplicada_vira_conflito_sem_gravar(pool: PgPool) {
        let repo = AlunoRepository::new(pool.clone());
        let admin = novo_admin(&pool).await;
        let curso = novo_curso(&pool, admin).await;

        repo.insert(admin, &payload("25A00001", curso), "hash")
            .await
            .unwrap();

        let mut duplicado = payload("25A00001", curso);
        duplicado.email = "outro@escola.com".into();
        assert!(matches!(
            repo.insert(admin, &duplicado, "hash").await,
            Err(AppError::MatriculaAlreadyExists)
        ));

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alunos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[sqlx::test]
    async fn curso_inexistente_vira_conflito_de_referencia(pool: PgPool) {
        let repo = AlunoRepository::new(pool.clone());
        let admin = novo_admin(&pool).await;

        let result = repo
            .insert(admin, &payload("25A00001", Uuid::new_v4()), "hash")
            .await;
        assert!(matches!(result, Err(AppError::ForeignKeyViolation(_))));
    }
}
