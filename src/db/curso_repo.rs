use sqlx::PgPool;
use uuid::Uuid;

use super::map_constraint_violation;
use crate::{
    common::{error::AppError, pagination::PaginationParams},
    models::{
        curso::{CreateCursoPayload, Curso, CursoComDisciplinas, UpdateCursoPayload},
        disciplina::Disciplina,
    },
};

#[derive(Clone)]
pub struct CursoRepository {
    pool: PgPool,
}

impl CursoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Colunas aceitas no ?sort=; qualquer outra cai no default.
    fn sort_column(sort: Option<&str>) -> &'static str {
        match sort {
            Some("codigo") => "codigo",
            Some("nome") => "nome",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    pub async fn insert(
        &self,
        admin_id: Uuid,
        payload: &CreateCursoPayload,
    ) -> Result<Curso, AppError> {
        sqlx::query_as::<_, Curso>(
            r#"
            INSERT INTO cursos (codigo, nome, descricao, admin_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.codigo)
        .bind(&payload.nome)
        .bind(payload.descricao.as_deref().unwrap_or(""))
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_constraint_violation)
    }

    // Contagem, página e disciplinas relacionadas na mesma transação: as
    // três leituras enxergam o mesmo snapshot. Cada curso da página sai com
    // as suas disciplinas embutidas.
    pub async fn list(
        &self,
        admin_id: Uuid,
        params: &PaginationParams,
    ) -> Result<(i64, Vec<CursoComDisciplinas>), AppError> {
        let mut tx = self.pool.begin().await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cursos WHERE admin_id = $1")
            .bind(admin_id)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "SELECT * FROM cursos WHERE admin_id = $1 ORDER BY {} {} LIMIT $2 OFFSET $3",
            Self::sort_column(params.sort.as_deref()),
            params.sort_dir().as_sql(),
        );
        let cursos = sqlx::query_as::<_, Curso>(&query)
            .bind(admin_id)
            .bind(params.per_page())
            .bind(params.offset())
            .fetch_all(&mut *tx)
            .await?;

        // Uma única consulta cobre todas as disciplinas da página.
        let ids: Vec<Uuid> = cursos.iter().map(|c| c.id).collect();
        let disciplinas = sqlx::query_as::<_, Disciplina>(
            "SELECT * FROM disciplinas WHERE curso_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(&ids)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let data = cursos
            .into_iter()
            .map(|curso| {
                let disciplinas = disciplinas
                    .iter()
                    .filter(|d| d.curso_id == curso.id)
                    .cloned()
                    .collect();
                CursoComDisciplinas { curso, disciplinas }
            })
            .collect();

        Ok((total, data))
    }

    // Linha de outro admin é indistinguível de linha inexistente.
    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> Result<Curso, AppError> {
        sqlx::query_as::<_, Curso>("SELECT * FROM cursos WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::CursoNotFound)
    }

    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        payload: &UpdateCursoPayload,
    ) -> Result<Curso, AppError> {
        sqlx::query_as::<_, Curso>(
            r#"
            UPDATE cursos SET
                codigo = COALESCE($1, codigo),
                nome = COALESCE($2, nome),
                descricao = COALESCE($3, descricao),
                updated_at = NOW()
            WHERE id = $4 AND admin_id = $5
            RETURNING *
            "#,
        )
        .bind(payload.codigo.as_deref())
        .bind(payload.nome.as_deref())
        .bind(payload.descricao.as_deref())
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::CursoNotFound)
    }

    // Curso referenciado por disciplina/turma/aluno não pode ser apagado;
    // a chave estrangeira vira 409.
    pub async fn delete(&self, admin_id: Uuid, id: Uuid) -> Result<Curso, AppError> {
        sqlx::query_as::<_, Curso>(
            "DELETE FROM cursos WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_constraint_violation)?
        .ok_or(AppError::CursoNotFound)
    }
}

// Testes de integração: cada um roda em um banco provisionado pelo
// #[sqlx::test], com as migrações aplicadas.
#[cfg(test)]
mod tests {
    use super::*;

    async fn novo_admin(pool: &PgPool) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO admins (email, name, password) VALUES ($1, 'Teste', 'hash') RETURNING id",
        )
        .bind(format!("{}@escola.com", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn payload(codigo: &str) -> CreateCursoPayload {
        CreateCursoPayload {
            codigo: codigo.into(),
            nome: "Geografia".into(),
            descricao: None,
        }
    }

    #[sqlx::test]
    async fn linha_de_outro_admin_eh_indistinguivel_de_inexistente(pool: PgPool) {
        let repo = CursoRepository::new(pool.clone());
        let admin_a = novo_admin(&pool).await;
        let admin_b = novo_admin(&pool).await;

        let curso = repo.insert(admin_a, &payload("GEO")).await.unwrap();

        assert!(matches!(
            repo.find_by_id(admin_b, curso.id).await,
            Err(AppError::CursoNotFound)
        ));

        let patch = UpdateCursoPayload {
            codigo: None,
            nome: Some("Invadido".into()),
            descricao: None,
        };
        assert!(matches!(
            repo.update(admin_b, curso.id, &patch).await,
            Err(AppError::CursoNotFound)
        ));
        assert!(matches!(
            repo.delete(admin_b, curso.id).await,
            Err(AppError::CursoNotFound)
        ));

        // O dono continua enxergando a linha intacta.
        let intacto = repo.find_by_id(admin_a, curso.id).await.unwrap();
        assert_eq!(intacto.nome, "Geografia");
    }

    #[sqlx::test]
    async fn codigo_duplicado_vira_conflito_sem_gravar(pool: PgPool) {
        let repo = CursoRepository::new(pool.clone());
        let admin = novo_admin(&pool).await;

        repo.insert(admin, &payload("MAT")).await.unwrap();

        // Mesmo código, inclusive vindo de outro tenant: unicidade é global.
        let outro_admin = novo_admin(&pool).await;
        assert!(matches!(
            repo.insert(outro_admin, &payload("MAT")).await,
            Err(AppError::CodigoAlreadyExists)
        ));

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cursos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[sqlx::test]
    async fn listagem_traz_as_disciplinas_de_cada_curso(pool: PgPool) {
        let repo = CursoRepository::new(pool.clone());
        let admin = novo_admin(&pool).await;

        let geo = repo.insert(admin, &payload("GEO")).await.unwrap();
        let mat = repo.insert(admin, &payload("MAT")).await.unwrap();

        sqlx::query(
            "INSERT INTO disciplinas (codigo, nome, carga_horaria, periodo, curso_id, admin_id)
             VALUES ('GEO001', 'Climatologia', 66, '2', $1, $2)",
        )
        .bind(geo.id)
        .bind(admin)
        .execute(&pool)
        .await
        .unwrap();

        let (total, data) = repo.list(admin, &PaginationParams::default()).await.unwrap();
        assert_eq!(total, 2);

        let com_geo = data.iter().find(|c| c.curso.id == geo.id).unwrap();
        assert_eq!(com_geo.disciplinas.len(), 1);
        assert_eq!(com_geo.disciplinas[0].codigo, "GEO001");

        let com_mat = data.iter().find(|c| c.curso.id == mat.id).unwrap();
        assert!(com_mat.disciplinas.is_empty());
    }

    #[sqlx::test]
    async fn curso_referenciado_nao_pode_ser_apagado(pool: PgPool) {
        let repo = CursoRepository::new(pool.clone());
        let admin = novo_admin(&pool).await;
        let curso = repo.insert(admin, &payload("GEO")).await.unwrap();

        sqlx::query(
            "INSERT INTO disciplinas (codigo, nome, carga_horaria, periodo, curso_id, admin_id)
             VALUES ('GEO001', 'Climatologia', 66, '2', $1, $2)",
        )
        .bind(curso.id)
        .bind(admin)
        .execute(&pool)
        .await
        .unwrap();

        assert!(matches!(
            repo.delete(admin, curso.id).await,
            Err(AppError::ForeignKeyViolation(_))
        ));
    }
}
