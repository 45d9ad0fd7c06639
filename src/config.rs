// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AdminRepository, AlunoRepository, CursoRepository, DisciplinaRepository,
        ProfessorRepository, TurmaRepository, UserRepository,
    },
    services::{
        aluno_service::AlunoService, auth::AuthService, curso_service::CursoService,
        disciplina_service::DisciplinaService, professor_service::ProfessorService,
        turma_service::TurmaService, user_service::UserService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub curso_service: CursoService,
    pub disciplina_service: DisciplinaService,
    pub turma_service: TurmaService,
    pub professor_service: ProfessorService,
    pub aluno_service: AlunoService,
    pub user_service: UserService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let admin_repo = AdminRepository::new(db_pool.clone());
        let user_repo = UserRepository::new(db_pool.clone());

        let auth_service = AuthService::new(admin_repo, user_repo.clone(), jwt_secret);
        let curso_service = CursoService::new(CursoRepository::new(db_pool.clone()));
        let disciplina_service =
            DisciplinaService::new(DisciplinaRepository::new(db_pool.clone()));
        let turma_service = TurmaService::new(TurmaRepository::new(db_pool.clone()));
        let professor_service =
            ProfessorService::new(ProfessorRepository::new(db_pool.clone()));
        let aluno_service = AlunoService::new(AlunoRepository::new(db_pool.clone()));
        let user_service = UserService::new(user_repo);

        Ok(Self {
            db_pool,
            auth_service,
            curso_service,
            disciplina_service,
            turma_service,
            professor_service,
            aluno_service,
            user_service,
        })
    }
}
