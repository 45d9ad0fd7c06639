// src/docs.rs

use crate::common::pagination::{PaginatedResponse, PaginationParams};
use crate::handlers;
use crate::models;
use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::user_login,

        // --- Cursos ---
        handlers::cursos::create,
        handlers::cursos::find_all,
        handlers::cursos::find_one,
        handlers::cursos::update,
        handlers::cursos::remove,

        // --- Disciplinas ---
        handlers::disciplinas::create,
        handlers::disciplinas::find_all,
        handlers::disciplinas::find_one,
        handlers::disciplinas::update,
        handlers::disciplinas::remove,

        // --- Turmas ---
        handlers::turmas::create,
        handlers::turmas::find_all,
        handlers::turmas::find_one,
        handlers::turmas::update,
        handlers::turmas::remove,

        // --- Professores ---
        handlers::professores::create,
        handlers::professores::find_all,
        handlers::professores::find_one,
        handlers::professores::update,
        handlers::professores::remove,

        // --- Alunos ---
        handlers::alunos::create,
        handlers::alunos::find_all,
        handlers::alunos::find_one,
        handlers::alunos::update,
        handlers::alunos::remove,

        // --- Users ---
        handlers::users::create,
        handlers::users::find_all,
        handlers::users::find_one,
        handlers::users::find_one_by_email,
        handlers::users::update,
        handlers::users::update_by_email,
        handlers::users::remove,
        handlers::users::remove_by_email,
    ),
    components(
        schemas(
            // --- Auth ---
            models::admin::Admin,
            models::admin::RegisterAdminPayload,
            models::auth::LoginPayload,
            models::auth::TokenResponse,

            // --- Users ---
            models::user::Role,
            models::user::User,
            models::user::CreateUserPayload,
            models::user::UpdateUserPayload,

            // --- Cursos ---
            models::curso::Curso,
            models::curso::CursoComDisciplinas,
            models::curso::CreateCursoPayload,
            models::curso::UpdateCursoPayload,

            // --- Disciplinas ---
            models::disciplina::Disciplina,
            models::disciplina::CreateDisciplinaPayload,
            models::disciplina::UpdateDisciplinaPayload,

            // --- Turmas ---
            models::turma::Turno,
            models::turma::Modalidade,
            models::turma::Turma,
            models::turma::CreateTurmaPayload,
            models::turma::UpdateTurmaPayload,

            // --- Professores ---
            models::professor::Professor,
            models::professor::CreateProfessorPayload,
            models::professor::UpdateProfessorPayload,

            // --- Alunos ---
            models::aluno::Aluno,
            models::aluno::CreateAlunoPayload,
            models::aluno::UpdateAlunoPayload,

            // --- Paginação ---
            PaginationParams,
            PaginatedResponse<models::curso::CursoComDisciplinas>,
            PaginatedResponse<models::disciplina::Disciplina>,
            PaginatedResponse<models::turma::Turma>,
            PaginatedResponse<models::professor::Professor>,
            PaginatedResponse<models::aluno::Aluno>,
            PaginatedResponse<models::user::User>,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Cursos", description = "Gestão de Cursos"),
        (name = "Disciplinas", description = "Gestão de Disciplinas"),
        (name = "Turmas", description = "Gestão de Turmas"),
        (name = "Professores", description = "Gestão de Professores"),
        (name = "Alunos", description = "Gestão de Alunos"),
        (name = "Users", description = "Contas de Usuário (self-or-admin)")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme("api_jwt", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
    }
}
