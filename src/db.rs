pub mod admin_repo;
pub use admin_repo::AdminRepository;
pub mod aluno_repo;
pub use aluno_repo::AlunoRepository;
pub mod curso_repo;
pub use curso_repo::CursoRepository;
pub mod disciplina_repo;
pub use disciplina_repo::DisciplinaRepository;
pub mod professor_repo;
pub use professor_repo::ProfessorRepository;
pub mod turma_repo;
pub use turma_repo::TurmaRepository;
pub mod user_repo;
pub use user_repo::UserRepository;

use crate::common::error::AppError;

// Converte violação de restrição do banco em erro de conflito específico.
// O INSERT/UPDATE é a única checagem de unicidade: o banco decide, e duas
// requisições concorrentes com o mesmo valor nunca passam as duas. Chaves
// estrangeiras seguem o mesmo caminho: referência quebrada vira 409, não 500.
pub(crate) fn map_constraint_violation(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    "admins_email_key"
                    | "users_email_key"
                    | "professores_email_key"
                    | "alunos_email_key" => AppError::EmailAlreadyExists,

                    "professores_matricula_key" | "alunos_matricula_key" => {
                        AppError::MatriculaAlreadyExists
                    }

                    "cursos_codigo_key" | "disciplinas_codigo_key" | "turmas_codigo_key" => {
                        AppError::CodigoAlreadyExists
                    }

                    // Fallback caso surjam outras chaves únicas no futuro
                    _ => AppError::UniqueConstraintViolation(constraint.to_string()),
                };
            }
        }

        if db_err.is_foreign_key_violation() {
            if let Some(constraint) = db_err.constraint() {
                return AppError::ForeignKeyViolation(constraint.to_string());
            }
        }
    }
    e.into()
}
