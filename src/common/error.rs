use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante conhece o seu status HTTP; o `IntoResponse` abaixo
// é o único lugar que monta o corpo da resposta.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Alteração de papel não permitida")]
    RoleChangeNotAllowed,

    #[error("Curso não encontrado")]
    CursoNotFound,

    #[error("Disciplina não encontrada")]
    DisciplinaNotFound,

    #[error("Turma não encontrada")]
    TurmaNotFound,

    #[error("Professor não encontrado")]
    ProfessorNotFound,

    #[error("Aluno não encontrado")]
    AlunoNotFound,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Matrícula já existe")]
    MatriculaAlreadyExists,

    #[error("Código já existe")]
    CodigoAlreadyExists,

    #[error("Violação de chave única: {0}")]
    UniqueConstraintViolation(String),

    #[error("Violação de chave estrangeira: {0}")]
    ForeignKeyViolation(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden | AppError::RoleChangeNotAllowed => StatusCode::FORBIDDEN,
            AppError::CursoNotFound
            | AppError::DisciplinaNotFound
            | AppError::TurmaNotFound
            | AppError::ProfessorNotFound
            | AppError::AlunoNotFound
            | AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::EmailAlreadyExists
            | AppError::MatriculaAlreadyExists
            | AppError::CodigoAlreadyExists
            | AppError::UniqueConstraintViolation(_)
            | AppError::ForeignKeyViolation(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidCredentials => "E-mail ou senha inválidos.".to_string(),
            AppError::InvalidToken => "Token de autenticação inválido ou ausente.".to_string(),
            AppError::Forbidden => "Você não tem permissão para realizar esta ação.".to_string(),
            AppError::RoleChangeNotAllowed => {
                "Apenas administradores podem alterar o papel de um usuário.".to_string()
            }
            AppError::CursoNotFound => "Curso não encontrado.".to_string(),
            AppError::DisciplinaNotFound => "Disciplina não encontrada.".to_string(),
            AppError::TurmaNotFound => "Turma não encontrada.".to_string(),
            AppError::ProfessorNotFound => "Professor não encontrado.".to_string(),
            AppError::AlunoNotFound => "Aluno não encontrado.".to_string(),
            AppError::UserNotFound => "Usuário não encontrado.".to_string(),
            AppError::EmailAlreadyExists => "Este e-mail já está em uso.".to_string(),
            AppError::MatriculaAlreadyExists => "Esta matrícula já está em uso.".to_string(),
            AppError::CodigoAlreadyExists => "Este código já está em uso.".to_string(),
            AppError::UniqueConstraintViolation(constraint) => {
                format!("Valor duplicado viola a restrição '{}'.", constraint)
            }
            AppError::ForeignKeyViolation(constraint) => format!(
                "Registro relacionado inexistente ou ainda referenciado ('{}').",
                constraint
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente só vê o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                "Ocorreu um erro inesperado.".to_string()
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(email(message = "invalid_email"))]
        email: String,
    }

    #[test]
    fn conflitos_viram_409() {
        assert_eq!(AppError::EmailAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::MatriculaAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::CodigoAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::UniqueConstraintViolation("cursos_codigo_key".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ForeignKeyViolation("alunos_curso_fkey".into()).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn nao_encontrado_vira_404() {
        for err in [
            AppError::CursoNotFound,
            AppError::DisciplinaNotFound,
            AppError::TurmaNotFound,
            AppError::ProfessorNotFound,
            AppError::AlunoNotFound,
            AppError::UserNotFound,
        ] {
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn autenticacao_e_autorizacao() {
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::RoleChangeNotAllowed.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn validacao_vira_400_com_detalhes() {
        let payload = Payload { email: "nao-eh-email".into() };
        let err = AppError::ValidationError(payload.validate().unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn erros_inesperados_viram_500() {
        let err = AppError::InternalServerError(anyhow::anyhow!("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
