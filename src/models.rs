pub mod admin;
pub mod aluno;
pub mod auth;
pub mod curso;
pub mod disciplina;
pub mod professor;
pub mod turma;
pub mod user;

use validator::ValidationError;

// Matrícula institucional: maiúsculas e dígitos, mínimo 8 caracteres.
// Compartilhada por alunos e professores.
pub fn validate_matricula(value: &str) -> Result<(), ValidationError> {
    let ok = value.len() >= 8
        && value.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !ok {
        let mut err = ValidationError::new("matricula");
        err.message = Some(
            "Matrícula deve conter letras maiúsculas e números, mínimo 8 caracteres".into(),
        );
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matricula_valida() {
        assert!(validate_matricula("ALUNO12345").is_ok());
        assert!(validate_matricula("25A00001").is_ok());
        assert!(validate_matricula("25P00002").is_ok());
    }

    #[test]
    fn matricula_curta_ou_minuscula_falha() {
        assert!(validate_matricula("AB12").is_err());
        assert!(validate_matricula("aluno12345").is_err());
        assert!(validate_matricula("ALUNO 1234").is_err());
        assert!(validate_matricula("").is_err());
    }
}
