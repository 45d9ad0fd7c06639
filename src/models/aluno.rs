use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aluno {
    pub id: Uuid,
    pub matricula: String,
    pub nome_completo: String,
    pub data_nascimento: NaiveDate,
    // FK para cursos(id); a coluna chama-se "curso" no banco.
    pub curso: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password: String,

    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlunoPayload {
    #[validate(custom(function = "crate::models::validate_matricula"))]
    #[schema(example = "ALUNO12345")]
    pub matricula: String,

    #[validate(length(min = 1, message = "O nome completo é obrigatório."))]
    #[schema(example = "Maria Oliveira")]
    pub nome_completo: String,

    #[schema(value_type = String, format = Date, example = "2005-05-15")]
    pub data_nascimento: NaiveDate,

    pub curso: Uuid,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "maria.oliveira@escola.com")]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    #[schema(example = "senhaSegura123")]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlunoPayload {
    #[validate(custom(function = "crate::models::validate_matricula"))]
    pub matricula: Option<String>,

    #[validate(length(min = 1, message = "O nome completo não pode ser vazio."))]
    pub nome_completo: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data_nascimento: Option<NaiveDate>,

    pub curso: Option<Uuid>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_valido_passa() {
        let json = r#"{
            "matricula": "ALUNO12345",
            "nomeCompleto": "Maria Oliveira",
            "dataNascimento": "2005-05-15",
            "curso": "550e8400-e29b-41d4-a716-446655440000",
            "email": "maria.oliveira@escola.com",
            "password": "senhaSegura123"
        }"#;
        let payload: CreateAlunoPayload = serde_json::from_str(json).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn data_invalida_nao_deserializa() {
        let json = r#"{
            "matricula": "ALUNO12345",
            "nomeCompleto": "Maria Oliveira",
            "dataNascimento": "15/05/2005",
            "curso": "550e8400-e29b-41d4-a716-446655440000",
            "email": "maria.oliveira@escola.com",
            "password": "senhaSegura123"
        }"#;
        let result: Result<CreateAlunoPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn email_e_senha_sao_validados() {
        let json = r#"{
            "matricula": "ALUNO12345",
            "nomeCompleto": "Maria Oliveira",
            "dataNascimento": "2005-05-15",
            "curso": "550e8400-e29b-41d4-a716-446655440000",
            "email": "nao-eh-email",
            "password": "123"
        }"#;
        let payload: CreateAlunoPayload = serde_json::from_str(json).unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
