use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: Uuid,
    pub matricula: String,
    pub nome_completo: String,
    pub data_nascimento: NaiveDate,
    pub especialidade: String,
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
pub struct CreateProfessorPayload {
    #[validate(custom(function = "crate::models::validate_matricula"))]
    #[schema(example = "25P00001")]
    pub matricula: String,

    #[validate(length(min = 1, message = "O nome completo é obrigatório."))]
    #[schema(example = "Ana Silva")]
    pub nome_completo: String,

    #[schema(value_type = String, format = Date, example = "1980-05-15")]
    pub data_nascimento: NaiveDate,

    #[validate(length(min = 1, message = "A especialidade é obrigatória."))]
    #[schema(example = "Matemática")]
    pub especialidade: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "ana.silva@escola.com")]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    #[schema(example = "senhaSegura123")]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfessorPayload {
    #[validate(custom(function = "crate::models::validate_matricula"))]
    pub matricula: Option<String>,

    #[validate(length(min = 1, message = "O nome completo não pode ser vazio."))]
    pub nome_completo: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data_nascimento: Option<NaiveDate>,

    #[validate(length(min = 1, message = "A especialidade não pode ser vazia."))]
    pub especialidade: Option<String>,

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
        let payload = CreateProfessorPayload {
            matricula: "25P00001".into(),
            nome_completo: "Ana Silva".into(),
            data_nascimento: NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(),
            especialidade: "Matemática".into(),
            email: "ana.silva@escola.com".into(),
            password: "senhaSegura123".into(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn matricula_invalida_falha() {
        let payload = CreateProfessorPayload {
            matricula: "abc".into(),
            nome_completo: "Ana Silva".into(),
            data_nascimento: NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(),
            especialidade: "Matemática".into(),
            email: "ana.silva@escola.com".into(),
            password: "senhaSegura123".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("matricula"));
    }

    #[test]
    fn patch_vazio_eh_valido() {
        let payload: UpdateProfessorPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.validate().is_ok());
    }
}
