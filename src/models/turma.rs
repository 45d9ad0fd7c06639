use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mapeia o CREATE TYPE turno do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "turno", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Turno {
    Matutino,
    Vespertino,
    Noturno,
}

// Mapeia o CREATE TYPE modalidade do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "modalidade", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Modalidade {
    Presencial,
    Ead,
    Hibrido,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Turma {
    pub id: Uuid,
    pub codigo: String,
    pub semestre: String,
    pub turno: Turno,
    pub modalidade: Modalidade,
    pub curso_id: Uuid,
    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTurmaPayload {
    #[validate(length(min = 1, message = "O código é obrigatório."))]
    #[schema(example = "TURMA2023-1")]
    pub codigo: String,

    #[validate(length(min = 1, message = "O semestre é obrigatório."))]
    #[schema(example = "2023.1")]
    pub semestre: String,

    pub turno: Turno,

    pub modalidade: Modalidade,

    pub curso_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTurmaPayload {
    #[validate(length(min = 1, message = "O código não pode ser vazio."))]
    pub codigo: Option<String>,

    #[validate(length(min = 1, message = "O semestre não pode ser vazio."))]
    pub semestre: Option<String>,

    pub turno: Option<Turno>,

    pub modalidade: Option<Modalidade>,

    pub curso_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serializam_em_maiusculas() {
        assert_eq!(serde_json::to_string(&Turno::Matutino).unwrap(), r#""MATUTINO""#);
        assert_eq!(serde_json::to_string(&Turno::Vespertino).unwrap(), r#""VESPERTINO""#);
        assert_eq!(serde_json::to_string(&Modalidade::Ead).unwrap(), r#""EAD""#);
        assert_eq!(serde_json::to_string(&Modalidade::Hibrido).unwrap(), r#""HIBRIDO""#);
    }

    #[test]
    fn valor_fora_do_enum_falha() {
        let result: Result<Turno, _> = serde_json::from_str(r#""MADRUGADA""#);
        assert!(result.is_err());
    }
}
