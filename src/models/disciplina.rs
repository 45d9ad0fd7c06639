use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Disciplina {
    pub id: Uuid,
    pub codigo: String,
    pub nome: String,
    pub descricao: String,
    pub carga_horaria: i32,
    pub periodo: String,
    pub curso_id: Uuid,
    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisciplinaPayload {
    #[validate(length(min = 1, message = "O código é obrigatório."))]
    #[schema(example = "GEO001")]
    pub codigo: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Climatologia")]
    pub nome: String,

    #[schema(example = "Definido pelo professor")]
    pub descricao: Option<String>,

    #[validate(range(min = 1, message = "A carga horária deve ser positiva."))]
    #[schema(example = 66)]
    pub carga_horaria: i32,

    #[validate(length(min = 1, message = "O período é obrigatório."))]
    #[schema(example = "2")]
    pub periodo: String,

    pub curso_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDisciplinaPayload {
    #[validate(length(min = 1, message = "O código não pode ser vazio."))]
    pub codigo: Option<String>,

    #[validate(length(min = 1, message = "O nome não pode ser vazio."))]
    pub nome: Option<String>,

    pub descricao: Option<String>,

    #[validate(range(min = 1, message = "A carga horária deve ser positiva."))]
    pub carga_horaria: Option<i32>,

    #[validate(length(min = 1, message = "O período não pode ser vazio."))]
    pub periodo: Option<String>,

    pub curso_id: Option<Uuid>,
}
