use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::disciplina::Disciplina;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id: Uuid,
    pub codigo: String,
    pub nome: String,
    pub descricao: String,
    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Item da listagem: cada curso sai com as suas disciplinas embutidas.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CursoComDisciplinas {
    #[serde(flatten)]
    pub curso: Curso,
    pub disciplinas: Vec<Disciplina>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCursoPayload {
    #[validate(length(min = 1, message = "O código é obrigatório."))]
    #[schema(example = "MAT")]
    pub codigo: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Matemática")]
    pub nome: String,

    #[schema(example = "Introdução à matemática elementar")]
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCursoPayload {
    #[validate(length(min = 1, message = "O código não pode ser vazio."))]
    pub codigo: Option<String>,

    #[validate(length(min = 1, message = "O nome não pode ser vazio."))]
    pub nome: Option<String>,

    pub descricao: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn curso() -> Curso {
        Curso {
            id: Uuid::new_v4(),
            codigo: "GEO".into(),
            nome: "Geografia".into(),
            descricao: "".into(),
            admin_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn listagem_embute_as_disciplinas_no_proprio_curso() {
        let curso = curso();
        let disciplina = Disciplina {
            id: Uuid::new_v4(),
            codigo: "GEO001".into(),
            nome: "Climatologia".into(),
            descricao: "".into(),
            carga_horaria: 66,
            periodo: "2".into(),
            curso_id: curso.id,
            admin_id: curso.admin_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let item = CursoComDisciplinas {
            curso,
            disciplinas: vec![disciplina],
        };

        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        // Campos do curso ficam no nível de cima, não aninhados.
        assert_eq!(json["codigo"], "GEO");
        assert!(json.get("curso").is_none());
        assert_eq!(json["disciplinas"][0]["codigo"], "GEO001");
        assert_eq!(json["disciplinas"][0]["cargaHoraria"], 66);
    }

    #[test]
    fn curso_sem_disciplinas_sai_com_lista_vazia() {
        let item = CursoComDisciplinas {
            curso: curso(),
            disciplinas: vec![],
        };
        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert!(json["disciplinas"].as_array().unwrap().is_empty());
    }
}
