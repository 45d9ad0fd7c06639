// Parâmetros e envelope de paginação usados por todos os recursos.
//
// Query string aceita: ?page=1&perPage=15&sort=createdAt&sortDir=desc
// A resposta devolve o total, o total de páginas (ceil) e a fatia pedida.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

// Query params podem chegar como string vazia (?page=); tratamos como ausente.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    // Página 1-indexada (default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[param(value_type = Option<i64>)]
    pub page: Option<i64>,
    // Itens por página (1-100, default: 15)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[param(value_type = Option<i64>)]
    pub per_page: Option<i64>,
    // Campo de ordenação (default: createdAt). Cada recurso valida contra
    // a sua própria lista de colunas permitidas.
    pub sort: Option<String>,
    // "asc" ou "desc" (default: desc)
    pub sort_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

impl PaginationParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(15).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }

    pub fn sort_dir(&self) -> SortDir {
        match self.sort_dir.as_deref() {
            Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }
}

// totalPages = ceil(total / perPage); perPage já chega normalizado (>= 1).
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    (total + per_page - 1) / per_page
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(total: i64, params: &PaginationParams, data: Vec<T>) -> Self {
        let per_page = params.per_page();
        Self {
            total,
            total_pages: total_pages(total, per_page),
            current_page: params.page(),
            per_page,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.sort_dir(), SortDir::Desc);
    }

    #[test]
    fn pagina_e_per_page_sao_normalizados() {
        let params = PaginationParams {
            page: Some(0),
            per_page: Some(0),
            ..Default::default()
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 1);

        let params = PaginationParams {
            page: Some(-3),
            per_page: Some(500),
            ..Default::default()
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 100);
    }

    #[test]
    fn offset_segue_a_pagina() {
        let params = PaginationParams {
            page: Some(3),
            per_page: Some(15),
            ..Default::default()
        };
        assert_eq!(params.offset(), 30);
    }

    #[test]
    fn sort_dir_aceita_asc_em_qualquer_caixa() {
        for dir in ["asc", "ASC", "Asc"] {
            let params = PaginationParams {
                sort_dir: Some(dir.to_string()),
                ..Default::default()
            };
            assert_eq!(params.sort_dir(), SortDir::Asc);
        }

        let params = PaginationParams {
            sort_dir: Some("sideways".to_string()),
            ..Default::default()
        };
        assert_eq!(params.sort_dir(), SortDir::Desc);
    }

    #[test]
    fn total_pages_eh_ceil() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(1, 15), 1);
        assert_eq!(total_pages(15, 15), 1);
        assert_eq!(total_pages(16, 15), 2);
        assert_eq!(total_pages(45, 15), 3);
        assert_eq!(total_pages(46, 15), 4);
    }

    #[test]
    fn envelope_calcula_total_pages() {
        let params = PaginationParams {
            page: Some(4),
            per_page: Some(10),
            ..Default::default()
        };
        // Página além do fim: data vazia, não é erro.
        let resp: PaginatedResponse<i32> = PaginatedResponse::new(25, &params, vec![]);
        assert_eq!(resp.total, 25);
        assert_eq!(resp.total_pages, 3);
        assert_eq!(resp.current_page, 4);
        assert_eq!(resp.per_page, 10);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn query_string_vazia_usa_defaults() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"","perPage":""}"#).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
    }
}
