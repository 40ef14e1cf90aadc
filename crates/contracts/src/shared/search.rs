use crate::enums::SortOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Запрос к постраничному поисковому эндпоинту (`GET /api/<entity>?search=...&page=...`)
///
/// `page` считается с 1. Дополнительные параметры области поиска
/// (`company_id`, `contractor_id`, ...) передаются плоско рядом с основными.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(flatten)]
    pub scope: BTreeMap<String, String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: default_page(),
            limit: default_limit(),
            sort_order: SortOrder::default(),
            scope: BTreeMap::new(),
        }
    }
}

impl SearchRequest {
    pub fn new(search: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            search: search.into(),
            page: page.max(1),
            limit: limit.max(1),
            ..Default::default()
        }
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Добавляет параметр области поиска; пустые значения не передаются
    pub fn with_scope(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.scope.insert(key.into(), value);
        }
        self
    }

    /// Плоский набор параметров для query string.
    ///
    /// Пустой `search` опускается: сервер трактует его отсутствие как "без фильтра".
    /// Основные параметры имеют приоритет над одноимёнными ключами области.
    pub fn to_query_pairs(&self) -> BTreeMap<String, String> {
        let mut pairs: BTreeMap<String, String> = self
            .scope
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let search = self.search.trim();
        if search.is_empty() {
            pairs.remove("search");
        } else {
            pairs.insert("search".to_string(), search.to_string());
        }
        pairs.insert("page".to_string(), self.page.to_string());
        pairs.insert("limit".to_string(), self.limit.to_string());
        pairs.insert("sort_order".to_string(), self.sort_order.code().to_string());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_page_and_limit() {
        let req = SearchRequest::new("acme", 0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn test_query_pairs_skip_empty_search_and_scope() {
        let req = SearchRequest::new("  ", 2, 20)
            .with_scope("company_id", "c-1")
            .with_scope("department_id", "");
        let pairs = req.to_query_pairs();

        assert!(!pairs.contains_key("search"));
        assert!(!pairs.contains_key("department_id"));
        assert_eq!(pairs.get("company_id").map(String::as_str), Some("c-1"));
        assert_eq!(pairs.get("page").map(String::as_str), Some("2"));
        assert_eq!(pairs.get("limit").map(String::as_str), Some("20"));
        assert_eq!(pairs.get("sort_order").map(String::as_str), Some("asc"));
    }

    #[test]
    fn test_core_params_win_over_scope() {
        let req = SearchRequest::new("acme", 3, 10).with_scope("page", "99");
        let pairs = req.to_query_pairs();
        assert_eq!(pairs.get("page").map(String::as_str), Some("3"));
        assert_eq!(pairs.get("search").map(String::as_str), Some("acme"));
    }

    #[test]
    fn test_deserialize_flattened_scope() {
        let json = r#"{"search":"a","page":2,"limit":5,"sort_order":"desc","company_id":"c-7"}"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.sort_order, SortOrder::Desc);
        assert_eq!(req.scope.get("company_id").map(String::as_str), Some("c-7"));
    }
}
