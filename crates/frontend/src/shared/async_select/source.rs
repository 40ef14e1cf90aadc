use super::controller::SearchSession;
use super::hook::{use_async_select, AsyncSelectHandle};
use super::http_port::HttpSearchPort;
use super::types::SelectOption;
use crate::shared::api_utils::ApiConfig;
use crate::shared::config::SelectConfig;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Настройка поля выбора для сущности: эндпоинт списка, область
/// по умолчанию и проекция элемента в вариант.
pub struct SelectSource<T> {
    pub endpoint: &'static str,
    pub scope: BTreeMap<String, String>,
    pub project: fn(&T) -> SelectOption,
}

impl<T> Clone for SelectSource<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint,
            scope: self.scope.clone(),
            project: self.project,
        }
    }
}

impl<T: DeserializeOwned + 'static> SelectSource<T> {
    pub fn new(endpoint: &'static str, project: fn(&T) -> SelectOption) -> Self {
        Self {
            endpoint,
            scope: BTreeMap::new(),
            project,
        }
    }

    pub fn with_scope(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scope.insert(key.into(), value.into());
        self
    }

    /// Новая сессия поверх HTTP; у каждого поля своя
    pub fn session(&self, config: &SelectConfig, api: ApiConfig) -> SearchSession<HttpSearchPort<T>> {
        let port = HttpSearchPort::new(api, self.endpoint).with_sort_order(config.sort_order);
        SearchSession::with_policy(port, config.page_size, config.duplicates, self.project)
            .with_scope(self.scope.clone())
    }
}

/// Сессия и сигналы для источника; `SelectConfig`/`ApiConfig` берутся
/// из контекста, если экран их предоставил.
pub fn use_source_select<T: DeserializeOwned + 'static>(source: SelectSource<T>) -> AsyncSelectHandle {
    let config = use_context::<SelectConfig>().unwrap_or_default();
    let api = use_context::<ApiConfig>().unwrap_or_default();
    let session = source.session(&config, api);
    use_async_select(session, &config)
}

/// Держит один параметр области в синхроне с родительским выбором
/// (например, подразделения выбранной организации).
pub fn bind_scope(handle: AsyncSelectHandle, key: &'static str, value: MaybeProp<String>) {
    Effect::new(move |_| {
        let value = value.get();
        handle.set_scope_value.run((key.to_string(), value));
    });
}

/// Первый непустой кандидат (с trim); `fallback`, если все пустые
///
/// Справочники часто приходят с пустым основным наименованием,
/// поэтому подпись берётся из запасных полей.
pub fn label_or(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_or_picks_first_non_blank() {
        assert_eq!(label_or(&[Some("  "), None, Some(" Acme ")], "x"), "Acme");
        assert_eq!(label_or(&[None, Some("")], "b-1"), "b-1");
    }

    #[test]
    fn test_session_starts_with_source_scope() {
        fn project(v: &serde_json::Value) -> SelectOption {
            SelectOption::new(v["id"].as_str().unwrap_or_default(), "")
        }
        let source = SelectSource::new("/api/departments", project).with_scope("company_id", "c-1");
        let session = source.session(&SelectConfig::default(), ApiConfig::with_base(""));

        let query = session.query();
        assert_eq!(query.text, "");
        assert_eq!(query.scope.get("company_id").map(String::as_str), Some("c-1"));
        assert!(!session.has_started());
    }
}
