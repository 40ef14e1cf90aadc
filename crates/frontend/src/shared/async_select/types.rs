use super::error::SelectError;
use contracts::enums::SortOrder;
use contracts::shared::search::SearchRequest;
use std::collections::BTreeMap;

/// Вариант выпадающего списка: непрозрачное значение и отображаемый текст
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Текстовый фильтр плюс параметры области, заданные вызывающим.
///
/// Два запроса совпадают, только если совпадают и текст, и область.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub scope: BTreeMap<String, String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: BTreeMap::new(),
        }
    }

    pub fn with_scope(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scope.insert(key.into(), value.into());
        self
    }

    /// Устанавливает или убирает один параметр области. `true`, если значение изменилось
    pub fn set_scope_value(&mut self, key: &str, value: Option<String>) -> bool {
        let value = value.filter(|v| !v.trim().is_empty());
        match value {
            Some(v) => self.scope.insert(key.to_string(), v.clone()).as_ref() != Some(&v),
            None => self.scope.remove(key).is_some(),
        }
    }

    pub fn to_request(&self, page: PageRequest, sort_order: SortOrder) -> SearchRequest {
        let mut request = SearchRequest::new(self.text.clone(), page.index, page.size)
            .with_sort_order(sort_order);
        for (key, value) in &self.scope {
            request = request.with_scope(key.clone(), value.clone());
        }
        request
    }
}

/// Номер страницы (с 1) и размер страницы, постоянный для сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub index: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn first(size: u32) -> Self {
        Self {
            index: 1,
            size: size.max(1),
        }
    }

    pub fn next(self) -> Self {
        Self {
            index: self.index + 1,
            size: self.size,
        }
    }
}

/// Проверенная страница сырых элементов от [`super::SearchPort`]
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    /// Проверяет номера страниц, которые вернул сервер.
    ///
    /// Пустой результат часто приходит с `totalPages = 0`; он приводится
    /// к одной (пустой) странице, чтобы после любого успешного ответа
    /// выполнялось `total_pages >= 1`.
    pub fn new(items: Vec<T>, page_index: u32, total_pages: u32) -> Result<Self, SelectError> {
        if page_index == 0 {
            return Err(SelectError::MalformedResponse(
                "page index must start at 1".to_string(),
            ));
        }
        let total_pages = total_pages.max(1);
        if page_index > total_pages && !items.is_empty() {
            return Err(SelectError::MalformedResponse(format!(
                "page {} is beyond totalPages {}",
                page_index, total_pages
            )));
        }
        Ok(Self {
            items,
            page_index: page_index.min(total_pages),
            total_pages,
        })
    }

    pub fn map<U>(self, f: impl FnMut(&T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.iter().map(f).collect(),
            page_index: self.page_index,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_result_normalises_empty_total() {
        let page: PageResult<u8> = PageResult::new(vec![], 1, 0).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_index, 1);
    }

    #[test]
    fn test_page_result_rejects_invalid_pages() {
        assert!(matches!(
            PageResult::new(vec![1u8], 0, 3),
            Err(SelectError::MalformedResponse(_))
        ));
        assert!(matches!(
            PageResult::new(vec![1u8], 4, 3),
            Err(SelectError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_page_result_tolerates_empty_page_past_the_end() {
        // строки удалили между двумя запросами страниц
        let page: PageResult<u8> = PageResult::new(vec![], 3, 2).unwrap();
        assert_eq!(page.page_index, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_scope_value_change_detection() {
        let mut query = SearchQuery::new("acme");
        assert!(query.set_scope_value("company_id", Some("c-1".into())));
        assert!(!query.set_scope_value("company_id", Some("c-1".into())));
        assert!(query.set_scope_value("company_id", Some("c-2".into())));
        assert!(query.set_scope_value("company_id", None));
        assert!(!query.set_scope_value("company_id", Some("   ".into())));
    }

    #[test]
    fn test_to_request_carries_scope_and_paging() {
        let query = SearchQuery::new("acme").with_scope("company_id", "c-1");
        let request = query.to_request(PageRequest::first(20).next(), SortOrder::Desc);
        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 20);
        assert_eq!(request.sort_order, SortOrder::Desc);
        assert_eq!(request.scope.get("company_id").map(String::as_str), Some("c-1"));
    }
}
