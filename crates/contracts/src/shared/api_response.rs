use serde::{Deserialize, Serialize};

/// Блок пагинации в ответе списочного эндпоинта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Конверт ответа API: `{ success, data, pagination }` либо `{ success: false, message }`
///
/// Поля `data` и `pagination` опциональны на уровне десериализации, чтобы
/// ответ с ошибкой (и ответ с неполной структурой) разбирался без паники;
/// проверка формы выполняется на стороне клиента.
/// Отсутствующий `Option` serde и так читает как `None`; `#[serde(default)]`
/// здесь не ставим, иначе derive требует `T: Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiListResponse<T> {
    pub success: bool,
    pub data: Option<Vec<T>>,
    pub pagination: Option<Pagination>,
    pub message: Option<String>,
}

impl<T> ApiListResponse<T> {
    pub fn ok(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            data: Some(data),
            pagination: Some(pagination),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            pagination: None,
            message: Some(message.into()),
        }
    }

    /// Текст ошибки для показа пользователю
    pub fn error_message(&self) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("Unknown server error")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_envelope() {
        let body = json!({
            "success": true,
            "data": [{"id": "1"}, {"id": "2"}],
            "pagination": {"page": 1, "limit": 20, "total": 45, "totalPages": 3}
        });
        let resp: ApiListResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.as_ref().map(Vec::len), Some(2));
        let p = resp.pagination.unwrap();
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.total, 45);
    }

    #[test]
    fn test_parse_failure_envelope() {
        let body = json!({"success": false, "message": "Forbidden"});
        let resp: ApiListResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert!(resp.pagination.is_none());
        assert_eq!(resp.error_message(), "Forbidden");
    }

    #[test]
    fn test_parse_envelope_of_entity_rows() {
        use crate::domain::a108_brand::dto::Brand;

        let body = json!({
            "success": true,
            "data": [{
                "brand_id": "b-1",
                "brand_name_en": "Acme",
                "brand_name_local": "Акме",
                "contractor_id": "c-7"
            }],
            "pagination": {"page": 1, "limit": 20, "total": 1, "totalPages": 1}
        });
        let resp: ApiListResponse<Brand> = serde_json::from_value(body).unwrap();
        let rows = resp.data.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].brand_id, "b-1");

        let failed: ApiListResponse<Brand> =
            serde_json::from_value(json!({"success": false})).unwrap();
        assert!(failed.data.is_none());
        assert_eq!(failed.error_message(), "Unknown server error");
    }

    #[test]
    fn test_blank_message_falls_back() {
        let resp: ApiListResponse<()> = ApiListResponse::error("  ");
        assert_eq!(resp.error_message(), "Unknown server error");
    }

    #[test]
    fn test_pagination_uses_camel_case_total_pages() {
        let json = serde_json::to_value(Pagination { page: 2, limit: 10, total: 11, total_pages: 2 }).unwrap();
        assert_eq!(json["totalPages"], 2);
    }
}
