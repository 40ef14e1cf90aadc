use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Путь списочного эндпоинта компаний
pub const ENDPOINT: &str = "/api/companies";

/// Компания (элемент списка для выбора)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: String,
    pub company_name: String,
    #[serde(default)]
    pub company_code: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
