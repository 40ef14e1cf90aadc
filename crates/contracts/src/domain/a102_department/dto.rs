use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/departments";

/// Параметр области поиска: подразделения выбранной компании
pub const SCOPE_COMPANY_ID: &str = "company_id";

/// Подразделение компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: String,
    pub department_name: String,
    pub company_id: String,
    #[serde(default)]
    pub parent_department_id: Option<String>,
}
