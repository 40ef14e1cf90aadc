use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/crm/brands";

/// Параметр области поиска: бренды выбранного контрагента
pub const SCOPE_CONTRACTOR_ID: &str = "contractor_id";

/// Бренд (CRM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: String,
    #[serde(default)]
    pub brand_name_en: String,
    #[serde(default)]
    pub brand_name_local: Option<String>,
    #[serde(default)]
    pub contractor_id: Option<String>,
}
