use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/crm/contractors";

/// Контрагент (CRM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub contractor_id: String,
    pub contractor_name: String,
    #[serde(default)]
    pub tax_id: Option<String>,
}
