use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/roles";

/// Роль пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: String,
    pub role_name: String,
    #[serde(default)]
    pub description: Option<String>,
}
