use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/positions";

/// Должность
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub position_id: String,
    pub position_name: String,
    #[serde(default)]
    pub position_code: Option<String>,
}
