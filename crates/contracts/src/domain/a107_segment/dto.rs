use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/crm/segments";

/// Сегмент клиентов (CRM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub segment_id: String,
    pub segment_name: String,
}
