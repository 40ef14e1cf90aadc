use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/api/employees";

pub const SCOPE_COMPANY_ID: &str = "company_id";
pub const SCOPE_DEPARTMENT_ID: &str = "department_id";

/// Сотрудник
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub company_id: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
}

impl Employee {
    /// "Фамилия Имя" без лишних пробелов, если одно из полей пустое
    pub fn full_name(&self) -> String {
        [self.last_name.trim(), self.first_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(first: &str, last: &str) -> Employee {
        Employee {
            employee_id: "e-1".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: None,
            company_id: "c-1".into(),
            department_id: None,
            position_id: None,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(employee("Anna", "Petrova").full_name(), "Petrova Anna");
        assert_eq!(employee("Anna", " ").full_name(), "Anna");
        assert_eq!(employee("", "").full_name(), "");
    }
}
