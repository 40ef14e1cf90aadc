use crate::shared::async_select::{bind_scope, label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a103_employee::dto::{Employee, ENDPOINT, SCOPE_COMPANY_ID, SCOPE_DEPARTMENT_ID};
use leptos::prelude::*;

pub fn project(item: &Employee) -> SelectOption {
    let name = item.full_name();
    let label = match (name.is_empty(), item.email.as_deref()) {
        (false, _) => name,
        (true, email) => label_or(&[email], &item.employee_id),
    };
    SelectOption::new(item.employee_id.clone(), label)
}

pub fn source() -> SelectSource<Employee> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn EmployeeSelect(
    #[prop(into)]
    on_select: Callback<Option<SelectOption>>,
    /// Значение параметра `company_id` (выбор в родительском поле)
    #[prop(optional, into)]
    company_id: MaybeProp<String>,
    /// Значение параметра `department_id` (выбор в родительском поле)
    #[prop(optional, into)]
    department_id: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let handle = use_source_select(source());
    bind_scope(handle, SCOPE_COMPANY_ID, company_id);
    bind_scope(handle, SCOPE_DEPARTMENT_ID, department_id);

    view! {
        <AsyncSelect
            handle=handle
            on_select=on_select
            label="Сотрудник"
            disabled=disabled
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(first: &str, last: &str, email: Option<&str>) -> Employee {
        Employee {
            employee_id: "e-1".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: email.map(Into::into),
            company_id: "c-1".into(),
            department_id: None,
            position_id: None,
        }
    }

    #[test]
    fn test_project_prefers_full_name_then_email() {
        assert_eq!(project(&employee("Anna", "Petrova", None)).label, "Petrova Anna");
        assert_eq!(project(&employee("", "", Some("a@x.io"))).label, "a@x.io");
        assert_eq!(project(&employee("", "", None)).label, "e-1");
    }
}
