use crate::shared::async_select::{bind_scope, label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a102_department::dto::{Department, ENDPOINT, SCOPE_COMPANY_ID};
use leptos::prelude::*;

pub fn project(item: &Department) -> SelectOption {
    SelectOption::new(
        item.department_id.clone(),
        label_or(&[Some(item.department_name.as_str())], &item.department_id),
    )
}

pub fn source() -> SelectSource<Department> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn DepartmentSelect(
    #[prop(into)]
    on_select: Callback<Option<SelectOption>>,
    /// Значение параметра `company_id` (выбор в родительском поле)
    #[prop(optional, into)]
    company_id: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let handle = use_source_select(source());
    bind_scope(handle, SCOPE_COMPANY_ID, company_id);

    view! {
        <AsyncSelect
            handle=handle
            on_select=on_select
            label="Подразделение"
            disabled=disabled
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_uses_name() {
        let item = Department {
            department_id: "d-1".into(),
            department_name: " Sales ".into(),
            company_id: "c-1".into(),
            parent_department_id: None,
        };
        assert_eq!(project(&item), SelectOption::new("d-1", "Sales"));
    }
}
