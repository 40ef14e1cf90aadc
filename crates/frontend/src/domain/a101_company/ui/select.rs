use crate::shared::async_select::{label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a101_company::dto::{Company, ENDPOINT};
use leptos::prelude::*;

pub fn project(item: &Company) -> SelectOption {
    let name = label_or(&[Some(item.company_name.as_str())], &item.company_id);
    let label = match item.company_code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => format!("{} ({})", name, code),
        _ => name,
    };
    SelectOption::new(item.company_id.clone(), label)
}

pub fn source() -> SelectSource<Company> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn CompanySelect(
    #[prop(into)]
    on_select: Callback<Option<SelectOption>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let handle = use_source_select(source());

    view! {
        <AsyncSelect
            handle=handle
            on_select=on_select
            label="Компания"
            disabled=disabled
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, code: Option<&str>) -> Company {
        Company {
            company_id: "c-1".into(),
            company_name: name.into(),
            company_code: code.map(Into::into),
            updated_at: None,
        }
    }

    #[test]
    fn test_project_appends_code() {
        assert_eq!(project(&company("Acme", Some("AC"))).label, "Acme (AC)");
        assert_eq!(project(&company("Acme", Some(" "))).label, "Acme");
        assert_eq!(project(&company("", None)).label, "c-1");
        assert_eq!(project(&company("Acme", None)).value, "c-1");
    }
}
