use crate::shared::async_select::{label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a106_contractor::dto::{Contractor, ENDPOINT};
use leptos::prelude::*;

pub fn project(item: &Contractor) -> SelectOption {
    let name = label_or(&[Some(item.contractor_name.as_str())], &item.contractor_id);
    let label = match item.tax_id.as_deref().map(str::trim) {
        Some(tax_id) if !tax_id.is_empty() => format!("{} — ИНН {}", name, tax_id),
        _ => name,
    };
    SelectOption::new(item.contractor_id.clone(), label)
}

pub fn source() -> SelectSource<Contractor> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn ContractorSelect(
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
            label="Контрагент"
            disabled=disabled
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_appends_tax_id() {
        let item = Contractor {
            contractor_id: "k-1".into(),
            contractor_name: "Acme".into(),
            tax_id: Some("7701".into()),
        };
        assert_eq!(project(&item).label, "Acme — ИНН 7701");
    }
}
