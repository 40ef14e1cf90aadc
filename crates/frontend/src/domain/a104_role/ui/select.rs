use crate::shared::async_select::{label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a104_role::dto::{Role, ENDPOINT};
use leptos::prelude::*;

pub fn project(item: &Role) -> SelectOption {
    SelectOption::new(
        item.role_id.clone(),
        label_or(&[Some(item.role_name.as_str()), item.description.as_deref()], &item.role_id),
    )
}

pub fn source() -> SelectSource<Role> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn RoleSelect(
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
            label="Роль"
            disabled=disabled
        />
    }
}
