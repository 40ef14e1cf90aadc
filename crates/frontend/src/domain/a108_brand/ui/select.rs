use crate::shared::async_select::{bind_scope, label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a108_brand::dto::{Brand, ENDPOINT, SCOPE_CONTRACTOR_ID};
use leptos::prelude::*;

pub fn project(item: &Brand) -> SelectOption {
    SelectOption::new(
        item.brand_id.clone(),
        label_or(&[Some(item.brand_name_en.as_str()), item.brand_name_local.as_deref()], &item.brand_id),
    )
}

pub fn source() -> SelectSource<Brand> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn BrandSelect(
    #[prop(into)]
    on_select: Callback<Option<SelectOption>>,
    /// Значение параметра `contractor_id` (выбор в родительском поле)
    #[prop(optional, into)]
    contractor_id: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let handle = use_source_select(source());
    bind_scope(handle, SCOPE_CONTRACTOR_ID, contractor_id);

    view! {
        <AsyncSelect
            handle=handle
            on_select=on_select
            label="Бренд"
            disabled=disabled
        />
    }
}
