use crate::shared::async_select::{label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a105_position::dto::{Position, ENDPOINT};
use leptos::prelude::*;

pub fn project(item: &Position) -> SelectOption {
    SelectOption::new(
        item.position_id.clone(),
        label_or(&[Some(item.position_name.as_str()), item.position_code.as_deref()], &item.position_id),
    )
}

pub fn source() -> SelectSource<Position> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn PositionSelect(
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
            label="Должность"
            disabled=disabled
        />
    }
}
