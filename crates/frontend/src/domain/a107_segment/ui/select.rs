use crate::shared::async_select::{label_or, use_source_select, AsyncSelect, SelectOption, SelectSource};
use contracts::domain::a107_segment::dto::{Segment, ENDPOINT};
use leptos::prelude::*;

pub fn project(item: &Segment) -> SelectOption {
    SelectOption::new(
        item.segment_id.clone(),
        label_or(&[Some(item.segment_name.as_str())], &item.segment_id),
    )
}

pub fn source() -> SelectSource<Segment> {
    SelectSource::new(ENDPOINT, project)
}

#[component]
pub fn SegmentSelect(
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
            label="Сегмент"
            disabled=disabled
        />
    }
}
