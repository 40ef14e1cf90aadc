use crate::shared::api_utils::ApiConfig;
use crate::shared::config::SelectConfig;
use crate::usecases::u101_directory_lookup::DirectoryLookup;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // API base and select settings for every lookup field on the page
    provide_context(ApiConfig::from_window());
    provide_context(SelectConfig::default());

    view! {
        <DirectoryLookup />
    }
}
