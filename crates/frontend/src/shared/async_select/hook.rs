use super::controller::SearchSession;
use super::debounce::{Debouncer, TimerSleeper};
use super::error::SelectError;
use super::port::SearchPort;
use super::types::SelectOption;
use crate::shared::config::SelectConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Реактивная обёртка над [`SearchSession`] для компонентов выбора
#[derive(Clone, Copy)]
pub struct AsyncSelectHandle {
    pub options: ReadSignal<Vec<SelectOption>>,
    pub is_loading: ReadSignal<bool>,
    pub has_more: ReadSignal<bool>,
    /// Последняя ошибка загрузки (для уведомления); сбрасывается успешной загрузкой
    pub error: ReadSignal<Option<String>>,
    /// Ревизия области: при её смене поле сбрасывает показанный выбор
    pub scope_revision: ReadSignal<u64>,
    /// Порог подгрузки из [`SelectConfig`], px
    pub scroll_threshold_px: i32,
    pub on_input_change: Callback<String>,
    pub on_menu_scroll_to_bottom: Callback<()>,
    pub initialize_on_open: Callback<()>,
    pub refresh: Callback<()>,
    /// `(key, value)`; `None` убирает параметр
    pub set_scope_value: Callback<(String, Option<String>)>,
}

/// Связывает сессию с сигналами. Каждое действие идёт через `spawn_local`,
/// снимки сессии возвращаются через сигналы.
pub fn use_async_select<P>(session: SearchSession<P>, config: &SelectConfig) -> AsyncSelectHandle
where
    P: SearchPort + 'static,
{
    let (options, set_options) = signal(Vec::<SelectOption>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (has_more, set_has_more) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (scope_revision, set_scope_revision) = signal(session.scope_revision());

    session.subscribe(move |snapshot| {
        set_options.set(snapshot.options.clone());
        set_is_loading.set(snapshot.is_loading);
        set_has_more.set(snapshot.has_more);
        if scope_revision.get_untracked() != snapshot.scope_revision {
            set_scope_revision.set(snapshot.scope_revision);
        }
    });

    let report = move |result: Result<(), SelectError>| match result {
        Ok(()) => set_error.set(None),
        Err(err) => set_error.set(Some(err.user_message())),
    };

    let session_sv = StoredValue::new_local(session);
    let debouncer_sv = StoredValue::new_local(Rc::new(Debouncer::new(config.debounce, TimerSleeper)));

    let on_input_change = Callback::new(move |text: String| {
        let session = session_sv.get_value();
        let debouncer = debouncer_sv.get_value();
        spawn_local(async move {
            match session.on_query_changed_debounced(text, &*debouncer).await {
                // правка вытеснена: ошибку предыдущего поиска не трогаем
                Ok(None) => {}
                Ok(Some(_)) => report(Ok(())),
                Err(err) => report(Err(err)),
            }
        });
    });

    let on_menu_scroll_to_bottom = Callback::new(move |_: ()| {
        let session = session_sv.get_value();
        if session.is_loading() || !session.has_more() {
            return;
        }
        spawn_local(async move {
            let result = session.on_scroll_near_end().await;
            report(result.map(|_| ()));
        });
    });

    let initialize_on_open = Callback::new(move |_: ()| {
        let session = session_sv.get_value();
        if session.is_loading() {
            return;
        }
        spawn_local(async move {
            let result = session.on_open().await;
            report(result.map(|_| ()));
        });
    });

    let refresh = Callback::new(move |_: ()| {
        let session = session_sv.get_value();
        spawn_local(async move {
            let result = session.refresh().await;
            report(result.map(|_| ()));
        });
    });

    let set_scope_value = Callback::new(move |(key, value): (String, Option<String>)| {
        let session = session_sv.get_value();
        if !session.set_scope_value(&key, value) {
            return;
        }
        log::debug!("[AsyncSelect] scope {} changed", key);
        set_error.set(None);
        // поле ещё не открывали: при открытии загрузится с новой областью
        if session.has_started() {
            spawn_local(async move {
                let result = session.refresh().await;
                report(result.map(|_| ()));
            });
        }
    });

    AsyncSelectHandle {
        options,
        is_loading,
        has_more,
        error,
        scope_revision,
        scroll_threshold_px: config.scroll_threshold_px,
        on_input_change,
        on_menu_scroll_to_bottom,
        initialize_on_open,
        refresh,
        set_scope_value,
    }
}
