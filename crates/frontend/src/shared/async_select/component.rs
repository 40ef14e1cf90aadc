use super::hook::AsyncSelectHandle;
use super::types::SelectOption;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Прокручен ли список до зоны подгрузки следующей страницы
pub fn is_near_bottom(scroll_top: i32, client_height: i32, scroll_height: i32, threshold: i32) -> bool {
    scroll_top + client_height >= scroll_height - threshold.max(0)
}

/// Порог подгрузки: явный prop поля важнее настройки экрана
pub fn effective_threshold(prop_px: Option<i32>, configured_px: i32) -> i32 {
    prop_px.unwrap_or(configured_px).max(0)
}

/// Нужно ли сбросить показанный выбор: область поменялась после
/// первого запуска эффекта
pub fn scope_changed(previous: Option<u64>, current: u64) -> bool {
    previous.is_some_and(|p| p != current)
}

/// Выпадающий список с серверным поиском и подгрузкой страниц при прокрутке
///
/// - фокус открывает список и загружает первую страницу (один раз)
/// - смена области (родительского выбора) очищает выбранное значение
/// - ввод текста перезапускает поиск (с debounce)
/// - прокрутка к концу подгружает следующую страницу
#[component]
pub fn AsyncSelect(
    handle: AsyncSelectHandle,
    /// Callback при выборе (None — выбор очищен)
    #[prop(into)]
    on_select: Callback<Option<SelectOption>>,
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    scroll_threshold_px: Option<i32>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let threshold = effective_threshold(scroll_threshold_px, handle.scroll_threshold_px);
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let (is_open, set_is_open) = signal(false);
    let (selected, set_selected) = signal(Option::<SelectOption>::None);

    let is_disabled = move || disabled.get().unwrap_or(false);

    // выбор из прежней области недействителен; родитель уже сбросил своё
    // значение, поэтому on_select здесь не вызываем
    Effect::new(move |previous: Option<u64>| {
        let revision = handle.scope_revision.get();
        if scope_changed(previous, revision) {
            set_input_value.set(String::new());
            set_selected.set(None);
        }
        revision
    });

    let open_menu = move || {
        if disabled.get_untracked().unwrap_or(false) {
            return;
        }
        set_is_open.set(true);
        handle.initialize_on_open.run(());
    };

    let choose = move |option: SelectOption| {
        log!("[AsyncSelect] selected {}", option.value);
        set_input_value.set(option.label.clone());
        set_selected.set(Some(option.clone()));
        set_is_open.set(false);
        on_select.run(Some(option));
    };

    let clear = move || {
        set_input_value.set(String::new());
        set_selected.set(None);
        on_select.run(None);
        handle.on_input_change.run(String::new());
    };

    let handle_scroll = move |ev: web_sys::Event| {
        let element = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        if let Some(el) = element {
            if is_near_bottom(el.scroll_top(), el.client_height(), el.scroll_height(), threshold) {
                handle.on_menu_scroll_to_bottom.run(());
            }
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small class="async-select">
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <div class="async-select__control">
                <input
                    type="text"
                    class="async-select__input"
                    placeholder=placeholder
                    disabled=is_disabled
                    prop:value=move || input_value.get()
                    on:focus=move |_| open_menu()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_input_value.set(value.clone());
                        set_is_open.set(true);
                        handle.on_input_change.run(value);
                    }
                    on:blur=move |_| set_is_open.set(false)
                />
                <Show when=move || !input_value.get().is_empty() || selected.get().is_some()>
                    <button
                        class="async-select__clear"
                        title="Очистить"
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            clear();
                        }
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <Show when=move || is_open.get()>
                <div class="async-select__menu" on:scroll=handle_scroll>
                    {move || {
                        let options = handle.options.get();
                        if options.is_empty() && !handle.is_loading.get() {
                            view! { <div class="async-select__empty">"Нет данных"</div> }.into_any()
                        } else {
                            options
                                .into_iter()
                                .map(move |option| {
                                    let value = option.value.clone();
                                    let label = option.label.clone();
                                    view! {
                                        <div
                                            class="async-select__option"
                                            class:selected=move || {
                                                selected.get().map(|s| s.value == value).unwrap_or(false)
                                            }
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                choose(option.clone());
                                            }
                                        >
                                            {label}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                    <Show when=move || handle.is_loading.get()>
                        <div class="async-select__loading">"Загрузка..."</div>
                    </Show>
                    {move || handle.error.get().map(|err| view! {
                        <div class="async-select__error">{err}</div>
                    })}
                </div>
            </Show>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_bottom_detection() {
        // список 1000px, окно 200px
        assert!(!is_near_bottom(0, 200, 1000, 48));
        assert!(!is_near_bottom(700, 200, 1000, 48));
        assert!(is_near_bottom(752, 200, 1000, 48));
        assert!(is_near_bottom(800, 200, 1000, 48));
    }

    #[test]
    fn test_negative_threshold_means_exact_bottom() {
        assert!(!is_near_bottom(799, 200, 1000, -10));
        assert!(is_near_bottom(800, 200, 1000, -10));
    }

    #[test]
    fn test_threshold_prop_overrides_screen_config() {
        assert_eq!(effective_threshold(None, 96), 96);
        assert_eq!(effective_threshold(Some(10), 96), 10);
        assert_eq!(effective_threshold(Some(-1), 96), 0);
    }

    #[test]
    fn test_selection_reset_only_on_scope_change() {
        // первый запуск эффекта: выбор не трогаем
        assert!(!scope_changed(None, 3));
        assert!(!scope_changed(Some(3), 3));
        assert!(scope_changed(Some(3), 4));
    }

    #[test]
    fn test_short_list_counts_as_bottom() {
        assert!(is_near_bottom(0, 200, 150, 0));
    }
}
