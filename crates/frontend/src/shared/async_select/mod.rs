//! Async Select
//!
//! Выпадающие списки справочников с серверным поиском и постраничной подгрузкой.
//!
//! ## Устройство
//!
//! - [`SearchSession`] — состояние одного поля: запрос, загруженные опции, курсор
//!   страниц, флаг загрузки; решает, когда выполнять запрос к [`SearchPort`]
//! - [`HttpSearchPort`] — реализация порта поверх списочных эндпоинтов API
//! - [`use_async_select`] / [`AsyncSelect`] — привязка к Leptos
//!
//! ## Использование
//!
//! ```rust,ignore
//! let config = SelectConfig::default();
//! let session = brand::source().session(&config, ApiConfig::from_window());
//! let handle = use_async_select(session, &config);
//!
//! view! {
//!     <AsyncSelect handle=handle on_select=move |opt| set_brand.set(opt) />
//! }
//! ```

pub mod accumulator;
pub mod component;
pub mod controller;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod hook;
pub mod http_port;
pub mod port;
pub mod source;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use accumulator::{DuplicatePolicy, OptionAccumulator};
pub use component::AsyncSelect;
pub use controller::{Phase, SearchSession, SessionSnapshot};
pub use cursor::PageCursor;
pub use debounce::{DebouncePolicy, Debouncer, Sleeper, TimerSleeper};
pub use error::SelectError;
pub use hook::{use_async_select, AsyncSelectHandle};
pub use http_port::{page_result_from_response, HttpSearchPort};
pub use port::SearchPort;
pub use source::{bind_scope, label_or, use_source_select, SelectSource};
pub use types::{PageRequest, PageResult, SearchQuery, SelectOption};
