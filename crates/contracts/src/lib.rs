//! Общие типы фронтенда и API справочников дашборда
//!
//! - `shared` — конверт ответа и параметры постраничного поиска
//! - `domain` — DTO сущностей, доступных для выбора в выпадающих списках
//! - `enums` — общие перечисления

pub mod domain;
pub mod enums;
pub mod shared;
