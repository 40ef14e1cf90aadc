use crate::shared::async_select::{DebouncePolicy, DuplicatePolicy};
use contracts::enums::SortOrder;
use contracts::shared::search::DEFAULT_PAGE_SIZE;
use std::time::Duration;

/// Расстояние до низа списка (px), при котором подгружается следующая страница
pub const DEFAULT_SCROLL_THRESHOLD_PX: i32 = 48;

/// Настройки, общие для всех полей выбора на экране
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfig {
    pub page_size: u32,
    pub debounce: DebouncePolicy,
    pub sort_order: SortOrder,
    pub duplicates: DuplicatePolicy,
    pub scroll_threshold_px: i32,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DebouncePolicy::default(),
            sort_order: SortOrder::Asc,
            duplicates: DuplicatePolicy::Keep,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl SelectConfig {
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = if ms == 0 {
            DebouncePolicy::Immediate
        } else {
            DebouncePolicy::Delay(Duration::from_millis(ms))
        };
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn scroll_threshold_px(mut self, px: i32) -> Self {
        self.scroll_threshold_px = px.max(0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce, DebouncePolicy::Delay(Duration::from_millis(300)));
        assert_eq!(config.duplicates, DuplicatePolicy::Keep);
    }

    #[test]
    fn test_builder_clamps_values() {
        let config = SelectConfig::default()
            .page_size(0)
            .debounce_ms(0)
            .scroll_threshold_px(-5)
            .sort_order(SortOrder::Desc);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.debounce, DebouncePolicy::Immediate);
        assert_eq!(config.scroll_threshold_px, 0);
        assert_eq!(config.sort_order, SortOrder::Desc);
    }
}
