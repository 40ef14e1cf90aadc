use super::types::PageRequest;

/// Курсор пагинации одной сессии выбора.
///
/// `total_pages` неизвестен до первого успешного ответа; до тех пор
/// курсор считает, что грузить ещё есть что.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: u32,
    current_page: u32,
    total_pages: Option<u32>,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_pages: None,
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
        self.total_pages = None;
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn has_more(&self) -> bool {
        match self.total_pages {
            Some(total) => self.current_page < total,
            None => true,
        }
    }

    pub fn first_page(&self) -> PageRequest {
        PageRequest::first(self.page_size)
    }

    pub fn next_page(&self) -> PageRequest {
        PageRequest {
            index: self.current_page + 1,
            size: self.page_size,
        }
    }

    /// Фиксирует загруженную страницу
    pub fn settle(&mut self, page: PageRequest, total_pages: u32) {
        self.current_page = page.index;
        self.total_pages = Some(total_pages.max(1));
    }
}
