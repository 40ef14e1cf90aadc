use super::error::SelectError;
use super::types::{PageRequest, PageResult, SearchQuery};
use async_trait::async_trait;

/// Удалённый постраничный поиск, которым пользуется [`super::SearchSession`].
///
/// Транспорт (URL, заголовки, таймауты) на стороне реализации. Таймаут
/// возвращается как обычная [`SelectError`].
#[async_trait(?Send)]
pub trait SearchPort {
    type Item;

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<PageResult<Self::Item>, SelectError>;
}
