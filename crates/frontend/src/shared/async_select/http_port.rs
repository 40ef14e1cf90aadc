use super::error::SelectError;
use super::port::SearchPort;
use super::types::{PageRequest, PageResult, SearchQuery};
use crate::shared::api_utils::ApiConfig;
use async_trait::async_trait;
use contracts::enums::SortOrder;
use contracts::shared::api_response::ApiListResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// [`SearchPort`] поверх списочного эндпоинта API
/// (`GET {api}/{endpoint}?search=&page=&limit=&sort_order=&...scope`).
pub struct HttpSearchPort<T> {
    api: ApiConfig,
    endpoint: String,
    sort_order: SortOrder,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpSearchPort<T> {
    pub fn new(api: ApiConfig, endpoint: impl Into<String>) -> Self {
        Self {
            api,
            endpoint: endpoint.into(),
            sort_order: SortOrder::Asc,
            _item: PhantomData,
        }
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn request_url(&self, query: &SearchQuery, page: PageRequest) -> Result<String, SelectError> {
        let request = query.to_request(page, self.sort_order);
        let params = serde_qs::to_string(&request.to_query_pairs())
            .map_err(|e| SelectError::Transport(format!("Failed to encode query: {}", e)))?;
        Ok(format!("{}?{}", self.api.url(&self.endpoint), params))
    }
}

/// Проверяет конверт ответа и превращает его в страницу
pub fn page_result_from_response<T>(
    response: ApiListResponse<T>,
) -> Result<PageResult<T>, SelectError> {
    if !response.success {
        return Err(SelectError::Api(response.error_message()));
    }
    let data = response
        .data
        .ok_or_else(|| SelectError::MalformedResponse("missing `data`".to_string()))?;
    let pagination = response
        .pagination
        .ok_or_else(|| SelectError::MalformedResponse("missing `pagination`".to_string()))?;
    PageResult::new(data, pagination.page, pagination.total_pages)
}

#[async_trait(?Send)]
impl<T> SearchPort for HttpSearchPort<T>
where
    T: DeserializeOwned + 'static,
{
    type Item = T;

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<PageResult<T>, SelectError> {
        let url = self.request_url(query, page)?;

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SelectError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(SelectError::Status {
                status: response.status(),
            });
        }

        let body = response
            .json::<ApiListResponse<T>>()
            .await
            .map_err(|e| SelectError::MalformedResponse(e.to_string()))?;

        page_result_from_response(body)
    }
}
