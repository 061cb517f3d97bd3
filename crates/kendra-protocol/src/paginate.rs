//! Token-driven pagination of list operations.

use std::collections::HashSet;
use std::future::Future;

use async_stream::try_stream;
use futures::Stream;
use kendra_model::request::{
    ListDataSourceSyncJobsRequest, ListDataSourcesRequest, ListFaqsRequest, ListIndicesRequest,
};
use kendra_model::response::{
    ListDataSourceSyncJobsResponse, ListDataSourcesResponse, ListFaqsResponse, ListIndicesResponse,
};

use crate::request::KendraRequest;
use crate::{Error, Result, TRACING_TARGET_PAGINATION};

/// A list request that continues from a `NextToken`.
pub trait PaginatedRequest: KendraRequest + Clone {
    /// Replaces the continuation token.
    fn set_next_token(&mut self, token: Option<String>);
}

/// A page of a list operation.
pub trait PaginatedResponse {
    /// Element type of the page.
    type Item;

    /// Token for the next page; `None` or empty on the last page.
    fn next_token(&self) -> Option<&str>;

    /// Elements of this page.
    fn items(&self) -> &[Self::Item];

    #[inline]
    fn item_count(&self) -> usize {
        self.items().len()
    }
}

macro_rules! impl_paginated {
    ($($request:ty => $response:ty, $items:ident: $item:ty;)*) => {
        $(
            impl PaginatedRequest for $request {
                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }
            }

            impl PaginatedResponse for $response {
                type Item = $item;

                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn items(&self) -> &[$item] {
                    self.$items.as_deref().unwrap_or_default()
                }
            }
        )*
    };
}

impl_paginated! {
    ListDataSourceSyncJobsRequest => ListDataSourceSyncJobsResponse,
        history: kendra_model::types::DataSourceSyncJob;
    ListDataSourcesRequest => ListDataSourcesResponse,
        summary_items: kendra_model::types::DataSourceSummary;
    ListFaqsRequest => ListFaqsResponse,
        faq_summary_items: kendra_model::types::FaqSummary;
    ListIndicesRequest => ListIndicesResponse,
        index_configuration_summary_items: kendra_model::types::IndexConfigurationSummary;
}

/// Fetches every page of a list operation.
///
/// `fetch` sends one request and returns its decoded page; it is called with
/// the initial request and then with the same request carrying each
/// `NextToken` in turn. The stream ends after the first page without a token
/// and fails if the service hands out the same token twice.
///
/// # Examples
///
/// ```
/// use futures::TryStreamExt;
/// use kendra_model::request::ListFaqsRequest;
/// use kendra_model::response::ListFaqsResponse;
/// use kendra_protocol::paginate;
///
/// let request = ListFaqsRequest::builder()
///     .with_index_id("11111111-1111-1111-1111-111111111111")
///     .build()?;
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let pages: Vec<ListFaqsResponse> = runtime.block_on(
///     paginate(request, |request: ListFaqsRequest| async move {
///         let next_token = match request.next_token {
///             None => Some("page-2".to_string()),
///             Some(_) => None,
///         };
///         Ok::<_, kendra_protocol::Error>(ListFaqsResponse { next_token, faq_summary_items: None })
///     })
///     .try_collect(),
/// )?;
///
/// assert_eq!(pages.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn paginate<R, F, Fut>(request: R, mut fetch: F) -> impl Stream<Item = Result<R::Output>>
where
    R: PaginatedRequest,
    R::Output: PaginatedResponse,
    F: FnMut(R) -> Fut,
    Fut: Future<Output = Result<R::Output>>,
{
    try_stream! {
        let mut request = request;
        let mut seen = HashSet::new();
        let mut page = 0_usize;

        loop {
            let response = fetch(request.clone()).await?;
            page += 1;

            let next_token = response
                .next_token()
                .filter(|token| !token.is_empty())
                .map(str::to_owned);

            tracing::debug!(
                target: TRACING_TARGET_PAGINATION,
                operation = %R::OPERATION,
                page,
                items = response.item_count(),
                has_next = next_token.is_some(),
                "page received"
            );

            yield response;

            let Some(token) = next_token else {
                break;
            };

            if !seen.insert(token.clone()) {
                Err::<(), _>(Error::pagination(format!(
                    "{} returned the token '{token}' twice",
                    R::OPERATION
                )))?;
            }

            request.set_next_token(Some(token));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures::{StreamExt, TryStreamExt};
    use kendra_model::types::{FaqSummary, IndexConfigurationSummary};

    use super::*;

    const INDEX_ID: &str = "11111111-1111-1111-1111-111111111111";

    fn faq_page(ids: &[&str], next_token: Option<&str>) -> ListFaqsResponse {
        ListFaqsResponse {
            next_token: next_token.map(str::to_owned),
            faq_summary_items: Some(
                ids.iter()
                    .map(|id| FaqSummary {
                        id: Some(id.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
        }
    }

    fn faqs_request() -> ListFaqsRequest {
        ListFaqsRequest::builder()
            .with_index_id(INDEX_ID)
            .with_max_results(2)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_follows_tokens_until_last_page() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&sent);

        let pages: Vec<_> = paginate(faqs_request(), move |request: ListFaqsRequest| {
            recorder.lock().unwrap().push(request.next_token.clone());
            let page = match request.next_token.as_deref() {
                None => faq_page(&["faq-1", "faq-2"], Some("t1")),
                Some("t1") => faq_page(&["faq-3", "faq-4"], Some("t2")),
                _ => faq_page(&["faq-5"], None),
            };
            async move { Ok::<_, Error>(page) }
        })
        .try_collect()
        .await
        .unwrap();

        let ids: Vec<_> = pages
            .iter()
            .flat_map(PaginatedResponse::items)
            .filter_map(|summary| summary.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["faq-1", "faq-2", "faq-3", "faq-4", "faq-5"]);
        assert_eq!(
            *sent.lock().unwrap(),
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_token_ends_listing() {
        let pages: Vec<_> = paginate(faqs_request(), |_| async {
            Ok::<_, Error>(faq_page(&["faq-1"], Some("")))
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(pages.len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_token_is_an_error() {
        let results: Vec<_> = paginate(faqs_request(), |_| async {
            Ok::<_, Error>(faq_page(&["faq-1"], Some("loop")))
        })
        .collect()
        .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(Error::Pagination { .. })));
    }

    #[tokio::test]
    async fn test_fetch_error_stops_stream() {
        let mut calls = 0;
        let results: Vec<_> = paginate(ListIndicesRequest::default(), move |_| {
            calls += 1;
            let result = if calls == 1 {
                Ok(ListIndicesResponse {
                    index_configuration_summary_items: Some(vec![IndexConfigurationSummary::default()]),
                    next_token: Some("t1".to_string()),
                })
            } else {
                Err(Error::config("transport closed"))
            };
            async move { result }
        })
        .collect()
        .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().items().len(), 1);
        assert!(matches!(results[1], Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_items_are_empty() {
        let response = ListDataSourcesResponse::default();
        assert!(response.items().is_empty());
        assert!(PaginatedResponse::next_token(&response).is_none());
    }
}
