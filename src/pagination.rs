use async_trait::async_trait;
use log::debug;

use crate::client::ApiError;
use crate::models::Account;

/// One page of a list-valued resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// A well-formed account array, possibly empty.
    Items(Vec<Account>),
    /// A payload that is not an account array; treated as end of data.
    End,
}

/// A paged list resource, addressed by a 1-based page number.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, page: u32) -> Result<Page, ApiError>;
}

/// Retrieves an entire paged collection, in page order.
///
/// Pages are requested sequentially: each request is only issued after
/// the previous page came back non-empty, so the loop terminates on the
/// first empty or non-array page. An account whose total count is an
/// exact multiple of the page size costs one extra request that observes
/// the empty page.
///
/// Transport and status errors propagate to the caller; accumulated
/// pages are dropped with them, never surfaced as a complete collection.
pub async fn fetch_all_pages<S: PageSource + Sync>(source: &S) -> Result<Vec<Account>, ApiError> {
    let mut results = Vec::new();
    let mut page = 1u32;
    loop {
        match source.fetch_page(page).await? {
            Page::Items(items) if !items.is_empty() => {
                debug!("page {page}: {} entries", items.len());
                results.extend(items);
                page += 1;
            }
            _ => break,
        }
    }
    Ok(results)
}
