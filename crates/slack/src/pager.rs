use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};

/// Slack caps `limit` at 200 on all cursor-paginated calls.
pub const PAGE_LIMIT: u32 = 200;

/// Advisory wait when a throttle response carries no Retry-After.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// One page of a cursor-paginated call.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

/// Drives a fetch-one-page call from the start cursor until the API
/// stops returning a next cursor, concatenating items. A rate-limit
/// error suspends the loop for the advisory duration and re-issues the
/// same cursor, so no page is skipped; any other error propagates.
pub async fn collect_all<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    match drive(fetch).await {
        (items, None) => Ok(items),
        (_, Some(err)) => Err(err),
    }
}

/// Same loop as [`collect_all`], but a non-throttle failure is logged
/// and whatever was accumulated before it is returned. Used where one
/// failing fetch must not abort the surrounding cycle.
pub async fn collect_partial<T, F, Fut>(fetch: F, what: &str) -> Vec<T>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    match drive(fetch).await {
        (items, None) => items,
        (items, Some(err)) => {
            warn!(what, error = %err, fetched = items.len(), "fetch failed, keeping partial results");
            items
        }
    }
}

async fn drive<T, F, Fut>(mut fetch: F) -> (Vec<T>, Option<Error>)
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        match fetch(cursor.clone()).await {
            Ok(page) => {
                items.extend(page.items);
                match page.next_cursor {
                    Some(next) => cursor = Some(next),
                    None => return (items, None),
                }
            }
            Err(Error::RateLimited { retry_after }) => {
                let secs = retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                warn!(secs, "rate limited, retrying current page");
                tokio::time::sleep(Duration::from_secs(secs)).await;
            }
            Err(err) => return (items, Some(err)),
        }
    }
}
