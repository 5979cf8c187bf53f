// src/api/pagination.rs
//! Cursor pagination as a lazy, forward-only stream of pages.
//!
//! Each page is fetched only when the stream is polled for it. Cursors are
//! stateless tokens, so dropping the stream part-way needs no cleanup.

use crate::error::AppError;
use crate::query::PaginatedResponse;
use crate::types::Cursor;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use std::future::Future;

enum PageState {
    Pending(Option<Cursor>),
    Done,
}

/// Streams pages starting from the beginning of the collection.
pub fn paginate<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<PaginatedResponse<T>, AppError>>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    paginate_from(None, fetch)
}

/// Streams pages starting at `start`.
///
/// `fetch` is called once per page with the cursor to resume from. The stream
/// ends after a page with no continuation, or right after yielding an error.
pub fn paginate_from<T, F, Fut>(
    start: Option<Cursor>,
    fetch: F,
) -> impl Stream<Item = Result<PaginatedResponse<T>, AppError>>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let start = start.filter(|cursor| !cursor.is_empty());

    stream::unfold(
        (fetch, PageState::Pending(start)),
        |(mut fetch, state)| async move {
            let cursor = match state {
                PageState::Pending(cursor) => cursor,
                PageState::Done => return None,
            };

            match fetch(cursor).await {
                Ok(page) => {
                    let next = match page.continuation() {
                        Some(cursor) => PageState::Pending(Some(cursor.clone())),
                        None => PageState::Done,
                    };
                    Some((Ok(page), (fetch, next)))
                }
                Err(e) => Some((Err(e), (fetch, PageState::Done))),
            }
        },
    )
}

/// Flattens a page stream into its items, in order.
pub fn paginate_items<T, S>(pages: S) -> impl Stream<Item = Result<T, AppError>>
where
    S: Stream<Item = Result<PaginatedResponse<T>, AppError>>,
{
    pages
        .map_ok(|page| stream::iter(page.results.into_iter().map(Ok::<T, AppError>)))
        .try_flatten()
}

/// Result of draining a page stream.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
    /// Where to resume if collection stopped at the page limit.
    pub resume_cursor: Option<Cursor>,
}

/// Collects every item, stopping early after `max_pages` pages if given.
///
/// A limit of zero fetches nothing; resume from the cursor the stream
/// started at.
pub async fn collect_all<T, S>(
    pages: S,
    max_pages: Option<u32>,
) -> Result<PaginationResult<T>, AppError>
where
    S: Stream<Item = Result<PaginatedResponse<T>, AppError>>,
{
    futures::pin_mut!(pages);

    let mut items = Vec::new();
    let mut pages_fetched = 0u32;
    let mut resume_cursor = None;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let Some(page) = pages.next().await else {
            break;
        };
        let page = page?;
        pages_fetched += 1;
        resume_cursor = page.continuation().cloned();
        items.extend(page.results);
    }

    Ok(PaginationResult {
        items,
        pages_fetched,
        resume_cursor,
    })
}
