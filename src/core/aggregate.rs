//! Three-stage aggregation: posts, then comments per post, then authors per
//! post, combined into the nested feed.
//!
//! Per-post fetches inside a stage run concurrently (bounded by
//! `concurrent_requests`), not sequentially: total latency and completion
//! order differ from a sequential walk, the output data does not. Results are
//! re-associated by index, never by completion order.

use crate::domain::model::{PostWithAuthor, PostWithComments, PostWithCommentsAndAuthors};
use crate::domain::ports::FeedApi;
use crate::utils::error::Result;
use futures::stream::{self, StreamExt};
use std::future::Future;

/// In-flight requests per fan-out stage when the caller does not configure
/// a bound.
pub const DEFAULT_CONCURRENT_REQUESTS: usize = 5;

pub struct Aggregator<A: FeedApi> {
    api: A,
    concurrent_requests: usize,
}

impl<A: FeedApi> Aggregator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            concurrent_requests: DEFAULT_CONCURRENT_REQUESTS,
        }
    }

    pub fn with_concurrent_requests(mut self, concurrent_requests: usize) -> Self {
        self.concurrent_requests = concurrent_requests.max(1);
        self
    }

    /// Builds the full nested feed from scratch.
    ///
    /// All-or-nothing: the first failing sub-fetch fails the whole run, and
    /// its unfinished siblings are cancelled. No partial output is returned.
    /// Output order always equals the order `posts()` returned.
    pub async fn aggregate(&self) -> Result<Vec<PostWithCommentsAndAuthors>> {
        tracing::info!("Fetching posts...");
        let posts = self.api.posts().await?;
        tracing::info!("Fetched {} posts", posts.len());
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!("Fetching comments for {} posts...", posts.len());
        let comments = self
            .join_in_order(posts.iter().map(|post| self.api.comments(post.id)).collect())
            .await?;
        let with_comments: Vec<PostWithComments> = posts
            .into_iter()
            .zip(comments)
            .map(|(post, comments)| PostWithComments { post, comments })
            .collect();

        tracing::info!("Fetching authors for {} posts...", with_comments.len());
        let authors = self
            .join_in_order(
                with_comments
                    .iter()
                    .map(|entry| self.api.author(entry.post.author_id))
                    .collect(),
            )
            .await?;

        Ok(with_comments
            .into_iter()
            .zip(authors)
            .map(|(entry, author)| PostWithCommentsAndAuthors {
                post: PostWithAuthor {
                    post: entry.post,
                    author,
                },
                comments: entry.comments,
            })
            .collect())
    }

    /// Runs `requests` with bounded concurrency and returns the results in
    /// submission order: each result lands in the slot of its index, whatever
    /// order completions arrive in. The first `Err` resolves the join with
    /// that error and drops the remaining futures, which aborts their
    /// in-flight transport calls.
    async fn join_in_order<T>(
        &self,
        requests: Vec<impl Future<Output = Result<T>>>,
    ) -> Result<Vec<T>> {
        let mut slots: Vec<Option<T>> = Vec::with_capacity(requests.len());
        slots.resize_with(requests.len(), || None);

        let mut in_flight = stream::iter(
            requests
                .into_iter()
                .enumerate()
                .map(|(index, request)| async move { (index, request.await) }),
        )
        .buffer_unordered(self.concurrent_requests);

        while let Some((index, result)) = in_flight.next().await {
            slots[index] = Some(result?);
        }
        drop(in_flight);

        debug_assert!(slots.iter().all(Option::is_some));
        Ok(slots.into_iter().flatten().collect())
    }
}
