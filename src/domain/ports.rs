use crate::domain::model::{Author, Comment, Post};
use crate::utils::error::{Result, TransportFailure};
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Raw reply from the transport, before any status or body handling.
///
/// `body` is `None` when the transport did not read a body for this reply
/// (non-2xx replies are dropped unread).
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One GET request handed to the transport. When `cancel` fires, the caller
/// no longer wants the reply and the in-flight request must be torn down.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: Url,
    pub cancel: CancellationToken,
}

/// Callback receiving the outcome of an enqueued request. `FnOnce`, so a
/// transport cannot notify twice for the same request.
pub type TransportCallback =
    Box<dyn FnOnce(std::result::Result<TransportReply, TransportFailure>) + Send>;

/// Callback-driven HTTP collaborator: issue a GET to `request.url` and notify
/// with the reply or the failure. Connection pooling, TLS, and socket-level
/// retries are the implementation's business, not the core's.
pub trait Transport: Send + Sync {
    fn enqueue(&self, request: TransportRequest, notify: TransportCallback);
}

/// Typed fetch operations against the content API.
#[async_trait]
pub trait FeedApi: Send + Sync {
    async fn posts(&self) -> Result<Vec<Post>>;
    async fn comments(&self, post_id: i64) -> Result<Vec<Comment>>;
    async fn author(&self, author_id: i64) -> Result<Author>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn connect_timeout(&self) -> Duration;
    fn concurrent_requests(&self) -> usize;
    fn run_timeout(&self) -> Duration;
}
