use crate::core::bridge;
use crate::core::decode::{BodyShape, Many, One};
use crate::domain::model::{Author, Comment, Post};
use crate::domain::ports::{FeedApi, Transport};
use crate::utils::error::{FeedError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

/// Typed client for the content API, layered on a callback [`Transport`].
///
/// One instance is shared across a whole pipeline run; it holds no mutable
/// state, only the base URL and the transport.
pub struct ApiClient<T: Transport> {
    transport: T,
    base: Url,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base: Url) -> Self {
        Self { transport, base }
    }

    /// Appends path segments to the base URL. `Url::join` is surprising
    /// around trailing slashes, so build from segments instead.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FeedError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.base.to_string(),
                reason: "cannot be a base for API paths".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request<S: BodyShape>(&self, url: Url) -> Result<S::Output> {
        tracing::debug!("Making API request to: {}", url);
        let reply = bridge::call(&self.transport, url.clone()).await?;
        tracing::debug!("API response status: {}", reply.status);

        if !reply.is_success() {
            // Failed replies carry arbitrary, possibly non-JSON bodies; they
            // are released undecoded.
            return Err(FeedError::ApiError {
                url,
                status: reply.status,
                message: status_message(reply.status),
            });
        }

        let body = reply
            .body
            .filter(|body| !body.is_empty())
            .ok_or_else(|| FeedError::EmptyBodyError { url: url.clone() })?;
        S::decode(&url, &body)
    }
}

fn status_message(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("unknown status")
        .to_string()
}

#[async_trait]
impl<T: Transport> FeedApi for ApiClient<T> {
    async fn posts(&self) -> Result<Vec<Post>> {
        let url = self.endpoint(&["posts"])?;
        self.request::<Many<Post>>(url).await
    }

    async fn comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        let url = self.endpoint(&["posts", &post_id.to_string(), "comments"])?;
        self.request::<Many<Comment>>(url).await
    }

    async fn author(&self, author_id: i64) -> Result<Author> {
        let url = self.endpoint(&["authors", &author_id.to_string()])?;
        self.request::<One<Author>>(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{TransportCallback, TransportReply, TransportRequest};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Transport answering from a path → reply table and recording every
    /// requested path.
    #[derive(Default)]
    struct TableTransport {
        replies: HashMap<String, TransportReply>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl TableTransport {
        fn with_reply(mut self, path: &str, status: u16, body: Option<&[u8]>) -> Self {
            self.replies.insert(
                path.to_string(),
                TransportReply {
                    status,
                    body: body.map(<[u8]>::to_vec),
                },
            );
            self
        }
    }

    impl Transport for TableTransport {
        fn enqueue(&self, request: TransportRequest, notify: TransportCallback) {
            let path = request.url.path().to_string();
            self.seen.lock().unwrap().push(path.clone());
            match self.replies.get(&path) {
                Some(reply) => notify(Ok(reply.clone())),
                None => notify(Ok(TransportReply {
                    status: 404,
                    body: None,
                })),
            }
        }
    }

    fn client(transport: TableTransport) -> ApiClient<TableTransport> {
        ApiClient::new(transport, Url::parse("http://localhost:9/api/slow").unwrap())
    }

    #[tokio::test]
    async fn test_posts_decodes_list() {
        let transport = TableTransport::default().with_reply(
            "/api/slow/posts",
            200,
            Some(br#"[{"id": 1, "authorId": 10, "content": "hello", "published": 1, "likedByMe": false}]"#.as_slice()),
        );
        let seen = Arc::clone(&transport.seen);

        let posts = client(transport).posts().await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author_id, 10);
        assert_eq!(seen.lock().unwrap().as_slice(), ["/api/slow/posts"]);
    }

    #[tokio::test]
    async fn test_comments_url_contains_post_id() {
        let transport =
            TableTransport::default().with_reply("/api/slow/posts/7/comments", 200, Some(b"[]".as_slice()));
        let seen = Arc::clone(&transport.seen);

        let comments = client(transport).comments(7).await.unwrap();

        assert!(comments.is_empty());
        assert_eq!(seen.lock().unwrap().as_slice(), ["/api/slow/posts/7/comments"]);
    }

    #[tokio::test]
    async fn test_trailing_slash_base_builds_same_endpoint() {
        let transport =
            TableTransport::default().with_reply(
                "/api/slow/authors/3",
                200,
                Some(br#"{"id": 3, "name": "A", "avatar": "a.png"}"#.as_slice()),
            );
        let api = ApiClient::new(
            transport,
            Url::parse("http://localhost:9/api/slow/").unwrap(),
        );

        let author = api.author(3).await.unwrap();

        assert_eq!(author.id, 3);
    }

    #[tokio::test]
    async fn test_non_2xx_fails_without_decoding_body() {
        // Body is not JSON; a decode attempt would surface as DecodeError.
        let transport = TableTransport::default().with_reply(
            "/api/slow/authors/10",
            500,
            Some(b"<html>Internal Server Error</html>".as_slice()),
        );

        let error = client(transport).author(10).await.unwrap_err();

        match error {
            FeedError::ApiError { status, message, url } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
                assert!(url.path().ends_with("/authors/10"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_with_empty_body_fails() {
        let transport =
            TableTransport::default().with_reply("/api/slow/authors/10", 200, Some(b"".as_slice()));

        let error = client(transport).author(10).await.unwrap_err();

        assert!(matches!(error, FeedError::EmptyBodyError { .. }));
    }

    #[tokio::test]
    async fn test_success_with_absent_body_fails() {
        let transport = TableTransport::default().with_reply("/api/slow/authors/10", 200, None);

        let error = client(transport).author(10).await.unwrap_err();

        assert!(matches!(error, FeedError::EmptyBodyError { .. }));
    }
}
