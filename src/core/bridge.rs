//! Single suspension point over the callback-driven [`Transport`].
//!
//! The transport notifies through a callback; callers want a plain `.await`.
//! The bridge funnels the callback into a oneshot channel and suspends on the
//! receiver, so the whole fetch chain reads sequentially.

use crate::domain::ports::{Transport, TransportCallback, TransportReply, TransportRequest};
use crate::utils::error::{FeedError, Result, TransportFailure};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Issue a GET through `transport` and suspend until the reply or failure
/// arrives.
///
/// Resolves exactly once: the callback consumes a oneshot sender, so a second
/// notification is unrepresentable. Dropping the returned future before it
/// resolves cancels the request token, which tears down the in-flight call.
pub async fn call<T: Transport + ?Sized>(transport: &T, url: Url) -> Result<TransportReply> {
    let (tx, rx) = oneshot::channel();
    let cancel = CancellationToken::new();

    let notify: TransportCallback = Box::new(move |outcome| {
        let _ = tx.send(outcome);
    });
    transport.enqueue(
        TransportRequest {
            url: url.clone(),
            cancel: cancel.clone(),
        },
        notify,
    );

    // Fires the token if this future is dropped mid-flight.
    let guard = cancel.drop_guard();

    let outcome = rx.await.map_err(|_| FeedError::TransportError {
        url: url.clone(),
        source: TransportFailure::Dropped,
    });
    guard.disarm();

    outcome?.map_err(|source| FeedError::TransportError { url, source })
}
