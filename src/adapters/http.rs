use crate::domain::ports::{Transport, TransportCallback, TransportReply, TransportRequest};
use crate::utils::error::{Result, TransportFailure};
use reqwest::Client;
use std::time::Duration;

/// [`Transport`] backed by a shared `reqwest` client.
///
/// The client's connection pool and connect timeout apply to every request
/// issued through it; fetchers never mutate client state.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder().connect_timeout(connect_timeout).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one with extra middleware.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn enqueue(&self, request: TransportRequest, notify: TransportCallback) {
        let client = self.client.clone();
        tokio::spawn(async move {
            let TransportRequest { url, cancel } = request;
            tokio::select! {
                _ = cancel.cancelled() => {
                    // Caller went away; the request future is dropped here,
                    // which aborts the connection attempt.
                }
                outcome = client.get(url).send() => match outcome {
                    Err(error) => notify(Err(classify(&error))),
                    Ok(response) => {
                        let status = response.status().as_u16();
                        if !response.status().is_success() {
                            // Drop the body unread; releasing the response
                            // returns the connection to the pool.
                            drop(response);
                            notify(Ok(TransportReply { status, body: None }));
                        } else {
                            tokio::select! {
                                _ = cancel.cancelled() => {}
                                body = response.bytes() => match body {
                                    Ok(bytes) => notify(Ok(TransportReply {
                                        status,
                                        body: Some(bytes.to_vec()),
                                    })),
                                    Err(error) => notify(Err(classify(&error))),
                                }
                            }
                        }
                    }
                }
            }
        });
    }
}

fn classify(error: &reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::Timeout
    } else {
        TransportFailure::Connect(error.to_string())
    }
}
