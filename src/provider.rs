use crate::{
    client::SqsClient,
    config::{Config, ConfigBuilder},
    error::{AttemptError, ClientError, ExhaustedError, Result},
    message::*,
};
use std::future::Future;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Resilient decorator over an injected [`SqsClient`].
///
/// Every operation runs the same degradation loop: call the underlying client,
/// and on a transient failure (client error or non-success status) suspend for
/// a scheduled delay and try again, up to a capped number of failed attempts.
/// The caller's [`CancellationToken`] is honored cooperatively at every
/// suspension point, and cancelling is not an error: a cancelled operation
/// resolves to `Ok(None)`.
///
/// The provider holds no state across invocations, so a single instance can
/// serve concurrent calls.
pub struct SqsProvider<C> {
    client: C,
    config: Config,
}

impl<C: SqsClient> SqsProvider<C> {
    /// Wraps `client` with the default degradation policy (10 failed attempts,
    /// graduated 0s/1s/5s/10s/30s suspension tiers).
    pub fn new(client: C) -> Self {
        Self::with_config(client, Config::default())
    }

    /// Wraps `client` with a custom [`Config`].
    pub fn with_config(client: C, config: Config) -> Self {
        Self { client, config }
    }

    /// Returns a [`ConfigBuilder`] for creating custom configurations.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Receives messages, retrying transient failures.
    ///
    /// A response counts as successful when its status code is OK, or when it
    /// carries at least one message despite a non-OK status. Some SDKs report a
    /// degraded transport status alongside a valid delivery; the payload is
    /// trusted over the status here, and only here.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] when the attempt cap is reached without a
    /// successful response and without cancellation.
    pub async fn receive_message(
        &self,
        request: &ReceiveMessageRequest,
        token: &CancellationToken,
    ) -> Result<Option<ReceiveMessageResponse>> {
        self.run(
            token,
            |tok| self.client.receive_message(request, tok),
            |response| response.is_success() || !response.messages.is_empty(),
        )
        .await
    }

    /// Deletes a delivered message by receipt handle, retrying transient
    /// failures.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] when the attempt cap is reached without a
    /// successful response and without cancellation.
    pub async fn delete_message(
        &self,
        request: &DeleteMessageRequest,
        token: &CancellationToken,
    ) -> Result<Option<DeleteMessageResponse>> {
        self.run(
            token,
            |tok| self.client.delete_message(request, tok),
            QueueResponse::is_success,
        )
        .await
    }

    /// Resolves a queue name to its URL, retrying transient failures.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] when the attempt cap is reached without a
    /// successful response and without cancellation.
    pub async fn get_queue_url(
        &self,
        request: &GetQueueUrlRequest,
        token: &CancellationToken,
    ) -> Result<Option<GetQueueUrlResponse>> {
        self.run(
            token,
            |tok| self.client.get_queue_url(request, tok),
            QueueResponse::is_success,
        )
        .await
    }

    /// Fetches queue attributes, retrying transient failures.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] when the attempt cap is reached without a
    /// successful response and without cancellation.
    pub async fn get_queue_attributes(
        &self,
        request: &GetQueueAttributesRequest,
        token: &CancellationToken,
    ) -> Result<Option<GetQueueAttributesResponse>> {
        self.run(
            token,
            |tok| self.client.get_queue_attributes(request, tok),
            QueueResponse::is_success,
        )
        .await
    }

    /// The degradation loop shared by all operations.
    ///
    /// Invariants: the suspension is computed from the pre-increment failed
    /// attempt count and applied before the call; the wait never blocks past
    /// cancellation; cancellation observed at the cap takes precedence over
    /// exhaustion.
    async fn run<Resp, F, Fut>(
        &self,
        token: &CancellationToken,
        mut call: F,
        accept: impl Fn(&Resp) -> bool,
    ) -> Result<Option<Resp>>
    where
        Resp: QueueResponse,
        F: FnMut(CancellationToken) -> Fut,
        Fut: Future<Output = std::result::Result<Resp, ClientError>>,
    {
        let mut failed_attempts: u32 = 0;

        loop {
            if token.is_cancelled() {
                return Ok(None);
            }

            let delay = self.config.backoff.suspend_time(failed_attempts);
            if !delay.is_zero() {
                debug!(
                    failed_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "suspending before next attempt"
                );
                tokio::select! {
                    _ = token.cancelled() => return Ok(None),
                    _ = sleep(delay) => {}
                }
            }

            let failure = match call(token.clone()).await {
                Ok(response) if accept(&response) => return Ok(Some(response)),
                Ok(response) => AttemptError::BadStatus(response.status_code()),
                Err(err) => AttemptError::Client(err),
            };

            failed_attempts += 1;
            warn!(failed_attempts, error = %failure, "queue call attempt failed");

            if failed_attempts >= self.config.max_failed_attempts {
                if token.is_cancelled() {
                    return Ok(None);
                }
                return Err(ExhaustedError {
                    attempts: failed_attempts,
                    last_error: failure,
                });
            }
        }
    }
}
