use crate::error::ClientError;
use crate::message::{
    DeleteMessageRequest, DeleteMessageResponse, GetQueueAttributesRequest,
    GetQueueAttributesResponse, GetQueueUrlRequest, GetQueueUrlResponse, ReceiveMessageRequest,
    ReceiveMessageResponse,
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Contract of the underlying queue client wrapped by [`SqsProvider`].
///
/// Implement this for your SDK's client handle. Each call receives the
/// caller's cancellation token so the client can abandon an in-flight request
/// when the caller gives up; transport and service failures are reported as
/// [`ClientError`]. Timeouts on a hung call are the implementor's concern, and
/// surface through [`ClientError::Timeout`].
///
/// [`SqsProvider`]: crate::SqsProvider
/// [`ClientError::Timeout`]: crate::ClientError::Timeout
#[async_trait]
pub trait SqsClient: Send + Sync {
    async fn receive_message(
        &self,
        request: &ReceiveMessageRequest,
        token: CancellationToken,
    ) -> Result<ReceiveMessageResponse, ClientError>;

    async fn delete_message(
        &self,
        request: &DeleteMessageRequest,
        token: CancellationToken,
    ) -> Result<DeleteMessageResponse, ClientError>;

    async fn get_queue_url(
        &self,
        request: &GetQueueUrlRequest,
        token: CancellationToken,
    ) -> Result<GetQueueUrlResponse, ClientError>;

    async fn get_queue_attributes(
        &self,
        request: &GetQueueAttributesRequest,
        token: CancellationToken,
    ) -> Result<GetQueueAttributesResponse, ClientError>;
}
