//! # sqs-degrade
//!
//! A resilience decorator for SQS-style message queue clients: wrap your SDK's
//! client in [`SqsProvider`] and every operation is retried through a graduated
//! backoff schedule, bounded by an attempt cap and a cooperative cancellation
//! token, with a single well-typed error when all attempts are exhausted.
//!
//! The underlying client stays yours: implement the [`SqsClient`] trait for
//! whatever handle your SDK gives you. This crate owns no transport, no auth
//! and no queue management; it only decides when to call again, how long to
//! suspend in between, and when to give up.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sqs_degrade::{
//!     CancellationToken, ClientError, ReceiveMessageRequest, ReceiveMessageResponse,
//!     SqsClient, SqsProvider,
//! };
//!
//! /// Adapter over your SDK's queue client handle.
//! struct SdkClient;
//!
//! #[async_trait::async_trait]
//! impl SqsClient for SdkClient {
//!     async fn receive_message(
//!         &self,
//!         request: &ReceiveMessageRequest,
//!         token: CancellationToken,
//!     ) -> Result<ReceiveMessageResponse, ClientError> {
//!         // Forward to the SDK here; report transport and service
//!         // failures as ClientError so they are retried.
//!         Ok(ReceiveMessageResponse { status_code: 200, messages: vec![] })
//!     }
//! #     async fn delete_message(
//! #         &self,
//! #         _request: &sqs_degrade::DeleteMessageRequest,
//! #         _token: CancellationToken,
//! #     ) -> Result<sqs_degrade::DeleteMessageResponse, ClientError> {
//! #         Ok(sqs_degrade::DeleteMessageResponse { status_code: 200 })
//! #     }
//! #     async fn get_queue_url(
//! #         &self,
//! #         _request: &sqs_degrade::GetQueueUrlRequest,
//! #         _token: CancellationToken,
//! #     ) -> Result<sqs_degrade::GetQueueUrlResponse, ClientError> {
//! #         Ok(sqs_degrade::GetQueueUrlResponse { status_code: 200, queue_url: String::new() })
//! #     }
//! #     async fn get_queue_attributes(
//! #         &self,
//! #         _request: &sqs_degrade::GetQueueAttributesRequest,
//! #         _token: CancellationToken,
//! #     ) -> Result<sqs_degrade::GetQueueAttributesResponse, ClientError> {
//! #         Ok(sqs_degrade::GetQueueAttributesResponse {
//! #             status_code: 200,
//! #             attributes: Default::default(),
//! #         })
//! #     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = SqsProvider::new(SdkClient);
//!     let token = CancellationToken::new();
//!
//!     let request = ReceiveMessageRequest {
//!         queue_url: "https://sqs.eu-west-1.amazonaws.com/123456789012/jobs".into(),
//!         max_number_of_messages: 10,
//!         wait_time_seconds: 20,
//!     };
//!
//!     match provider.receive_message(&request, &token).await? {
//!         Some(response) => println!("got {} messages", response.messages.len()),
//!         None => println!("cancelled"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Async/await support** - Built on Tokio, usable from any Tokio runtime
//! - **Graduated backoff** - Two immediate attempts, then 1s/5s/10s/30s tiers
//! - **Cooperative cancellation** - A [`CancellationToken`] interrupts both the
//!   suspension and the in-flight call; a cancelled operation yields `Ok(None)`
//!   instead of an error
//! - **Uniform retry classification** - Client errors and non-success status
//!   codes are both retried; only the last failure is reported on exhaustion
//! - **Injected client** - The transport stays behind the [`SqsClient`] trait
//!
//! ## Configuration
//!
//! The default policy caps an operation at 10 failed attempts. Use
//! [`ConfigBuilder`] to adjust the cap or the suspension tiers:
//!
//! ```
//! use sqs_degrade::{BackoffSchedule, ConfigBuilder};
//! use std::time::Duration;
//!
//! let config = ConfigBuilder::new()
//!     .max_failed_attempts(5)
//!     .backoff(BackoffSchedule {
//!         short_delay: Duration::from_millis(500),
//!         ..BackoffSchedule::default()
//!     })
//!     .build();
//! ```

pub mod backoff;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod provider;

pub use backoff::BackoffSchedule;
pub use client::SqsClient;
pub use config::{Config, ConfigBuilder};
pub use error::{AttemptError, ClientError, ExhaustedError, Result};
pub use message::{
    DeleteMessageRequest, DeleteMessageResponse, GetQueueAttributesRequest,
    GetQueueAttributesResponse, GetQueueUrlRequest, GetQueueUrlResponse, Message, QueueResponse,
    ReceiveMessageRequest, ReceiveMessageResponse, STATUS_OK,
};
pub use provider::SqsProvider;
pub use tokio_util::sync::CancellationToken;
