use thiserror::Error;

/// Failure raised by the injected queue client for a single call.
///
/// These are the transport- and service-level failures the underlying SDK is
/// expected to report. Every variant is treated as transient and retried
/// against the attempt cap.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout error after {0}ms")]
    Timeout(u64),

    #[error("Service error: {code} - {message}")]
    Service { code: String, message: String },

    #[error("Request throttled: {0}")]
    Throttled(String),
}

/// Outcome of one failed attempt: either the client raised an error, or the
/// call came back structurally intact with a non-success status code.
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Got status code {0} by request")]
    BadStatus(u16),
}

/// Returned when the attempt cap is reached with no success and no
/// cancellation. Carries the failure observed on the final attempt as its
/// source.
#[derive(Error, Debug)]
#[error("No successful response after {attempts} failed attempts")]
pub struct ExhaustedError {
    pub attempts: u32,
    #[source]
    pub last_error: AttemptError,
}

pub type Result<T> = std::result::Result<T, ExhaustedError>;
