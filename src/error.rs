//! Error types for fetching webhook configurations
//!
//! Every failure happens before rendering starts. Errors fall into three classes that
//! an operator can act on: the cluster could not be reached (connection), the cluster
//! answered but refused or garbled the request (api), or the caller gave up
//! (cancellation).

use std::time::Duration;

use thiserror::Error;

/// Variants keep the `Error` naming used across the crate (`ConnectionError`, `ApiError`).
#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum Error {
    /// Endpoint unreachable, TLS failure, or credentials could not be loaded or used.
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// The API server rejected the request or returned something we could not decode.
    #[error("API error{}: {message}", .code.map(|c| format!(" ({c})")).unwrap_or_default())]
    ApiError { code: Option<u16>, message: String },

    /// The caller cancelled the fetch (Ctrl+C, SIGTERM).
    #[error("cancelled: fetch aborted before completion")]
    Cancelled,

    /// The fetch did not finish within the caller's deadline.
    #[error("cancelled: deadline of {0:?} elapsed before the fetch completed")]
    DeadlineExceeded(Duration),

    /// The report could not be encoded (JSON output only).
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Stable short label for the error class
    pub fn kind(&self) -> &'static str {
        match self {
            Error::ConnectionError(_) => "connection",
            Error::ApiError { .. } => "api",
            Error::Cancelled | Error::DeadlineExceeded(_) => "cancelled",
            Error::SerializationError(_) => "output",
        }
    }

    /// Process exit code for this error class
    ///
    /// 2 is left to clap, which uses it for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConnectionError(_) => 1,
            Error::ApiError { .. } => 3,
            Error::Cancelled | Error::DeadlineExceeded(_) => 4,
            Error::SerializationError(_) => 5,
        }
    }
}

/// Render an error followed by each of its sources, outermost first.
///
/// A cause whose text the message already ends with is skipped, since wrappers
/// such as `kube::Error::Service` repeat their source in their own `Display`.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<kube::Error> for Error {
    fn from(e: kube::Error) -> Self {
        match e {
            kube::Error::Api(resp) => Error::ApiError {
                code: Some(resp.code),
                message: format!("{} ({})", resp.message, resp.reason),
            },
            // A body we cannot decode means the server speaks a shape we do not expect
            kube::Error::SerdeError(err) => Error::ApiError {
                code: None,
                message: format!("malformed response: {}", err),
            },
            other => Error::ConnectionError(with_causes(&other)),
        }
    }
}

impl From<kube::config::InferConfigError> for Error {
    fn from(e: kube::config::InferConfigError) -> Self {
        Error::ConnectionError(format!("unable to load cluster credentials: {}", with_causes(&e)))
    }
}

impl From<kube::config::KubeconfigError> for Error {
    fn from(e: kube::config::KubeconfigError) -> Self {
        Error::ConnectionError(format!("invalid kubeconfig: {}", with_causes(&e)))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
