//! Hosted email relay: the single external call the contact form makes.

pub mod emailjs;

use futures::future::BoxFuture;

use crate::contact::Submission;

pub use emailjs::EmailJsRelay;

/// Errors produced while handing a submission to the relay.
///
/// Payloads are strings so the error can travel inside a `Clone` event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The HTTP request could not be completed.
    #[error("relay request failed: {0}")]
    Request(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected message: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// A service that delivers a validated [`Submission`] as an email.
///
/// One call per submission, resolving to success or failure. Implementations
/// must not retry on their own.
pub trait EmailRelay: Send + Sync {
    fn send(&self, submission: &Submission) -> BoxFuture<'static, Result<(), RelayError>>;
}
