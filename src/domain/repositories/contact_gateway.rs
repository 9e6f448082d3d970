//! Delivery seam for contact inquiries.

use crate::domain::contact::ContactSubmission;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a [`ContactGateway`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("contact delivery unavailable: {0}")]
    Unavailable(String),

    #[error("contact delivery rejected: {0}")]
    Rejected(String),
}

/// Receipt for an accepted inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub reference: String,
}

/// Accepts contact inquiries and reports success or failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::contact::LoggingContactGateway`] - logs the inquiry, no transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Delivers a validated inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] when the inquiry could not be delivered.
    async fn deliver(&self, submission: ContactSubmission) -> Result<ContactReceipt, ContactError>;
}
