//! Contact inquiry submission.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::domain::contact::ContactSubmission;
use crate::domain::repositories::{ContactError, ContactGateway, ContactReceipt};
use crate::error::AppError;

/// Service validating inquiries and handing them to a [`ContactGateway`].
pub struct ContactService<G: ContactGateway> {
    gateway: Arc<G>,
}

impl<G: ContactGateway> ContactService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validates and delivers an inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is invalid; the gateway is
    /// not called in that case.
    ///
    /// Returns [`AppError::Internal`] if the gateway fails.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactReceipt, AppError> {
        if let Err(errors) = submission.validate() {
            metrics::counter!("contact_submissions_rejected_total").increment(1);
            return Err(errors.into());
        }

        match self.gateway.deliver(submission).await {
            Ok(receipt) => {
                metrics::counter!("contact_submissions_total").increment(1);
                tracing::info!(reference = %receipt.reference, "Contact inquiry accepted");
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact delivery failed");
                let reason = match &e {
                    ContactError::Unavailable(_) => "unavailable",
                    ContactError::Rejected(_) => "rejected",
                };
                Err(AppError::internal(
                    "Failed to deliver contact inquiry",
                    json!({ "reason": reason }),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContactGateway;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("+91 98765 43210".to_string()),
            subject: "Quote request".to_string(),
            message: "Please share pricing for the PTS-10.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_delivers_valid_inquiry() {
        let mut gateway = MockContactGateway::new();
        gateway
            .expect_deliver()
            .withf(|s| s.email == "asha@example.com")
            .times(1)
            .returning(|_| {
                Ok(ContactReceipt {
                    reference: "INQ-1".to_string(),
                })
            });

        let service = ContactService::new(Arc::new(gateway));
        let receipt = service.submit(valid()).await.unwrap();

        assert_eq!(receipt.reference, "INQ-1");
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_without_delivery() {
        let mut gateway = MockContactGateway::new();
        gateway.expect_deliver().times(0);

        let service = ContactService::new(Arc::new(gateway));
        let submission = ContactSubmission {
            email: "nope".to_string(),
            ..valid()
        };

        let err = service.submit(submission).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.details()["fields"].get("email").is_some());
    }

    #[tokio::test]
    async fn test_submit_gateway_failure_is_internal() {
        let mut gateway = MockContactGateway::new();
        gateway
            .expect_deliver()
            .times(1)
            .returning(|_| Err(ContactError::Unavailable("smtp down".to_string())));

        let service = ContactService::new(Arc::new(gateway));
        let err = service.submit(valid()).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.details()["reason"], "unavailable");
    }
}
