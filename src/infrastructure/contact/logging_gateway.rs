//! Contact gateway that records inquiries in the log.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::domain::contact::ContactSubmission;
use crate::domain::repositories::{ContactError, ContactGateway, ContactReceipt};

/// A gateway with no transport: every inquiry is logged and accepted.
///
/// Used while the site has no mail or CRM integration.
#[derive(Debug, Default)]
pub struct LoggingContactGateway {
    sequence: AtomicU64,
}

impl LoggingContactGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactGateway for LoggingContactGateway {
    async fn deliver(&self, submission: ContactSubmission) -> Result<ContactReceipt, ContactError> {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let reference = format!("INQ-{}-{n:04}", Utc::now().format("%Y%m%d"));

        info!(
            reference = %reference,
            subject = %submission.subject,
            has_phone = submission.phone.is_some(),
            message_len = submission.message.len(),
            "Contact inquiry received"
        );
        debug!(reference = %reference, email = %submission.email, "Contact inquiry sender");

        Ok(ContactReceipt { reference })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};
    use tracing::Level;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_references_are_sequential() {
        let gateway = LoggingContactGateway::new();

        let first = gateway.deliver(submission()).await.unwrap();
        let second = gateway.deliver(submission()).await.unwrap();

        assert!(first.reference.starts_with("INQ-"));
        assert!(first.reference.ends_with("-0001"));
        assert!(second.reference.ends_with("-0002"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn test_info_log_omits_email() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let receipt = LoggingContactGateway::new()
            .deliver(submission())
            .await
            .unwrap();

        let logs = captured.text();
        assert!(logs.contains("Contact inquiry received"));
        assert!(logs.contains(&receipt.reference));
        assert!(logs.contains("Hello"));
        assert!(!logs.contains("asha@example.com"));
    }
}
