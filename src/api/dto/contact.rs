//! DTOs for contact submissions.

use serde::Serialize;

use crate::domain::repositories::ContactReceipt;

/// Response to an accepted inquiry.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub reference: String,
}

impl From<ContactReceipt> for ContactResponse {
    fn from(receipt: ContactReceipt) -> Self {
        Self {
            status: "received",
            reference: receipt.reference,
        }
    }
}
