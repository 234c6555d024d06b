//! Outbound notification seam.
//!
//! The workflow layer emits at most one notification per newly created
//! proposal. Delivery (templating, SMTP) belongs to a collaborating
//! module; this crate only carries the template key, the recipient
//! list, and a context payload. Failures never block the save -- the
//! caller logs and moves on.

use std::cell::RefCell;

use serde_json::Value;

/// Template key for the proposal-creation notification. The delivery
/// side resolves it to its plain-text and HTML templates.
pub const NEW_PROPOSAL_TEMPLATE: &str = "new_contract_proposal";

#[derive(Debug, thiserror::Error)]
#[error("Notification failed: {0}")]
pub struct NotifyError(pub String);

pub trait Notifier {
    fn send(&self, template: &str, recipients: &[String], context: &Value)
        -> Result<(), NotifyError>;
}

/// Discards every notification. For callers that do not deliver mail.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn send(&self, _: &str, _: &[String], _: &Value) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// A sent message captured by [`RecordingNotifier`].
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub template: String,
    pub recipients: Vec<String>,
    pub context: Value,
}

/// Records notifications instead of delivering them. Test double.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<SentNotification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(
        &self,
        template: &str,
        recipients: &[String],
        context: &Value,
    ) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push(SentNotification {
            template: template.to_string(),
            recipients: recipients.to_vec(),
            context: context.clone(),
        });
        Ok(())
    }
}
