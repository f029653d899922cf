mod dry_run;
mod smtp;

pub use dry_run::DryRunNotifier;
pub use smtp::SmtpNotifier;

use crate::error::NotificationError;

/// A single notification, either dispatched or rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Trait for notification backends
pub trait Notifier: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &'static str;

    /// Deliver a message to its recipient
    fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_fields() {
        let msg = NotificationMessage {
            from: "quota-alerts@example.com".into(),
            to: "ops@example.com".into(),
            subject: "Filesystem quota exceeded".into(),
            body: "details".into(),
        };
        assert_eq!(msg.to, "ops@example.com");
        assert_eq!(msg.clone(), msg);
    }
}
