use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::error::NotificationError;

use super::{NotificationMessage, Notifier};

/// Delivers messages over SMTP using a blocking lettre transport
pub struct SmtpNotifier {
    transport: SmtpTransport,
}

impl SmtpNotifier {
    /// Build a transport from the configured relay
    pub fn from_config(config: &SmtpConfig) -> Result<Self, NotificationError> {
        let builder = if config.starttls {
            SmtpTransport::starttls_relay(&config.host)?
        } else {
            SmtpTransport::builder_dangerous(&config.host)
        };

        let mut builder = builder.port(config.port);

        if let (Some(user), Some(password)) = (&config.user, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        tracing::debug!(
            "SMTP transport configured for {}:{} (starttls={})",
            config.host,
            config.port,
            config.starttls
        );

        Ok(Self {
            transport: builder.build(),
        })
    }
}

impl Notifier for SmtpNotifier {
    fn name(&self) -> &'static str {
        "smtp"
    }

    fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        let from: Mailbox = message
            .from
            .parse()
            .map_err(|_| NotificationError::InvalidAddress(message.from.clone()))?;
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|_| NotificationError::InvalidAddress(message.to.clone()))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?;

        self.transport.send(&email)?;
        tracing::info!("Sent notification to {}", message.to);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            user: None,
            password: None,
            starttls: false,
        }
    }

    #[test]
    fn test_smtp_name() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        assert_eq!(notifier.name(), "smtp");
    }

    #[test]
    fn test_invalid_from_address_is_rejected_before_dispatch() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        let result = notifier.send(&NotificationMessage {
            from: "not an address".into(),
            to: "ops@example.com".into(),
            subject: "s".into(),
            body: "b".into(),
        });
        assert!(matches!(
            result,
            Err(NotificationError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_invalid_to_address_is_rejected_before_dispatch() {
        let notifier = SmtpNotifier::from_config(&config()).unwrap();
        let result = notifier.send(&NotificationMessage {
            from: "quota-alerts@example.com".into(),
            to: "".into(),
            subject: "s".into(),
            body: "b".into(),
        });
        assert!(matches!(
            result,
            Err(NotificationError::InvalidAddress(_))
        ));
    }
}
