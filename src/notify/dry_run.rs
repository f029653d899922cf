use std::io::{self, Write};
use std::sync::Mutex;

use crate::error::NotificationError;

use super::{NotificationMessage, Notifier};

/// Renders messages to a text sink instead of transmitting them.
///
/// Used for `--dry-run`; the output block carries the same fields an actual
/// dispatch would.
pub struct DryRunNotifier {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl DryRunNotifier {
    /// Render to stdout
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Render to an arbitrary sink
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl Default for DryRunNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DryRunNotifier {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        writeln!(sink, "\nSending email to {}", message.to)?;
        writeln!(sink, "From: {}", message.from)?;
        writeln!(sink, "Subject: {}", message.subject)?;
        writeln!(sink, "Body: {}", message.body)?;
        sink.flush()?;

        Ok(())
    }
}
