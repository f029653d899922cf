use crate::error::{NotificationError, QuotamonError, Result};
use crate::notify::{NotificationMessage, Notifier};
use crate::provider::FilesystemSizeProvider;
use crate::scanner::{directory_size, dirs_at_depth, format_size};

use super::evaluator::find_over_quota;
use super::recipient::RecipientResolver;
use super::types::{CheckOptions, CheckReport, DirectoryRecord};

/// One linear check-then-notify pass.
///
/// Fetch the filesystem size, compare to the global threshold, and when it is
/// exceeded notify operators, scan user directories, and optionally notify
/// offending users. Steps run strictly in sequence; the first error ends the
/// run. Per-user sends are the one exception: each is attempted, and failures
/// are aggregated into a single error afterwards so one bad address cannot
/// suppress the remaining notifications.
pub struct CheckRunner<'a> {
    provider: &'a dyn FilesystemSizeProvider,
    notifier: &'a dyn Notifier,
    resolver: &'a dyn RecipientResolver,
    options: CheckOptions,
}

impl<'a> CheckRunner<'a> {
    pub fn new(
        provider: &'a dyn FilesystemSizeProvider,
        notifier: &'a dyn Notifier,
        resolver: &'a dyn RecipientResolver,
        options: CheckOptions,
    ) -> Self {
        Self {
            provider,
            notifier,
            resolver,
            options,
        }
    }

    pub fn run(&self) -> Result<CheckReport> {
        let snapshot = self.provider.size_of(&self.options.filesystem)?;
        tracing::info!(
            "Filesystem '{}' is using {} (threshold {})",
            snapshot.name,
            self.fmt(snapshot.size_bytes),
            self.fmt(self.options.max_size)
        );

        if snapshot.size_bytes <= self.options.max_size {
            tracing::debug!("Within threshold; nothing to do");
            return Ok(CheckReport {
                snapshot,
                over_quota: vec![],
                notifications_sent: 0,
            });
        }

        if self.options.operators.is_empty() {
            return Err(QuotamonError::InvalidArgument(
                "filesystem is over threshold but no operator recipients are configured"
                    .to_string(),
            ));
        }

        let mut sent = self.notify_operators(&self.filesystem_body(&snapshot))?;

        let mut over_quota = Vec::new();
        if let Some(mount) = &self.options.mount_path {
            tracing::info!(
                "Scanning user directories under {} at depth {}",
                mount.display(),
                self.options.user_depth
            );
            let candidates = dirs_at_depth(mount, self.options.user_depth, &self.options.scan)?;
            over_quota = find_over_quota(&candidates, self.options.user_max_size, |p| {
                directory_size(p, &self.options.scan)
            })?;

            if !over_quota.is_empty() {
                sent += self.notify_operators(&self.aggregate_body(&over_quota))?;

                if self.options.notify_users {
                    sent += self.notify_users(&over_quota)?;
                }
            }
        }

        Ok(CheckReport {
            snapshot,
            over_quota,
            notifications_sent: sent,
        })
    }

    /// Send one message per configured operator address
    fn notify_operators(&self, body: &str) -> Result<usize> {
        for operator in &self.options.operators {
            self.notifier
                .send(&NotificationMessage {
                    from: self.options.from.clone(),
                    to: operator.clone(),
                    subject: self.options.subject.clone(),
                    body: body.to_string(),
                })
                .map_err(QuotamonError::Notification)?;
        }
        Ok(self.options.operators.len())
    }

    /// Notify each offending user; attempt all, then fail if any send failed
    fn notify_users(&self, records: &[DirectoryRecord]) -> Result<usize> {
        let mut sent = 0;
        let mut failed = Vec::new();

        for record in records {
            let recipient = match self.resolver.resolve(&record.path) {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!("Cannot resolve recipient for {}: {}", record.path.display(), e);
                    failed.push(format!("{} (unresolvable)", record.path.display()));
                    continue;
                }
            };

            let message = NotificationMessage {
                from: self.options.from.clone(),
                to: recipient.clone(),
                subject: self.options.user_subject.clone(),
                body: self.user_body(record),
            };

            match self.notifier.send(&message) {
                Ok(()) => sent += 1,
                Err(e) => {
                    tracing::error!("Failed to notify {}: {}", recipient, e);
                    failed.push(recipient);
                }
            }
        }

        if failed.is_empty() {
            Ok(sent)
        } else {
            Err(NotificationError::PartialFailure { failed }.into())
        }
    }

    fn filesystem_body(&self, snapshot: &super::types::FilesystemSnapshot) -> String {
        format!(
            "Filesystem '{}' has exceeded its allowed size. \
             Allowed {}, currently storing {}.",
            snapshot.name,
            self.fmt(self.options.max_size),
            self.fmt(snapshot.size_bytes)
        )
    }

    fn aggregate_body(&self, records: &[DirectoryRecord]) -> String {
        let mut body = String::from("The following directories are over quota:\n");
        for record in records {
            body.push_str(&format!(
                "{}: {} (quota {})\n",
                record.path.display(),
                self.fmt(record.size_bytes),
                self.fmt(record.quota_bytes)
            ));
        }
        body
    }

    fn user_body(&self, record: &DirectoryRecord) -> String {
        format!(
            "Attention, your directory has exceeded the allowed quota. \
             You are allowed {}, but have stored {}. \
             Please remove at least {}, or we will have to remove your account.",
            self.fmt(record.quota_bytes),
            self.fmt(record.size_bytes),
            self.fmt(record.excess_bytes())
        )
    }

    fn fmt(&self, bytes: u64) -> String {
        format_size(bytes as i128, self.options.rounding)
    }
}
