use crate::check::{CheckOptions, CheckRunner, DirNameResolver};
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{QuotamonError, Result};
use crate::notify::{DryRunNotifier, Notifier, SmtpNotifier};
use crate::provider::MountTableProvider;
use crate::scanner::ScanOptions;

pub fn run(args: CheckArgs, config: &Config) -> Result<()> {
    let policy = super::parse_policy(&args.on_error)?;

    let operators = if args.to.is_empty() {
        config.check.operators.clone()
    } else {
        args.to
    };

    let options = CheckOptions {
        filesystem: args.filesystem,
        max_size: args.max_size,
        mount_path: args.mount,
        user_max_size: args.user_max_size.unwrap_or(args.max_size),
        user_depth: args.depth.unwrap_or(config.check.depth),
        notify_users: args.notify_users,
        from: args.from.unwrap_or_else(|| config.check.from.clone()),
        operators,
        subject: config.check.subject.clone(),
        user_subject: config.check.user_subject.clone(),
        rounding: config.check.rounding,
        scan: ScanOptions::new().with_error_policy(policy),
    };

    let provider = MountTableProvider::with_table(&args.mounts_file);

    let notifier: Box<dyn Notifier> = if args.dry_run {
        Box::new(DryRunNotifier::new())
    } else {
        Box::new(SmtpNotifier::from_config(&config.smtp).map_err(QuotamonError::Notification)?)
    };
    tracing::info!("Using notification backend: {}", notifier.name());

    let resolver = DirNameResolver::new();
    let runner = CheckRunner::new(&provider, notifier.as_ref(), &resolver, options);

    let report = runner.run()?;

    if report.notifications_sent == 0 {
        println!(
            "Filesystem '{}' is within its threshold ({} bytes used)",
            report.snapshot.name, report.snapshot.size_bytes
        );
    } else {
        println!(
            "Filesystem '{}' is over threshold: {} directories over quota, {} notification(s) dispatched",
            report.snapshot.name,
            report.over_quota.len(),
            report.notifications_sent
        );
    }

    Ok(())
}
