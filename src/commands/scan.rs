use crate::check::find_over_quota;
use crate::cli::ScanArgs;
use crate::error::Result;
use crate::scanner::{directory_size, dirs_at_depth, format_size, ScanOptions};

/// Offline variant of the check: walk, evaluate, print. No provider, no mail.
pub fn run(args: ScanArgs) -> Result<()> {
    let policy = super::parse_policy(&args.on_error)?;
    let options = ScanOptions::new().with_error_policy(policy);

    let candidates = dirs_at_depth(&args.path, args.depth, &options)?;
    tracing::debug!(
        "Found {} candidate directories at depth {}",
        candidates.len(),
        args.depth
    );

    let records = find_over_quota(&candidates, args.max_size, |p| directory_size(p, &options))?;

    if records.is_empty() {
        println!(
            "No directories over {} under {}",
            format_size(args.max_size as i128, args.rounding),
            args.path.display()
        );
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  {}  (quota {})",
            record.path.display(),
            format_size(record.size_bytes as i128, args.rounding),
            format_size(record.quota_bytes as i128, args.rounding)
        );
    }

    Ok(())
}
