use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::types::DirectoryRecord;

/// Evaluate candidate directories against a quota.
///
/// `size_of` measures a single directory; it is injected so callers can swap
/// the real walker for a cached or fake measurement. A directory is included
/// iff its size strictly exceeds `quota_bytes`; exactly-at-quota is
/// compliant. Candidates come from a BTreeSet, so the output is sorted by
/// path and deterministic within a run.
pub fn find_over_quota<F>(
    candidates: &BTreeSet<PathBuf>,
    quota_bytes: u64,
    mut size_of: F,
) -> Result<Vec<DirectoryRecord>>
where
    F: FnMut(&Path) -> Result<u64>,
{
    let mut records = Vec::new();

    for dir in candidates {
        let size_bytes = size_of(dir)?;

        if size_bytes > quota_bytes {
            tracing::debug!(
                "{} is over quota: {} > {}",
                dir.display(),
                size_bytes,
                quota_bytes
            );
            records.push(DirectoryRecord {
                path: dir.clone(),
                size_bytes,
                quota_bytes,
            });
        } else {
            tracing::debug!("{} is within quota ({} bytes)", dir.display(), size_bytes);
        }
    }

    Ok(records)
}
