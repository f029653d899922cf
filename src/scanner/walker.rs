use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{QuotamonError, Result};

use super::options::{ErrorPolicy, ScanOptions};

/// List directories at an exact depth below `root`.
///
/// Depth 1 means direct children of root. The root itself is never included,
/// nor are directories at any other depth. Paths come back absolute and
/// deduplicated, in sorted order.
pub fn dirs_at_depth(root: &Path, depth: usize, options: &ScanOptions) -> Result<BTreeSet<PathBuf>> {
    if depth == 0 {
        return Err(QuotamonError::InvalidArgument(
            "depth must be at least 1".to_string(),
        ));
    }

    let root = canonicalize_root(root)?;
    let mut dirs = BTreeSet::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .min_depth(depth)
        .max_depth(depth);

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                handle_walk_error(&root, err, options.error_policy)?;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            dirs.insert(entry.path().to_path_buf());
        }
    }

    Ok(dirs)
}

/// Total byte size of all regular files under `path`, nested ones included.
///
/// Symlinks are not followed; they contribute nothing to the total. Figures
/// are point-in-time: files added or removed mid-walk make the result a
/// best-effort approximation.
pub fn directory_size(path: &Path, options: &ScanOptions) -> Result<u64> {
    let root = canonicalize_root(path)?;
    let mut total = 0u64;

    for result in WalkDir::new(&root).follow_links(false) {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                handle_walk_error(&root, err, options.error_policy)?;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => total += meta.len(),
            Err(err) => handle_walk_error(&root, err, options.error_policy)?,
        }
    }

    Ok(total)
}

fn canonicalize_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize().map_err(|e| QuotamonError::Filesystem {
        path: root.to_path_buf(),
        source: e,
    })
}

/// Apply the per-entry error policy. Errors at depth 0 mean the root itself
/// could not be read and always abort the walk.
fn handle_walk_error(root: &Path, err: walkdir::Error, policy: ErrorPolicy) -> Result<()> {
    let root_failure = err.depth() == 0;
    if policy == ErrorPolicy::Skip && !root_failure {
        tracing::warn!("Skipping unreadable entry: {}", err);
        return Ok(());
    }

    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));

    Err(QuotamonError::Filesystem { path, source })
}
