use std::path::PathBuf;

use crate::scanner::ScanOptions;

/// A directory found to be over its quota during a scan pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Absolute path of the directory
    pub path: PathBuf,

    /// Measured subtree size in bytes
    pub size_bytes: u64,

    /// The quota it was evaluated against, in bytes
    pub quota_bytes: u64,
}

impl DirectoryRecord {
    /// Bytes over quota. Records are only produced for directories strictly
    /// over quota, so this is always at least 1.
    pub fn excess_bytes(&self) -> u64 {
        self.size_bytes - self.quota_bytes
    }
}

/// Point-in-time size of a managed filesystem as reported by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemSnapshot {
    /// Name the filesystem was looked up by
    pub name: String,

    /// Reported total size in bytes
    pub size_bytes: u64,
}

/// Runtime configuration for a single check run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Name of the managed filesystem to query
    pub filesystem: String,

    /// Global threshold for the whole filesystem, in bytes
    pub max_size: u64,

    /// Local mount path; enables per-user directory checking when set
    pub mount_path: Option<PathBuf>,

    /// Per-user directory threshold, in bytes
    pub user_max_size: u64,

    /// Depth of user directories below the mount path
    pub user_depth: usize,

    /// Also email each offending user individually
    pub notify_users: bool,

    /// Sender address for all notifications
    pub from: String,

    /// Operator recipient addresses
    pub operators: Vec<String>,

    /// Subject line for operator notifications
    pub subject: String,

    /// Subject line for individual user notifications
    pub user_subject: String,

    /// Decimal places when rendering sizes
    pub rounding: usize,

    /// Traversal options for the scan pass
    pub scan: ScanOptions,
}

impl Default for CheckOptions {
    /// Built from `CheckConfig::default()` so the shipped defaults live in
    /// one place
    fn default() -> Self {
        let defaults = crate::config::CheckConfig::default();
        Self {
            filesystem: String::new(),
            max_size: 1024 * 1024 * 1024,
            mount_path: None,
            user_max_size: 1024 * 1024 * 1024,
            user_depth: defaults.depth,
            notify_users: false,
            from: defaults.from,
            operators: defaults.operators,
            subject: defaults.subject,
            user_subject: defaults.user_subject,
            rounding: defaults.rounding,
            scan: ScanOptions::default(),
        }
    }
}

/// Outcome of a completed check run
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The snapshot the global threshold was evaluated against
    pub snapshot: FilesystemSnapshot,

    /// User directories found over quota (empty if the global threshold held
    /// or no mount path was configured)
    pub over_quota: Vec<DirectoryRecord>,

    /// Number of notifications dispatched (or rendered in dry-run)
    pub notifications_sent: usize,
}
