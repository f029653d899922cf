/// What to do when an entry inside the tree cannot be read during a walk.
///
/// The root itself is different: a missing or unreadable root always fails,
/// whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the entry at warn level and keep walking
    #[default]
    Skip,
    /// Fail the walk on the first unreadable entry
    Abort,
}

/// Configuration options for directory scanning operations.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Per-entry error policy during traversal
    pub error_policy: ErrorPolicy,
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-entry error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}
