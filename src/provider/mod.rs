mod mounts;

pub use mounts::{MountEntry, MountTableProvider};

use crate::check::FilesystemSnapshot;
use crate::error::ProviderError;

/// Looks up a managed filesystem by name and reports its current size.
///
/// The check logic treats this as opaque; anything that can turn a name into
/// a byte count qualifies, from a mount table on the host to a cloud
/// metadata API.
pub trait FilesystemSizeProvider: Send + Sync {
    fn size_of(&self, name: &str) -> Result<FilesystemSnapshot, ProviderError>;
}
