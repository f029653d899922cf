use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use nix::sys::statvfs::statvfs;

use crate::check::FilesystemSnapshot;
use crate::error::ProviderError;

use super::FilesystemSizeProvider;

/// One line of the mount table
#[derive(Debug, Clone)]
pub struct MountEntry {
    pub device: String,
    pub path: PathBuf,
    pub fs_type: String,
}

/// Size provider backed by the host's mount table.
///
/// Network filesystems embed their name in the device field (an EFS mount
/// shows up as `fs-abc123.efs.amazonaws.com:/`), so a named filesystem is
/// resolved by substring match against the device of each mounted entry and
/// its used bytes read via statvfs on the mount point. A name that matches
/// zero or more than one entry is an error; the first match is never picked
/// silently.
pub struct MountTableProvider {
    table: PathBuf,
}

impl MountTableProvider {
    /// Read from the standard `/proc/mounts`
    pub fn new() -> Self {
        Self::with_table("/proc/mounts")
    }

    /// Read from an alternate mounts table
    pub fn with_table(table: impl Into<PathBuf>) -> Self {
        Self {
            table: table.into(),
        }
    }

    fn entries(&self) -> Result<Vec<MountEntry>, ProviderError> {
        let file = File::open(&self.table).map_err(|e| ProviderError::MountTable {
            path: self.table.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| ProviderError::MountTable {
                path: self.table.clone(),
                source: e,
            })?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                continue;
            }

            entries.push(MountEntry {
                device: parts[0].to_string(),
                path: PathBuf::from(parts[1]),
                fs_type: parts[2].to_string(),
            });
        }

        Ok(entries)
    }

    fn resolve(&self, name: &str) -> Result<MountEntry, ProviderError> {
        let matches: Vec<MountEntry> = self
            .entries()?
            .into_iter()
            .filter(|entry| entry.device.contains(name))
            .collect();

        match matches.len() {
            0 => Err(ProviderError::NotFound(name.to_string())),
            1 => Ok(matches.into_iter().next().unwrap()),
            _ => Err(ProviderError::Ambiguous {
                name: name.to_string(),
                matches: matches
                    .iter()
                    .map(|m| format!("{} on {}", m.device, m.path.display()))
                    .collect(),
            }),
        }
    }
}

impl Default for MountTableProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesystemSizeProvider for MountTableProvider {
    fn size_of(&self, name: &str) -> Result<FilesystemSnapshot, ProviderError> {
        let entry = self.resolve(name)?;
        tracing::debug!(
            "Resolved '{}' to {} ({}) mounted at {}",
            name,
            entry.device,
            entry.fs_type,
            entry.path.display()
        );

        let size_bytes = used_bytes(&entry.path)?;

        Ok(FilesystemSnapshot {
            name: name.to_string(),
            size_bytes,
        })
    }
}

/// Used bytes on the filesystem mounted at `path`
fn used_bytes(path: &Path) -> Result<u64, ProviderError> {
    let stat = statvfs(path).map_err(|e| ProviderError::Statvfs {
        path: path.to_path_buf(),
        source: e,
    })?;

    let block_size = stat.fragment_size() as u64;
    let total = stat.blocks() as u64 * block_size;
    let free = stat.blocks_free() as u64 * block_size;

    Ok(total - free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn mounts_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const TABLE: &str = "\
fs-abc123.efs.amazonaws.com:/ /mnt/efs nfs4 rw,relatime 0 0
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid 0 0
";

    #[test]
    fn test_resolve_unique_match() {
        let fixture = mounts_fixture(TABLE);
        let provider = MountTableProvider::with_table(fixture.path());

        let entry = provider.resolve("fs-abc123").unwrap();

        assert_eq!(entry.path, PathBuf::from("/mnt/efs"));
        assert_eq!(entry.fs_type, "nfs4");
    }

    #[test]
    fn test_resolve_no_match() {
        let fixture = mounts_fixture(TABLE);
        let provider = MountTableProvider::with_table(fixture.path());

        let result = provider.resolve("fs-does-not-exist");

        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[test]
    fn test_resolve_ambiguous_match_is_rejected() {
        let fixture = mounts_fixture(
            "fs-abc123.efs.amazonaws.com:/ /mnt/efs nfs4 rw 0 0\n\
             fs-abc123.efs.amazonaws.com:/home /mnt/efs-home nfs4 rw 0 0\n",
        );
        let provider = MountTableProvider::with_table(fixture.path());

        match provider.resolve("fs-abc123") {
            Err(ProviderError::Ambiguous { matches, .. }) => assert_eq!(matches.len(), 2),
            other => panic!("Expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_table_errors() {
        let provider = MountTableProvider::with_table("/nonexistent/mounts/12345");
        assert!(matches!(
            provider.resolve("anything"),
            Err(ProviderError::MountTable { .. })
        ));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let fixture = mounts_fixture("garbage\n\nfs-x:/ /mnt/x nfs4 rw 0 0\n");
        let provider = MountTableProvider::with_table(fixture.path());

        let entries = provider.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].device, "fs-x:/");
    }

    #[test]
    fn test_size_of_reads_statvfs() {
        // Point the fixture's mount path at the real root so statvfs works
        let fixture = mounts_fixture("/dev/sda1 / ext4 rw 0 0\n");
        let provider = MountTableProvider::with_table(fixture.path());

        let snapshot = provider.size_of("sda1").unwrap();

        assert_eq!(snapshot.name, "sda1");
        assert!(snapshot.size_bytes > 0);
    }
}
