use std::path::Path;

use crate::error::NotificationError;

/// Maps an over-quota directory to the address of the user to notify.
///
/// Injectable so the shipped directory-name convention can be swapped for a
/// lookup table or a directory service without touching the check logic.
pub trait RecipientResolver: Send + Sync {
    fn resolve(&self, dir: &Path) -> Result<String, NotificationError>;
}

/// The shipped convention: the final path component IS the user's email
/// address (e.g. `/mnt/efs/alice@x.com`). A component that is empty, not
/// valid UTF-8, or not address-shaped is an error rather than a silent skip.
#[derive(Debug, Default)]
pub struct DirNameResolver;

impl DirNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl RecipientResolver for DirNameResolver {
    fn resolve(&self, dir: &Path) -> Result<String, NotificationError> {
        dir.file_name()
            .and_then(|name| name.to_str())
            .filter(|name| name.contains('@'))
            .map(String::from)
            .ok_or_else(|| NotificationError::InvalidRecipient(dir.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolves_dir_name_as_address() {
        let resolver = DirNameResolver::new();
        let email = resolver.resolve(Path::new("/mnt/efs/alice@x.com")).unwrap();
        assert_eq!(email, "alice@x.com");
    }

    #[test]
    fn test_trailing_slash_is_irrelevant() {
        let resolver = DirNameResolver::new();
        let email = resolver.resolve(Path::new("/mnt/efs/bob@x.com/")).unwrap();
        assert_eq!(email, "bob@x.com");
    }

    #[test]
    fn test_rejects_non_address_component() {
        let resolver = DirNameResolver::new();
        let result = resolver.resolve(Path::new("/mnt/efs/not-an-email"));
        assert!(matches!(
            result,
            Err(NotificationError::InvalidRecipient(_))
        ));
    }

    #[test]
    fn test_rejects_root() {
        let resolver = DirNameResolver::new();
        assert!(resolver.resolve(Path::new("/")).is_err());
    }

    #[test]
    fn test_custom_resolver_can_replace_convention() {
        struct Fixed;
        impl RecipientResolver for Fixed {
            fn resolve(&self, _dir: &Path) -> Result<String, NotificationError> {
                Ok("ops@x.com".to_string())
            }
        }

        let resolver = Fixed;
        let email = resolver.resolve(&PathBuf::from("/mnt/efs/u0001")).unwrap();
        assert_eq!(email, "ops@x.com");
    }
}
