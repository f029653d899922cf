pub mod check;
pub mod scan;

use crate::error::{QuotamonError, Result};
use crate::scanner::ErrorPolicy;

/// Parse a traversal error policy name from the CLI
pub fn parse_policy(name: &str) -> Result<ErrorPolicy> {
    match name.to_lowercase().as_str() {
        "skip" => Ok(ErrorPolicy::Skip),
        "abort" => Ok(ErrorPolicy::Abort),
        _ => Err(QuotamonError::InvalidArgument(format!(
            "Unknown error policy: {}. Valid options: skip, abort",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy_skip() {
        assert!(matches!(parse_policy("skip"), Ok(ErrorPolicy::Skip)));
        assert!(matches!(parse_policy("SKIP"), Ok(ErrorPolicy::Skip)));
    }

    #[test]
    fn test_parse_policy_abort() {
        assert!(matches!(parse_policy("abort"), Ok(ErrorPolicy::Abort)));
    }

    #[test]
    fn test_parse_policy_invalid() {
        assert!(parse_policy("panic").is_err());
    }
}
