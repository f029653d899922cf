/// Binary unit suffixes, each step ×1024 from the previous.
pub const UNITS: &[&str] = &["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Format a byte count in human-readable binary units.
///
/// Divides by 1024 until the value drops below 1024 or the unit table runs
/// out, then renders with `rounding` decimal places. Sign is preserved.
/// Values past the table (beyond 1024^8) clamp to the largest unit instead
/// of being unrepresentable.
pub fn format_size(bytes: i128, rounding: usize) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value.abs() >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.*}{}B", rounding, value, UNITS[unit])
}

/// Parse a size string like "1GB" or "1536" into bytes
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();

    let (num_str, unit) = if s.ends_with("TB") {
        (&s[..s.len() - 2], 1024u64.pow(4))
    } else if s.ends_with("GB") {
        (&s[..s.len() - 2], 1024u64.pow(3))
    } else if s.ends_with("MB") {
        (&s[..s.len() - 2], 1024u64.pow(2))
    } else if s.ends_with("KB") {
        (&s[..s.len() - 2], 1024u64)
    } else if s.ends_with('B') {
        (&s[..s.len() - 1], 1u64)
    } else {
        (s.as_str(), 1u64)
    };

    num_str
        .trim()
        .parse::<f64>()
        .ok()
        .map(|n| (n * unit as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0, 1), "0.0B");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(512, 0), "512B");
        assert_eq!(format_size(1023, 1), "1023.0B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1536, 1), "1.5KB");
        assert_eq!(format_size(1024, 2), "1.00KB");
    }

    #[test]
    fn test_format_size_negative() {
        assert_eq!(format_size(-2048, 0), "-2KB");
        assert_eq!(format_size(-1536, 1), "-1.5KB");
    }

    #[test]
    fn test_format_size_gigabytes() {
        assert_eq!(format_size(1024 * 1024 * 1024, 1), "1.0GB");
        let gib = 1024i128 * 1024 * 1024;
        assert_eq!(format_size(gib + gib / 2, 1), "1.5GB");
    }

    #[test]
    fn test_format_size_largest_units() {
        assert_eq!(format_size(1024i128.pow(8), 1), "1.0YB");
        assert_eq!(format_size(1024i128.pow(7), 0), "1ZB");
    }

    #[test]
    fn test_format_size_clamps_past_table() {
        // 1024^9 has no unit of its own; it renders as 1024 of the largest
        assert_eq!(format_size(1024i128.pow(9), 1), "1024.0YB");
        assert_eq!(format_size(5 * 1024i128.pow(9), 0), "5120YB");
    }

    #[test]
    fn test_format_size_rounding_precision() {
        assert_eq!(format_size(1500, 3), "1.465KB");
        assert_eq!(format_size(1500, 0), "1KB");
    }

    #[test]
    fn test_parse_size_plain_number() {
        assert_eq!(parse_size("1024"), Some(1024));
        assert_eq!(parse_size("0"), Some(0));
    }

    #[test]
    fn test_parse_size_with_units() {
        assert_eq!(parse_size("1KB"), Some(1024));
        assert_eq!(parse_size("1MB"), Some(1048576));
        assert_eq!(parse_size("1GB"), Some(1073741824));
        assert_eq!(parse_size("1TB"), Some(1099511627776));
    }

    #[test]
    fn test_parse_size_decimal() {
        assert_eq!(parse_size("1.5GB"), Some(1610612736));
    }

    #[test]
    fn test_parse_size_case_insensitive() {
        assert_eq!(parse_size("1kb"), Some(1024));
        assert_eq!(parse_size("1Kb"), Some(1024));
    }

    #[test]
    fn test_parse_size_invalid() {
        assert_eq!(parse_size("invalid"), None);
        assert_eq!(parse_size("abc KB"), None);
    }
}
