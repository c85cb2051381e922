/// Human size strings (`"100M"`, `"1.5GiB"`, `"4096"`) to byte counts.
///
/// Bare `K M G T` are decimal (powers of 1000). `KB MB GB TB` and the IEC
/// `KiB MiB GiB TiB` are binary (powers of 1024), which is what most users
/// mean when they type "MB" into a disk tool. Matching is case-insensitive.
use thiserror::Error;

const KIB: u64 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeParseError {
    #[error("empty size string")]
    Empty,

    #[error("invalid numeric part in size string: {0}")]
    InvalidNumber(String),

    #[error("unknown size unit: {0} (supported: K, M, G, T, KB, MB, GB, TB, KiB, MiB, GiB, TiB)")]
    UnknownUnit(String),

    #[error("size does not fit in 64 bits: {0}")]
    TooLarge(String),
}

fn multiplier(unit: &str) -> Option<u64> {
    let m = match unit {
        "K" => 1_000,
        "M" => 1_000_u64.pow(2),
        "G" => 1_000_u64.pow(3),
        "T" => 1_000_u64.pow(4),
        "KB" | "KIB" => KIB,
        "MB" | "MIB" => KIB.pow(2),
        "GB" | "GIB" => KIB.pow(3),
        "TB" | "TIB" => KIB.pow(4),
        _ => return None,
    };
    Some(m)
}

/// Parse a size string into bytes. Fractions are truncated toward zero.
pub fn parse_size(input: &str) -> Result<u64, SizeParseError> {
    let s = input.trim().to_ascii_uppercase();
    if s.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let split = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| SizeParseError::InvalidNumber(input.trim().to_string()))?;

    let factor = if unit.is_empty() {
        1
    } else {
        multiplier(unit).ok_or_else(|| SizeParseError::UnknownUnit(unit.to_string()))?
    };

    let bytes = value * factor as f64;
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(SizeParseError::TooLarge(input.trim().to_string()));
    }
    Ok(bytes as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_bytes() {
        assert_eq!(parse_size("1024"), Ok(1024));
        assert_eq!(parse_size("0"), Ok(0));
        assert_eq!(parse_size("  512  "), Ok(512));
    }

    #[test]
    fn decimal_units() {
        assert_eq!(parse_size("1K"), Ok(1_000));
        assert_eq!(parse_size("10K"), Ok(10_000));
        assert_eq!(parse_size("1M"), Ok(1_000_000));
        assert_eq!(parse_size("100M"), Ok(100_000_000));
        assert_eq!(parse_size("1G"), Ok(1_000_000_000));
        assert_eq!(parse_size("2T"), Ok(2_000_000_000_000));
    }

    #[test]
    fn binary_units() {
        assert_eq!(parse_size("1KB"), Ok(1024));
        assert_eq!(parse_size("1KiB"), Ok(1024));
        assert_eq!(parse_size("10KB"), Ok(10_240));
        assert_eq!(parse_size("1MB"), Ok(1_048_576));
        assert_eq!(parse_size("1MiB"), Ok(1_048_576));
        assert_eq!(parse_size("1GiB"), Ok(1_073_741_824));
        assert_eq!(parse_size("1TB"), Ok(1_099_511_627_776));
    }

    #[test]
    fn fractional_values_are_truncated() {
        assert_eq!(parse_size("1.5M"), Ok(1_500_000));
        assert_eq!(parse_size("2.5GiB"), Ok(2_684_354_560));
        assert_eq!(parse_size("1.9"), Ok(1));
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(parse_size("1m"), Ok(1_000_000));
        assert_eq!(parse_size("1mib"), Ok(1_048_576));
        assert_eq!(parse_size("1Mib"), parse_size("1MiB"));
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(parse_size(""), Err(SizeParseError::Empty));
        assert_eq!(parse_size("   "), Err(SizeParseError::Empty));
        assert!(matches!(parse_size("abc"), Err(SizeParseError::InvalidNumber(_))));
        assert!(matches!(parse_size("invalid"), Err(SizeParseError::InvalidNumber(_))));
        assert!(matches!(parse_size("1.2.3"), Err(SizeParseError::InvalidNumber(_))));
        assert!(matches!(parse_size("-5M"), Err(SizeParseError::InvalidNumber(_))));
        assert_eq!(parse_size("1X"), Err(SizeParseError::UnknownUnit("X".into())));
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(matches!(parse_size("99999999999TB"), Err(SizeParseError::TooLarge(_))));
    }
}
