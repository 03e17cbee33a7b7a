const UNITS: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];

/// Renders a byte count with 1024-based units, trimming trailing zeros
/// ("1.5 KB", not "1.50 KB").
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / (1u64 << (10 * exponent)) as f64;

    let formatted = format!("{:.2}", value);
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", formatted, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn below_one_kilobyte() {
        assert_eq!(format_bytes(500), "500 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
    }

    #[test]
    fn whole_units_trim_decimals() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8 GB");
    }

    #[test]
    fn fractional_units() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 + 256), "1.25 KB");
    }

    #[test]
    fn clamps_to_largest_unit() {
        assert!(format_bytes(u64::MAX).ends_with(" PB"));
    }
}
