/// Checks if a color string is a `#RGB` or `#RRGGBB` hex color.
///
/// This is the only syntactic check applied to user input: a manually typed
/// color is accepted into a configuration only when this returns `true`.
pub fn is_valid_hex(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_hex_accepts_six_and_three_digits() {
        assert!(is_valid_hex("#3B82F6"));
        assert!(is_valid_hex("#3b82f6"));
        assert!(is_valid_hex("#fff"));
        assert!(is_valid_hex("#A1c"));
    }

    #[test]
    fn test_is_valid_hex_rejects_malformed() {
        assert!(!is_valid_hex("3B82F6")); // No hash
        assert!(!is_valid_hex("#3B82F")); // 5 digits
        assert!(!is_valid_hex("#GGGGGG"));
        assert!(!is_valid_hex("#FFFFFFFF")); // Alpha is not accepted
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#"));
        assert!(!is_valid_hex(" #fff"));
        assert!(!is_valid_hex("#fff "));
    }

    #[test]
    fn test_is_valid_hex_rejects_non_ascii_digits() {
        assert!(!is_valid_hex("#١٢٣"));
    }
}
