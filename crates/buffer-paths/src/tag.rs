use buffer_paths_json_pointer::leading_digits;

/// Marker that precedes the buffer index in a buffer-reference string.
pub const BUFFER_REFERENCE_PREFIX: &str = "@buffer_reference@";

pub fn buffer_reference_prefix() -> &'static str {
    BUFFER_REFERENCE_PREFIX
}

/// True when `s` is the prefix followed by at least one more byte.
///
/// The bare prefix is not a reference.
pub fn is_buffer_reference(s: &str) -> bool {
    s.len() > BUFFER_REFERENCE_PREFIX.len() && s.starts_with(BUFFER_REFERENCE_PREFIX)
}

/// Buffer index carried by a reference string.
///
/// Reads the leading digits after the prefix and ignores anything that
/// follows, so `"@buffer_reference@3abc"` is buffer 3. No digits gives 0;
/// a digit run too large for `usize` saturates to `usize::MAX`.
///
/// Only meaningful when [`is_buffer_reference`] holds for `s`.
pub fn buffer_index(s: &str) -> usize {
    let rest = s.get(BUFFER_REFERENCE_PREFIX.len()..).unwrap_or("");
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(usize::MAX)
}

/// Reference string for buffer `index`.
pub fn buffer_reference(index: usize) -> String {
    format!("{BUFFER_REFERENCE_PREFIX}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_alone_is_not_a_reference() {
        assert!(!is_buffer_reference("@buffer_reference@"));
        assert!(!is_buffer_reference(buffer_reference_prefix()));
    }

    #[test]
    fn recognizes_references() {
        assert!(is_buffer_reference("@buffer_reference@0"));
        assert!(is_buffer_reference("@buffer_reference@12"));
        assert!(!is_buffer_reference("not_a_ref"));
        assert!(!is_buffer_reference("@buffer_referenc@1"));
        assert!(!is_buffer_reference(" @buffer_reference@1"));
        assert!(!is_buffer_reference(""));
    }

    #[test]
    fn index_parsing() {
        assert_eq!(buffer_index("@buffer_reference@0"), 0);
        assert_eq!(buffer_index("@buffer_reference@42"), 42);
        assert_eq!(buffer_index("@buffer_reference@007"), 7);
    }

    #[test]
    fn index_ignores_trailing_garbage() {
        assert_eq!(buffer_index("@buffer_reference@3abc"), 3);
        assert_eq!(buffer_index("@buffer_reference@x"), 0);
        assert_eq!(buffer_index("@buffer_reference@\x0B3"), 3);
    }

    #[test]
    fn index_saturates_on_overflow() {
        assert_eq!(
            buffer_index("@buffer_reference@999999999999999999999999999999"),
            usize::MAX
        );
    }

    #[test]
    fn index_on_short_non_reference_does_not_panic() {
        assert_eq!(buffer_index("short"), 0);
        // Byte 18 falls inside the last two-byte character.
        let straddling = format!("a{}", "\u{e9}".repeat(9));
        assert_eq!(buffer_index(&straddling), 0);
    }

    #[test]
    fn formats_references() {
        assert_eq!(buffer_reference(0), "@buffer_reference@0");
        assert_eq!(buffer_reference(15), "@buffer_reference@15");
        assert!(is_buffer_reference(&buffer_reference(3)));
        assert_eq!(buffer_index(&buffer_reference(3)), 3);
    }
}
