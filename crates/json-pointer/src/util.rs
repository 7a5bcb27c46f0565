use crate::JsonPointerError;

/// Unescapes one JSON Pointer token component.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one JSON Pointer token component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse RFC6901 absolute pointer into unescaped path components.
///
/// Examples:
/// - `"" -> []`
/// - `"/" -> [""]`
/// - `"/a~1b/~0k/0" -> ["a/b", "~k", "0"]`
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::NotAbsolute);
    }
    Ok(pointer.split('/').skip(1).map(unescape_component).collect())
}

/// Format unescaped path components into RFC6901 pointer.
pub fn format_json_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Returns the run of ASCII digits a numeric-prefix parser would consume.
///
/// Leading whitespace (C `isspace`, so vertical tab included) and a single
/// `+` are skipped; everything after the digit run is ignored. The result
/// is empty when no digits follow.
pub fn leading_digits(step: &str) -> &str {
    let rest = step.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Reads an array index from the leading digits of `step`.
///
/// `"12"`, `"12abc"` and `" 12"` all give `Some(12)`. Returns `None` when
/// there are no leading digits or the value does not fit in `usize`.
pub fn parse_index(step: &str) -> Option<usize> {
    let digits = leading_digits(step);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_escapes_are_decoded_once() {
        // `~01` is an escaped `~` followed by a literal `1`, not a slash.
        assert_eq!(
            parse_json_pointer("/state/~01/buf~1x").unwrap(),
            vec!["state", "~1", "buf/x"]
        );
        assert_eq!(
            format_json_pointer(&["state".to_string(), "~1".to_string(), "buf/x".to_string()]),
            "/state/~01/buf~1x"
        );
    }

    #[test]
    fn pointer_edge_shapes() {
        assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_json_pointer("//").unwrap(), vec!["", ""]);
        assert_eq!(
            parse_json_pointer("buffers/0"),
            Err(JsonPointerError::NotAbsolute)
        );
        assert_eq!(format_json_pointer(&[]), "");
    }

    #[test]
    fn leading_digits_stop_at_first_non_digit() {
        assert_eq!(leading_digits("123"), "123");
        assert_eq!(leading_digits("3abc"), "3");
        assert_eq!(leading_digits("  +42x"), "42");
        assert_eq!(leading_digits("\x0B\t3"), "3");
        assert_eq!(leading_digits("abc"), "");
        assert_eq!(leading_digits("-1"), "");
        assert_eq!(leading_digits(""), "");
    }

    #[test]
    fn parse_index_is_lenient_about_trailing_garbage() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index("1.5"), Some(1));
        assert_eq!(parse_index("9 lives"), Some(9));
        assert_eq!(parse_index("\x0B3"), Some(3));
        assert_eq!(parse_index("key"), None);
        assert_eq!(parse_index("-3"), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }
}
