//! `Authorization` header parsing.

const SCHEME: &str = "Bearer";

/// Whitespace as the header grammar defines it: Unicode `White_Space`
/// without U+0085 (NEL), plus U+FEFF (BOM).
fn is_separator(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Extracts the token from a raw `Authorization` header value.
///
/// Accepts `<ws>* Bearer <ws>+ <token>` with the scheme in any letter case
/// and returns the token with surrounding whitespace trimmed. Returns `None`
/// for a missing header, another scheme, a missing separator, an empty or
/// whitespace-only token, or a token spanning more than one line.
///
/// ```
/// use learnhub_auth::extract_bearer;
///
/// assert_eq!(extract_bearer(Some("Bearer   abc123  ")), Some("abc123"));
/// assert_eq!(extract_bearer(Some("bearer abc123")), Some("abc123"));
/// assert_eq!(extract_bearer(Some("Basic dXNlcjpwYXNz")), None);
/// assert_eq!(extract_bearer(Some("Bearer    ")), None);
/// assert_eq!(extract_bearer(None), None);
/// ```
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let value = header?.trim_start_matches(is_separator);

    let scheme = value.get(..SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }

    let rest = &value[SCHEME.len()..];
    if !rest.starts_with(is_separator) {
        return None;
    }

    let candidate = rest.trim_start_matches(is_separator);
    if candidate.contains(is_line_terminator) {
        return None;
    }

    let token = candidate.trim_end_matches(is_separator);
    (!token.is_empty()).then_some(token)
}
