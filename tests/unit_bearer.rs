use learnhub_auth::extract_bearer;
use proptest::prelude::*;

#[test]
fn test_extracts_trimmed_token() {
    assert_eq!(extract_bearer(Some("Bearer   abc123  ")), Some("abc123"));
}

#[test]
fn test_rejects_non_bearer_headers() {
    for header in [
        "",
        "Bearer",
        "Bearer ",
        "Bearer \t ",
        "Basic dXNlcjpwYXNz",
        "Bearerabc123",
        "Token abc123",
    ] {
        assert_eq!(extract_bearer(Some(header)), None, "header {header:?}");
    }
    assert_eq!(extract_bearer(None), None);
}

#[test]
fn test_rejects_multiline_token() {
    assert_eq!(extract_bearer(Some("Bearer abc\ndef")), None);
    assert_eq!(extract_bearer(Some("Bearer abc\r\n")), None);
}

#[test]
fn test_accepts_any_scheme_case() {
    for scheme in ["Bearer", "bearer", "BEARER", "bEaReR"] {
        let header = format!("{scheme} token");
        assert_eq!(extract_bearer(Some(&header)), Some("token"));
    }
}

proptest! {
    #[test]
    fn prop_token_is_recovered(token in "[A-Za-z0-9._-]{1,64}", lead in " {0,3}", gap in "[ \t]{1,4}", tail in " {0,3}") {
        let header = format!("{lead}Bearer{gap}{token}{tail}");
        prop_assert_eq!(extract_bearer(Some(&header)), Some(token.as_str()));
    }

    #[test]
    fn prop_result_is_trimmed_and_non_empty(header in "\\PC{0,80}") {
        if let Some(token) = extract_bearer(Some(&header)) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token, token.trim());
        }
    }
}
