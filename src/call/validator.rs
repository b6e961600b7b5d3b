//! Call string validation
//!
//! Syntax acceptance is a prefix check: a call must begin with the `CALL`
//! keyword followed by whitespace. The safety check is a coarse
//! case-insensitive deny-list scan over everything after that keyword; it
//! is a unit-testable contract, not a substitute for parameterized
//! execution.

/// Keywords and comment markers that disqualify a call string.
const DENIED_TOKENS: &[&str] = &[
    "DROP", "DELETE", "UPDATE", "INSERT", "CREATE", "ALTER", "TRUNCATE", "GRANT", "REVOKE", "--",
    "/*", "*/",
];

/// Strip a leading case-insensitive `CALL` token and the whitespace after
/// it. Returns the remainder, or None if the token is absent or not
/// followed by whitespace.
fn strip_call_prefix(s: &str) -> Option<&str> {
    let head = s.get(..4)?;
    if !head.eq_ignore_ascii_case("CALL") {
        return None;
    }
    let rest = &s[4..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    Some(rest.trim_start())
}

/// Check that a raw string is a syntactically acceptable procedure call.
///
/// The trimmed input must begin with the literal `CALL ` token
/// (case-insensitive, trailing whitespace required). Anything else,
/// including an empty string or a bare procedure name, is invalid.
pub fn is_valid_call(raw: &str) -> bool {
    strip_call_prefix(raw.trim()).is_some()
}

/// Extract the procedure identifier following the `CALL` keyword.
///
/// Applies the grammar `CALL\s+([A-Za-z_][A-Za-z0-9_]*)`. Returns None
/// for strings that fail [`is_valid_call`] or carry no identifier after
/// the keyword.
pub fn extract_procedure_name(raw: &str) -> Option<&str> {
    let rest = strip_call_prefix(raw.trim())?;

    let mut end = 0;
    for (i, c) in rest.char_indices() {
        let accepted = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }

    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// Check a call string against the deny list.
///
/// Everything outside the leading `CALL` token is scanned for denied
/// keywords and comment markers as case-insensitive substrings. The scan
/// is deliberately coarse: a legitimate parameter value containing a
/// denied keyword as a substring is rejected too.
pub fn is_safe_call(raw: &str) -> bool {
    let trimmed = raw.trim();
    let scan = strip_call_prefix(trimmed).unwrap_or(trimmed);
    let upper = scan.to_ascii_uppercase();
    !DENIED_TOKENS.iter().any(|token| upper.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_call_prefix() {
        assert!(is_valid_call("CALL sp_get_products(1)"));
        assert!(is_valid_call("call sp_get_products(1)"));
        assert!(is_valid_call("  CaLl sp_get_products(1)  "));
        assert!(is_valid_call("CALL\tsp_x()"));
    }

    #[test]
    fn test_invalid_call_prefix() {
        assert!(!is_valid_call(""));
        assert!(!is_valid_call("   "));
        assert!(!is_valid_call("sp_get_products(1)"));
        assert!(!is_valid_call("SELECT 1"));
        assert!(!is_valid_call("CALLsp_x()"));
        assert!(!is_valid_call("CALL"));
    }

    #[test]
    fn test_extract_procedure_name() {
        assert_eq!(
            extract_procedure_name("CALL sp_check_cpf(1,2)"),
            Some("sp_check_cpf")
        );
        assert_eq!(extract_procedure_name("call  Sp_Signup('a','b')"), Some("Sp_Signup"));
        assert_eq!(extract_procedure_name("CALL _private()"), Some("_private"));
        assert_eq!(extract_procedure_name("SELECT 1"), None);
        assert_eq!(extract_procedure_name("CALL 123bad()"), None);
        assert_eq!(extract_procedure_name("CALL ()"), None);
    }

    #[test]
    fn test_safe_call_accepts_plain_calls() {
        assert!(is_safe_call("CALL sp_get_products(1, 'shoes')"));
        assert!(is_safe_call("CALL sp_login('user', 'pass')"));
    }

    #[test]
    fn test_safe_call_rejects_denied_keywords() {
        for kw in [
            "DROP", "DELETE", "UPDATE", "INSERT", "CREATE", "ALTER", "TRUNCATE", "GRANT", "REVOKE",
        ] {
            let call = format!("CALL sp_x('{}')", kw.to_lowercase());
            assert!(!is_safe_call(&call), "expected {} to be denied", kw);
        }
    }

    #[test]
    fn test_safe_call_rejects_comment_markers() {
        assert!(!is_safe_call("CALL sp_x() -- trailing"));
        assert!(!is_safe_call("CALL sp_x(/* inline */ 1)"));
        assert!(!is_safe_call("CALL sp_x(1) */"));
    }

    #[test]
    fn test_safe_call_substring_false_positive() {
        // Documented behavior: a last name containing a denied keyword as
        // a substring is rejected.
        assert!(!is_safe_call("CALL sp_signup('Ulysses', 'Grant')"));
        assert!(!is_safe_call("CALL sp_create_user('x')"));
    }

    #[test]
    fn test_safe_call_ignores_leading_call_token() {
        // The CALL keyword itself is not scanned; only what follows.
        assert!(is_safe_call("CALL sp_x()"));
    }
}
