//! Call string sanitation
//!
//! Strips SQL comments and collapses whitespace. Runs only on calls that
//! already passed validation; no safety re-check happens here.

/// Sanitize a call string: drop `--` line comments and `/* ... */` block
/// comments, then collapse whitespace runs to single spaces and trim.
///
/// Idempotent: sanitizing an already-sanitized string is a no-op.
pub fn sanitize(raw: &str) -> String {
    let stripped = strip_comments(raw);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove comments, leaving surrounding text untouched. Line comments run
/// to end of line (the newline itself survives so whitespace collapsing
/// still separates tokens); block comments are removed outright.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' && chars.peek() == Some(&'-') {
            chars.next();
            for next in chars.by_ref() {
                if next == '\n' {
                    out.push('\n');
                    break;
                }
            }
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut prev = '\0';
            for next in chars.by_ref() {
                if prev == '*' && next == '/' {
                    break;
                }
                prev = next;
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(sanitize("CALL  foo( 1,\n 2 )"), "CALL foo( 1, 2 )");
        assert_eq!(sanitize("  CALL foo()  "), "CALL foo()");
        assert_eq!(sanitize("CALL\t\tfoo(\r\n1)"), "CALL foo( 1)");
    }

    #[test]
    fn test_strips_line_comments() {
        assert_eq!(sanitize("CALL foo(1) -- comment"), "CALL foo(1)");
        assert_eq!(sanitize("CALL foo(1) -- c\n, 2"), "CALL foo(1) , 2");
    }

    #[test]
    fn test_strips_block_comments() {
        assert_eq!(sanitize("CALL foo(/* hidden */1)"), "CALL foo(1)");
        assert_eq!(sanitize("CALL /* a\nb */ foo()"), "CALL foo()");
    }

    #[test]
    fn test_unterminated_comments() {
        assert_eq!(sanitize("CALL foo(1) -- runs off"), "CALL foo(1)");
        assert_eq!(sanitize("CALL foo(1) /* never closed"), "CALL foo(1)");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "CALL  foo( 1,\n 2 )",
            "CALL foo(/* x */ 1) -- y",
            "",
            "plain text",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_never_longer_than_comment_stripped_input() {
        let input = "CALL   foo(  1 ) /* pad */";
        assert!(sanitize(input).len() <= strip_comments(input).len());
    }
}
