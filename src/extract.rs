// Field extraction - Pull values out of shell-style `key=value` lines

/// Does the line, ignoring leading whitespace, begin with `keyword`?
///
/// Plain prefix match: `name` also matches `namespace`.
pub fn starts_with(line: &str, keyword: &str) -> bool {
    line.trim_start().starts_with(keyword)
}

/// Text between the first `a` and the last `b` in `orig`, or `""` when either is
/// missing or the last `b` comes before the end of the first `a`.
pub fn between<'a>(orig: &'a str, a: &str, b: &str) -> &'a str {
    let Some(start) = orig.find(a).map(|pos| pos + a.len()) else {
        return "";
    };
    match orig.rfind(b) {
        Some(end) if end >= start => &orig[start..end],
        _ => "",
    }
}

/// Contents of the outermost `"..."` pair, falling back to `'...'`
pub fn between_quotes(orig: &str) -> &str {
    ["\"", "'"]
        .iter()
        .map(|quote| between(orig, quote, quote))
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

/// Quoted value, or the trimmed text after the only `=` on the line.
pub fn between_quotes_or_after_equals(orig: &str) -> String {
    let quoted = between_quotes(orig);
    if !quoted.is_empty() {
        return quoted.to_string();
    }
    if orig.matches('=').count() == 1 {
        if let Some((_, value)) = orig.split_once('=') {
            return value.trim().to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_ignores_indentation() {
        assert!(starts_with("    pkgdesc='x'", "pkgdesc"));
        assert!(starts_with("\tpkgdesc='x'", "pkgdesc"));
        assert!(!starts_with("# pkgdesc='x'", "pkgdesc"));
        assert!(!starts_with("PKGDESC='x'", "pkgdesc"));
    }

    #[test]
    fn test_starts_with_is_prefix_only() {
        // Inherited ambiguity: no word boundary check
        assert!(starts_with("_namespace=foo", "_name"));
    }

    #[test]
    fn test_between() {
        assert_eq!(between("package_foo() {", "_", "("), "foo");
        assert_eq!(between("(a b c)", "(", ")"), "a b c");
        assert_eq!(between("no markers", "(", ")"), "");
        assert_eq!(between(") before (", "(", ")"), "");
    }

    #[test]
    fn test_between_quotes_prefers_double() {
        assert_eq!(between_quotes(r#"pkgdesc="it's fine""#), "it's fine");
        assert_eq!(between_quotes("pkgdesc='single'"), "single");
        assert_eq!(between_quotes("pkgdesc=bare"), "");
    }

    #[test]
    fn test_quoted_and_bare_values_agree() {
        assert_eq!(between_quotes_or_after_equals(r#"key="value""#), "value");
        assert_eq!(between_quotes_or_after_equals("key=value"), "value");
        assert_eq!(between_quotes_or_after_equals("key = value  "), "value");
    }

    #[test]
    fn test_no_value_is_empty() {
        assert_eq!(between_quotes_or_after_equals("key"), "");
        assert_eq!(between_quotes_or_after_equals("a=b=c"), "");
        assert_eq!(between_quotes_or_after_equals(""), "");
    }

    #[test]
    fn test_lone_quote_falls_through_to_equals() {
        assert_eq!(between_quotes_or_after_equals(r#"key="open"#), r#""open"#);
    }
}
