// src/core/html.rs
//
// Pulls a JavaScript object literal assigned to a `window[...]` slot out of a
// page. The regex only finds where the assignment starts; the end is found by
// a brace scan that respects JSON strings, so a "};" inside a string value
// can't cut the object short.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `window['NAME'] =` / `window["NAME"]=` and captures NAME.
static WINDOW_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"window\[\s*['"]([A-Za-z0-9_$]+)['"]\s*\]\s*=\s*"#)
        .unwrap_or_else(|e| panic!("window assignment regex: {e}"))
});

/// Return the `{...}` literal assigned to `window['<var>']`, if present.
pub fn window_object<'a>(doc: &'a str, var: &str) -> Option<&'a str> {
    let start = WINDOW_ASSIGN
        .captures_iter(doc)
        .find(|c| c.get(1).is_some_and(|m| m.as_str() == var))?
        .get(0)?
        .end();

    let rest = &doc[start..];
    if !rest.starts_with('{') {
        return None;
    }
    let len = balanced_object_len(rest)?;
    Some(&rest[..len])
}

/// Byte length of the object starting at `s[0] == '{'`, or None if unterminated.
fn balanced_object_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_str = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_str {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_str = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_str = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_object_and_ignores_braces_in_strings() {
        let doc = r#"<script>window['other']={"x":1};window['__espnfitt__']={"a":"};}","b":{"c":[1,2]}};</script>"#;
        let obj = window_object(doc, "__espnfitt__").unwrap();
        assert_eq!(obj, r#"{"a":"};}","b":{"c":[1,2]}}"#);
    }

    #[test]
    fn double_quotes_and_spacing() {
        let doc = r#"window[ "__espnfitt__" ] = {"k":"v\"}"};"#;
        assert_eq!(window_object(doc, "__espnfitt__"), Some(r#"{"k":"v\"}"}"#));
    }

    #[test]
    fn missing_or_unterminated() {
        assert_eq!(window_object("<html></html>", "__espnfitt__"), None);
        assert_eq!(window_object(r#"window['__espnfitt__']={"a":1"#, "__espnfitt__"), None);
    }
}
