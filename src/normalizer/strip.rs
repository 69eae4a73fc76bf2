//! Markup stripping for feed text.
//!
//! Removes `<...>` tag spans and trims the result. Entities are left as-is:
//! feed text has already been XML-decoded by the parser, and a surviving
//! literal like `&amp;` stays literal.

/// Remove every `<...>` span from `text` and trim surrounding whitespace.
///
/// A span is a `<` up to the nearest following `>`, with no nesting
/// awareness. A trailing `<` with no closing `>` is kept, which makes the
/// function idempotent: nothing a first pass leaves behind forms a tag on
/// a second pass.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_simple_tags() {
        assert_eq!(strip("<p>Hi</p>"), "Hi");
        assert_eq!(strip("Hello <b>World</b>"), "Hello World");
    }

    #[test]
    fn test_removes_tags_with_attributes() {
        assert_eq!(strip(r#"<a href="https://x">link</a> text"#), "link text");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(strip("  plain  "), "plain");
        assert_eq!(strip("<br/>  spaced  <br/>"), "spaced");
    }

    #[test]
    fn test_entities_not_decoded() {
        assert_eq!(strip("a &amp; b"), "a &amp; b");
        assert_eq!(strip("<p>&lt;escaped&gt;</p>"), "&lt;escaped&gt;");
    }

    #[test]
    fn test_unclosed_angle_bracket_kept() {
        assert_eq!(strip("1 < 2"), "1 < 2");
        assert_eq!(strip("tail <unclosed"), "tail <unclosed");
    }

    #[test]
    fn test_bracket_pair_spanning_text() {
        // `< b and c >` is a single span under the non-greedy grammar.
        assert_eq!(strip("a < b and c > d"), "a  d");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "<p>Hi</p>",
            "1 < 2 > 3",
            "plain",
            "tail <unclosed",
            "<<double>>",
            "a &amp; <i>b</i>",
        ] {
            let once = strip(s);
            assert_eq!(strip(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip(""), "");
    }
}
