//! HTML helpers for emitting head tags and navigation markup.

use std::borrow::Cow;

/// Entity for a character that is special in text or attribute context.
#[inline]
fn entity(c: char) -> Option<&'static str> {
    Some(match c {
        '<' => "&lt;",
        '>' => "&gt;",
        '&' => "&amp;",
        '"' => "&quot;",
        '\'' => "&#39;",
        _ => return None,
    })
}

/// Escape text content. Borrows when nothing needs escaping.
///
/// ```
/// use quire::utils::html::escape;
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(|c: char| entity(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match entity(c) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a double-quoted attribute value.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s)
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements with no content and no closing tag. Case-insensitive.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|name| name.eq_ignore_ascii_case(tag))
}

/// Elements whose content is emitted unescaped. Case-insensitive.
pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|name| name.eq_ignore_ascii_case(tag))
}

/// Check that a tag name is a plain ASCII element name (`meta`, `h1`, `my-tag`).
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
