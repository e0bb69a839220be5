//! English plural suffixes for log and report lines.

/// `""` for exactly one, `"s"` otherwise (including zero).
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `"1 link"`, `"3 broken links"`.
///
/// Only the last word of `noun` is pluralized.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
