//! Link classification.

use crate::utils::url::{is_external_link, is_localhost_url};

/// Syntactic kind of a link destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// URL on a loopback or unspecified host (`http://localhost:4771/ping`).
    Localhost(&'a str),
    /// Any other URL with a scheme (`https://`, `mailto:`, ...).
    External(&'a str),
    /// Anchor on the current page. Value is the anchor without `#`.
    Fragment(&'a str),
    /// Site-root path (`/guide/stubs/json`).
    SiteRoot(&'a str),
    /// Path relative to the current file (`./yaml.md`, `../index`).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            if is_localhost_url(link) {
                Self::Localhost(link)
            } else {
                Self::External(link)
            }
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            LinkKind::parse("http://localhost:4771/ping"),
            LinkKind::Localhost("http://localhost:4771/ping")
        );
        assert_eq!(
            LinkKind::parse("http://127.0.0.1:4770/api"),
            LinkKind::Localhost("http://127.0.0.1:4770/api")
        );
        assert_eq!(
            LinkKind::parse("https://github.com/bavix/gripmock"),
            LinkKind::External("https://github.com/bavix/gripmock")
        );
        assert_eq!(
            LinkKind::parse("mailto:team@example.com"),
            LinkKind::External("mailto:team@example.com")
        );
        assert_eq!(LinkKind::parse("#install"), LinkKind::Fragment("install"));
        assert_eq!(LinkKind::parse("./#"), LinkKind::Fragment(""));
        assert_eq!(
            LinkKind::parse("/guide/stubs/json"),
            LinkKind::SiteRoot("/guide/stubs/json")
        );
        assert_eq!(
            LinkKind::parse("../api/overview.md#rest"),
            LinkKind::FileRelative("../api/overview.md#rest")
        );
    }
}
