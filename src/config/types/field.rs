//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config field, e.g. `themeConfig.sidebar[0].items[1].link`.
///
/// Static section paths are borrowed; paths into lists are built at
/// validation time with [`FieldPath::key`] and [`FieldPath::index`].
///
/// # Example
///
/// ```
/// use quire::FieldPath;
/// let path = FieldPath::new("themeConfig.sidebar").index(0).key("items").index(1);
/// assert_eq!(path.as_str(), "themeConfig.sidebar[0].items[1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Child field `self.key`.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(Cow::Owned(key.to_string()))
        } else {
            Self(Cow::Owned(format!("{}.{key}", self.0)))
        }
    }

    /// List element `self[i]`.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
