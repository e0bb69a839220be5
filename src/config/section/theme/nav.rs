//! `themeConfig.nav`: flat top-level navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/introduction/overview"
//! activeMatch = "^/guide/"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::url::{is_external_link, normalize_route};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("nav item `{text}` has an empty link")]
    EmptyLink { text: String },
}

/// Leaf navigation link with display text.
///
/// Deserializing goes through [`NavItem::new`], so an empty link fails to
/// parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawNavItem")]
pub struct NavItem {
    pub text: String,

    /// Absolute external URL or internal route path. Never empty.
    pub link: String,

    /// Regex over the current route deciding when this item is highlighted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNavItem {
    text: String,
    link: String,
    #[serde(default)]
    active_match: Option<String>,
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = NavError;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        let item = Self::new(raw.text, raw.link)?;
        Ok(Self {
            active_match: raw.active_match,
            ..item
        })
    }
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Result<Self, NavError> {
        let text = text.into();
        let link = link.into();
        if link.trim().is_empty() {
            return Err(NavError::EmptyLink { text });
        }
        Ok(Self {
            text,
            link,
            active_match: None,
        })
    }

    pub fn with_active_match(mut self, pattern: impl Into<String>) -> Self {
        self.active_match = Some(pattern.into());
        self
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        is_external_link(&self.link)
    }

    /// Whether this item should be highlighted on `route`.
    ///
    /// Uses `activeMatch` when set (an invalid pattern never matches),
    /// otherwise compares normalized routes.
    pub fn is_active(&self, route: &str) -> bool {
        if let Some(pattern) = &self.active_match {
            return Regex::new(pattern).is_ok_and(|re| re.is_match(route));
        }
        !self.is_external() && normalize_route(&self.link) == normalize_route(route)
    }

    /// Validate the item at `field`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.link.trim().is_empty() {
            diag.error_with_hint(
                field.key("link"),
                format!("link of `{}` is empty", self.text),
                "use a route like \"/guide/\" or an absolute URL",
            );
        }
        if self.text.trim().is_empty() {
            diag.warn(field.key("text"), "item has no display text");
        }
        if let Some(pattern) = &self.active_match
            && let Err(err) = Regex::new(pattern)
        {
            diag.error(
                field.key("activeMatch"),
                format!("invalid regex `{pattern}`: {err}"),
            );
        }
    }
}

/// Validate the flat nav list.
pub fn validate_nav(items: &[NavItem], diag: &mut ConfigDiagnostics) {
    let field = FieldPath::new("themeConfig.nav");
    for (i, item) in items.iter().enumerate() {
        item.validate(&field.index(i), diag);
    }
}
