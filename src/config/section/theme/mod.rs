//! `themeConfig` section configuration.
//!
//! Everything the default theme reads while rendering a page.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.search]
//! provider = "local"
//!
//! [themeConfig.editLink]
//! pattern = "https://github.com/bavix/gripmock/edit/master/docs/:path"
//!
//! [themeConfig.footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2019-present"
//! ```
//!
//! `nav`, `sidebar` and `socialLinks` are documented in their modules.

mod nav;
mod sidebar;
mod social;

pub use nav::{NavError, NavItem, validate_nav};
pub use sidebar::{
    GroupId, Links, Sidebar, SidebarBuilder, SidebarError, SidebarGroup, SidebarItem, SidebarLink,
};
pub use social::{KNOWN_ICONS, SocialIcon, SocialLink, validate_social_links};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Placeholder substituted with the page's source path.
const PATH_PLACEHOLDER: &str = ":path";

/// Theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Site search backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,

    /// "Edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,

    /// Top navigation bar.
    pub nav: Vec<NavItem>,

    /// Sidebar groups.
    pub sidebar: Sidebar,

    /// External profile links.
    pub social_links: Vec<SocialLink>,

    /// Page footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_nav(&self.nav, diag);
        self.sidebar.validate(diag);
        validate_social_links(&self.social_links, diag);
        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(diag);
        }
    }
}

// ============================================================================
// search
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

/// Search backend, supplied by the host runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built at site build time.
    #[default]
    Local,
    /// Hosted Algolia DocSearch.
    Algolia,
}

// ============================================================================
// editLink
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLink {
    /// URL template, `:path` is replaced with the page's source path.
    pub pattern: String,

    /// Link text.
    #[serde(default = "EditLink::default_text")]
    pub text: String,
}

impl EditLink {
    const FIELD: FieldPath = FieldPath::new("themeConfig.editLink");

    fn default_text() -> String {
        "Edit this page".into()
    }

    /// Edit URL for a page source path such as `guide/stubs/json.md`.
    pub fn url_for(&self, relative_path: &str) -> String {
        self.pattern
            .replace(PATH_PLACEHOLDER, relative_path.trim_start_matches('/'))
    }

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.pattern.contains(PATH_PLACEHOLDER) {
            diag.error_with_hint(
                Self::FIELD.key("pattern"),
                "pattern has no `:path` placeholder",
                "e.g. https://github.com/org/repo/edit/main/docs/:path",
            );
        }
    }
}

// ============================================================================
// footer
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}
