//! `themeConfig.socialLinks`: external profile links.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.socialLinks]]
//! icon = "github"
//! link = "https://github.com/bavix/gripmock"
//!
//! [[themeConfig.socialLinks]]
//! icon = { svg = '<svg role="img" viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>' }
//! link = "https://hub.docker.com/r/bavix/gripmock"
//! ariaLabel = "Docker Hub"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const FIELD: FieldPath = FieldPath::new("themeConfig.socialLinks");

/// Icon identifiers shipped with the default theme.
pub const KNOWN_ICONS: &[&str] = &[
    "bluesky",
    "discord",
    "facebook",
    "github",
    "gitlab",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "slack",
    "telegram",
    "twitter",
    "x",
    "youtube",
];

/// Either a named theme icon or inline SVG markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialIcon {
    Named(String),
    Svg { svg: String },
}

impl SocialIcon {
    /// Accessible label fallback for this icon.
    pub fn label(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Svg { .. } => "social link",
        }
    }
}

/// A link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon,
            link: link.into(),
            aria_label: None,
        }
    }

    /// Explicit label, falling back to the icon's.
    pub fn label(&self) -> &str {
        self.aria_label
            .as_deref()
            .unwrap_or_else(|| self.icon.label())
    }
}

/// Validate every social link.
pub fn validate_social_links(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    for (i, social) in links.iter().enumerate() {
        let field = FIELD.index(i);

        match url::Url::parse(&social.link) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => diag.error(
                field.key("link"),
                format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
            ),
            Err(err) => diag.error_with_hint(
                field.key("link"),
                format!("invalid URL `{}`: {err}", social.link),
                "use an absolute URL like https://github.com/org/repo",
            ),
        }

        match &social.icon {
            SocialIcon::Named(name) if !KNOWN_ICONS.contains(&name.as_str()) => diag.warn(
                field.key("icon"),
                format!("unknown icon `{name}`, it will render as a plain label"),
            ),
            SocialIcon::Svg { svg } if !svg.trim_start().starts_with("<svg") => {
                diag.error(field.key("icon.svg"), "inline icon must be an <svg> element")
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_both_icon_forms() {
        let config = test_parse_config(
            r#"[[themeConfig.socialLinks]]
icon = "github"
link = "https://github.com/bavix/gripmock"

[[themeConfig.socialLinks]]
icon = { svg = '<svg viewBox="0 0 24 24"></svg>' }
link = "https://hub.docker.com/r/bavix/gripmock"
ariaLabel = "Docker Hub"
"#,
        );
        let links = &config.theme_config.social_links;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].icon, SocialIcon::Named("github".into()));
        assert_eq!(links[0].label(), "github");
        assert!(matches!(&links[1].icon, SocialIcon::Svg { svg } if svg.starts_with("<svg")));
        assert_eq!(links[1].label(), "Docker Hub");
    }

    #[test]
    fn test_validate() {
        let links = vec![
            SocialLink::new(SocialIcon::Named("github".into()), "https://github.com/bavix"),
            SocialLink::new(SocialIcon::Named("myspace".into()), "https://myspace.com/x"),
            SocialLink::new(SocialIcon::Svg { svg: "<div/>".into() }, "ftp://x.dev"),
            SocialLink::new(SocialIcon::Named("x".into()), "not a url"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_social_links(&links, &mut diag);

        let errors: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            errors,
            [
                "themeConfig.socialLinks[2].link",
                "themeConfig.socialLinks[2].icon.svg",
                "themeConfig.socialLinks[3].link",
            ]
        );
        let warnings: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warnings, ["themeConfig.socialLinks[1].icon"]);
    }
}
