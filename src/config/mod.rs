//! Site configuration management for `quire.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # one module per top-level table
//! │   ├── head       # head
//! │   ├── links      # ignoreDeadLinks
//! │   └── theme/     # themeConfig (nav, sidebar, socialLinks, ...)
//! ├── types/         # shared plumbing
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Process-wide read-only handle
//! └── mod.rs         # SiteConfig, load, validate
//! ```
//!
//! # Keys
//!
//! | Key               | Purpose                                          |
//! |-------------------|--------------------------------------------------|
//! | `title`           | Site title, suffix of every page title           |
//! | `description`     | Default `<meta name="description">`              |
//! | `base`            | Public path the site is served under             |
//! | `lang`            | Page language, passed through to the runtime     |
//! | `lastUpdated`     | Show the last-updated timestamp on pages         |
//! | `cleanUrls`       | Runtime flag for URLs without `.html`            |
//! | `srcDir`          | Markdown source directory (relative to root)     |
//! | `head`            | Ordered `<head>` injections                      |
//! | `ignoreDeadLinks` | Dead link checker exemptions                     |
//! | `themeConfig`     | Nav, sidebar, social links, search, footer       |
//!
//! The config is built once at startup and never mutated afterwards.

pub mod section;
pub mod types;
mod util;

pub use section::{
    DeadLinkExemption, ExemptPattern, HeadInjection, HeadTag, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};
pub use util::find_config_file;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{debug, log};

// ============================================================================
// root configuration
// ============================================================================

/// Everything `quire.toml` can say about a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Where the config was read from; empty for `from_str`.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory holding the config file.
    #[serde(skip)]
    pub root: PathBuf,

    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Public base path, with leading and trailing slash.
    pub base: String,

    /// Language code (e.g., "en-US"), read by the runtime only.
    pub lang: String,

    /// Show last-updated timestamps.
    pub last_updated: bool,

    /// Runtime flag: serve pages without the `.html` suffix.
    pub clean_urls: bool,

    /// Markdown source directory, relative to the project root.
    pub src_dir: PathBuf,

    /// Tags injected into every page's `<head>`, in order.
    pub head: HeadInjection,

    /// Links the dead link checker skips.
    pub ignore_dead_links: DeadLinkExemption,

    /// Default theme settings.
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            lang: "en-US".into(),
            last_updated: false,
            clean_urls: false,
            src_dir: PathBuf::from("."),
            head: HeadInjection::default(),
            ignore_dead_links: DeadLinkExemption::default(),
            theme_config: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    const BASE: FieldPath = FieldPath::new("base");
    const TITLE: FieldPath = FieldPath::new("title");
    const SRC_DIR: FieldPath = FieldPath::new("srcDir");

    /// Load, normalize and validate the config at `path`.
    ///
    /// Unknown keys are reported as warnings; with `strict` they abort loading.
    pub fn load(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if strict {
                bail!("unknown keys in {} (strict mode)", path.display());
            }
        }

        config.config_path = path.to_path_buf();
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        debug!("config"; "loaded {} (root {})", path.display(), config.root.display());

        config.validate()?;
        Ok(config)
    }

    /// Find `name` upward from the current directory and load it.
    pub fn discover(name: &Path, strict: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot read the current directory")?;
        match find_config_file(&cwd, name) {
            Some(path) => Self::load(&path, strict),
            None => bail!(
                "Config file '{}' not found in {} or any parent directory",
                name.display(),
                cwd.display()
            ),
        }
    }

    /// Parse configuration from TOML string (no validation).
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse without validating. Also returns the dotted paths of keys
    /// nothing in [`SiteConfig`] consumed.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            // `Option` layers show up as `?` segments.
            ignored.push(path.to_string().replace(".?", ""));
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(keys: &[String], path: &Path) {
        let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
        log!("warning"; "{} ignored in {name}:", crate::utils::plural_count(keys.len(), "unknown key"));
        for key in keys {
            eprintln!("  - {key}");
        }
    }

    /// Markdown source directory resolved against the project root.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    /// Document title for a page: `Page | Site`, or the site title alone.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page.map(str::trim).filter(|p| !p.is_empty()) {
            Some(page) if !self.title.is_empty() => format!("{page} | {}", self.title),
            Some(page) => page.to_string(),
            None => self.title.clone(),
        }
    }

    /// Serialize the whole config for the host runtime.
    pub fn to_runtime_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every check, collecting errors and warnings.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "site title is empty");
        }

        if !util::is_valid_base(&self.base) {
            diag.error_with_hint(
                Self::BASE,
                format!("'{}' must start and end with `/`", self.base),
                format!("use \"/{}/\"", self.base.trim_matches('/')),
            );
        }

        if self.src_dir.is_absolute() {
            diag.error(
                Self::SRC_DIR,
                format!("'{}' must be relative to the project root", self.src_dir.display()),
            );
        }

        self.head.validate(&mut diag);
        self.theme_config.validate(&mut diag);
        diag
    }

    /// Validate configuration, printing warnings and returning all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// test support
// ============================================================================

/// `title` and `description` plus `extra`, parsed without validation.
/// A misspelled key in `extra` fails the calling test.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(ignored.is_empty(), "unknown keys in test snippet: {ignored:?}");
    parsed
}

// ============================================================================
// tests
// ============================================================================
