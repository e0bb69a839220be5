//! Quire - declarative site configuration for documentation generators.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── config/      # quire.toml: SiteConfig, sections, diagnostics, handle
//! ├── theme/       # Theme extension and per-app component registry
//! ├── render/      # HTML emission for head tags, nav, sidebar, social links
//! ├── validate/    # Build-time dead link checker
//! ├── utils/       # HTML escaping, URL helpers, pluralization
//! └── logger       # log!/debug! macros
//! ```

pub mod config;
pub mod logger;
pub mod render;
pub mod theme;
pub mod utils;
pub mod validate;

pub use config::{ConfigDiagnostics, ConfigError, FieldPath, SiteConfig, cfg, init_config};
pub use render::Render;
pub use theme::{AppContext, ComponentRegistry, Theme, ThemeExtension, extend_theme};
pub use validate::{LinkChecker, LinkStatus, ValidationReport};
