//! Process-wide, read-only site config.
//!
//! The config is published once at startup and never replaced. Page
//! renderers share the `Arc` without locking.

use crate::config::{ConfigError, SiteConfig};
use std::sync::{Arc, LazyLock, OnceLock};

/// Published config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Returned by `cfg()` before anything was published.
static FALLBACK: LazyLock<Arc<SiteConfig>> = LazyLock::new(|| Arc::new(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    Arc::clone(CONFIG.get().unwrap_or(&*FALLBACK))
}

/// Publish the config. Fails if a config was already published.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(arc)
}
