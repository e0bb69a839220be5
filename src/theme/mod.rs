//! Theme values and theme extension.
//!
//! A [`Theme`] is an immutable value with an optional `enhance_app` hook.
//! [`extend_theme`] layers component registrations on top of a base theme
//! and returns a new theme; the base is never touched.
//!
//! ```
//! use quire::theme::{AppContext, Theme, ThemeExtension};
//!
//! let base: Theme<&str> = Theme::new("default");
//! let docs = ThemeExtension::new(&base)
//!     .component("VersionTag", "version-tag")
//!     .build();
//!
//! let ctx = docs.enhance_app(AppContext::new());
//! assert_eq!(ctx.registry().get("VersionTag"), Some(&"version-tag"));
//! ```

mod extend;
mod registry;

pub use extend::{ThemeExtension, extend_theme};
pub use registry::{AppContext, ComponentRegistry};

use std::{fmt, sync::Arc};

/// Bootstrap hook: receives the app context and returns it, possibly augmented.
pub type EnhanceFn<C> = Arc<dyn Fn(AppContext<C>) -> AppContext<C> + Send + Sync>;

/// A named theme with an optional bootstrap hook.
pub struct Theme<C> {
    name: String,
    enhance: Option<EnhanceFn<C>>,
}

impl<C> Theme<C> {
    /// A theme without a hook.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enhance: None,
        }
    }

    pub fn with_enhance<F>(mut self, hook: F) -> Self
    where
        F: Fn(AppContext<C>) -> AppContext<C> + Send + Sync + 'static,
    {
        self.enhance = Some(Arc::new(hook));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_enhance(&self) -> bool {
        self.enhance.is_some()
    }

    pub(crate) fn hook(&self) -> Option<&EnhanceFn<C>> {
        self.enhance.as_ref()
    }

    /// Run the hook. A theme without one returns `ctx` unchanged.
    pub fn enhance_app(&self, ctx: AppContext<C>) -> AppContext<C> {
        match &self.enhance {
            Some(hook) => hook(ctx),
            None => ctx,
        }
    }
}

impl<C> Clone for Theme<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            enhance: self.enhance.clone(),
        }
    }
}

impl<C> fmt::Debug for Theme<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("enhance", &self.enhance.is_some())
            .finish()
    }
}
