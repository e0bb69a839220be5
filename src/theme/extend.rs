//! Layering component registrations over a base theme.

use std::sync::Arc;

use super::{AppContext, Theme};

/// Build a theme that runs `base`'s hook and then registers `components`.
///
/// When the returned theme's hook runs, the base hook (if any) is invoked
/// exactly once with the incoming context, then each component is
/// registered in iteration order. Later registrations win on name clashes.
pub fn extend_theme<C, N>(base: &Theme<C>, components: impl IntoIterator<Item = (N, C)>) -> Theme<C>
where
    C: Clone + Send + Sync + 'static,
    N: Into<String>,
{
    let components: Arc<[(String, C)]> = components
        .into_iter()
        .map(|(name, component)| (name.into(), component))
        .collect();
    let base_hook = base.hook().cloned();

    Theme::new(base.name()).with_enhance(move |ctx: AppContext<C>| {
        let mut ctx = match &base_hook {
            Some(hook) => hook(ctx),
            None => ctx,
        };
        for (name, component) in components.iter() {
            ctx.register(name.as_str(), component.clone());
        }
        ctx
    })
}

/// Builder form of [`extend_theme`].
#[derive(Debug, Clone)]
pub struct ThemeExtension<C> {
    base: Theme<C>,
    components: Vec<(String, C)>,
}

impl<C> ThemeExtension<C>
where
    C: Clone + Send + Sync + 'static,
{
    pub fn new(base: &Theme<C>) -> Self {
        Self {
            base: base.clone(),
            components: Vec::new(),
        }
    }

    pub fn component(mut self, name: impl Into<String>, component: C) -> Self {
        self.components.push((name.into(), component));
        self
    }

    pub fn build(self) -> Theme<C> {
        extend_theme(&self.base, self.components)
    }
}
