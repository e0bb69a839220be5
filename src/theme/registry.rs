//! Component registry and the app context threaded through theme hooks.

use rustc_hash::FxHashMap;

use crate::log;

/// Name → component map that remembers registration order.
#[derive(Debug, Clone)]
pub struct ComponentRegistry<C> {
    components: FxHashMap<String, C>,
    order: Vec<String>,
}

impl<C> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self {
            components: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<C> ComponentRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `component` under `name`, returning the one it replaced.
    ///
    /// A replaced name keeps its original position in [`names`](Self::names).
    pub fn insert(&mut self, name: impl Into<String>, component: C) -> Option<C> {
        let name = name.into();
        if !self.components.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.components.insert(name, component)
    }

    pub fn get(&self, name: &str) -> Option<&C> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered names, first registration first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, component)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &C)> {
        self.order
            .iter()
            .filter_map(|name| self.components.get(name).map(|c| (name.as_str(), c)))
    }
}

/// State handed to a theme's `enhance_app` hook and returned from it.
///
/// Owns the registry; there is no ambient global one.
#[derive(Debug, Clone)]
pub struct AppContext<C> {
    registry: ComponentRegistry<C>,
    shadowed: Vec<String>,
}

impl<C> Default for AppContext<C> {
    fn default() -> Self {
        Self {
            registry: ComponentRegistry::default(),
            shadowed: Vec::new(),
        }
    }
}

impl<C> AppContext<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing registry.
    pub fn with_registry(registry: ComponentRegistry<C>) -> Self {
        Self {
            registry,
            shadowed: Vec::new(),
        }
    }

    /// Register a component. An existing registration under the same name
    /// is replaced, logged and recorded in [`shadowed`](Self::shadowed).
    pub fn register(&mut self, name: impl Into<String>, component: C) {
        let name = name.into();
        if self.registry.insert(name.clone(), component).is_some() {
            log!("warning"; "component `{}` registered twice, the later registration wins", name);
            self.shadowed.push(name);
        }
    }

    /// Chaining form of [`register`](Self::register).
    pub fn component(mut self, name: impl Into<String>, component: C) -> Self {
        self.register(name, component);
        self
    }

    pub fn registry(&self) -> &ComponentRegistry<C> {
        &self.registry
    }

    /// Names whose earlier registration was overwritten, in overwrite order.
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }

    pub fn into_registry(self) -> ComponentRegistry<C> {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keeps_first_position() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.insert("VersionTag", 1).is_none());
        assert!(registry.insert("Badge", 2).is_none());
        assert_eq!(registry.insert("VersionTag", 3), Some(1));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["VersionTag", "Badge"]);
        assert_eq!(
            registry.iter().collect::<Vec<_>>(),
            [("VersionTag", &3), ("Badge", &2)]
        );
    }

    #[test]
    fn test_context_records_shadowing() {
        let ctx = AppContext::new()
            .component("VersionTag", "v1")
            .component("Badge", "b")
            .component("VersionTag", "v2");

        assert_eq!(ctx.registry().get("VersionTag"), Some(&"v2"));
        assert_eq!(ctx.shadowed(), ["VersionTag"]);
        assert_eq!(ctx.into_registry().len(), 2);
    }

    #[test]
    fn test_with_registry() {
        let mut registry = ComponentRegistry::new();
        registry.insert("Badge", 1);
        let ctx = AppContext::with_registry(registry);
        assert!(ctx.registry().contains("Badge"));
        assert!(ctx.shadowed().is_empty());
    }
}
