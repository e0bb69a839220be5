//! `themeConfig.sidebar`: ordered, arbitrarily nested navigation groups.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.sidebar]]
//! text = "Stubs"
//! collapsed = false
//! items = [
//!     { text = "JSON", link = "/guide/stubs/json" },
//!     { text = "YAML", link = "/guide/stubs/yaml" },
//!     { text = "Advanced", collapsed = true, items = [
//!         { text = "Templates", link = "/guide/stubs/templates" },
//!     ] },
//! ]
//! ```
//!
//! Render order is declaration order at every level. The tree is never
//! mutated after it is built. Deserialized trees are owned values and so
//! cannot contain cycles, and an empty link fails to parse. Trees assembled
//! in code go through [`SidebarBuilder`], which rejects cycles and empty
//! links when they are introduced.

use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

use super::nav::{NavError, NavItem};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::url::{is_external_link, normalize_route};

const FIELD: FieldPath = FieldPath::new("themeConfig.sidebar");

// ============================================================================
// Tree types
// ============================================================================

/// A group of sidebar entries with a collapse default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSidebarEntry")]
pub struct SidebarGroup {
    pub text: String,

    /// Whether the group starts collapsed.
    pub collapsed: bool,

    /// Optional page for the group header itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    pub items: Vec<SidebarItem>,
}

/// An entry in a group: a leaf link or a nested group.
///
/// Tables carrying `items` are groups, everything else is a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Group(SidebarGroup),
    Link(NavItem),
}

/// Every key a sidebar entry may carry. Read as one plain struct so that
/// misspelt keys reach `serde_ignored`, then split into a group or a link.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSidebarEntry {
    text: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    collapsed: Option<bool>,
    #[serde(default)]
    active_match: Option<String>,
    #[serde(default)]
    items: Option<Vec<SidebarItem>>,
}

impl TryFrom<RawSidebarEntry> for SidebarItem {
    type Error = SidebarError;

    fn try_from(raw: RawSidebarEntry) -> Result<Self, Self::Error> {
        if raw.items.is_some() {
            return SidebarGroup::try_from(raw).map(Self::Group);
        }
        if raw.collapsed.is_some() {
            return Err(SidebarError::Misplaced {
                key: "collapsed",
                text: raw.text,
            });
        }
        let Some(link) = raw.link else {
            return Err(SidebarError::NoTarget { text: raw.text });
        };
        let item = NavItem::new(raw.text, link)?;
        Ok(Self::Link(match raw.active_match {
            Some(pattern) => item.with_active_match(pattern),
            None => item,
        }))
    }
}

impl TryFrom<RawSidebarEntry> for SidebarGroup {
    type Error = SidebarError;

    fn try_from(raw: RawSidebarEntry) -> Result<Self, Self::Error> {
        let Some(items) = raw.items else {
            return Err(SidebarError::NoItems { text: raw.text });
        };
        if raw.active_match.is_some() {
            return Err(SidebarError::Misplaced {
                key: "activeMatch",
                text: raw.text,
            });
        }
        if raw.link.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(SidebarError::EmptyLink {
                group: raw.text.clone(),
                text: raw.text,
            });
        }
        Ok(Self {
            text: raw.text,
            collapsed: raw.collapsed.unwrap_or(false),
            link: raw.link,
            items,
        })
    }
}

impl<'de> Deserialize<'de> for SidebarItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSidebarEntry::deserialize(deserializer)?;
        Self::try_from(raw).map_err(de::Error::custom)
    }
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            collapsed: false,
            link: None,
            items: Vec::new(),
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn item(mut self, item: impl Into<SidebarItem>) -> Self {
        self.items.push(item.into());
        self
    }
}

impl From<NavItem> for SidebarItem {
    fn from(item: NavItem) -> Self {
        Self::Link(item)
    }
}

impl From<SidebarGroup> for SidebarItem {
    fn from(group: SidebarGroup) -> Self {
        Self::Group(group)
    }
}

/// A linked sidebar entry in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLink<'a> {
    pub text: &'a str,
    pub link: &'a str,
    /// Nesting level, top-level group headers are 0.
    pub depth: usize,
}

// ============================================================================
// Sidebar
// ============================================================================

/// The ordered list of top-level sidebar groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(Vec<SidebarGroup>);

impl Sidebar {
    pub fn new(groups: Vec<SidebarGroup>) -> Self {
        Self(groups)
    }

    pub fn groups(&self) -> &[SidebarGroup] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every linked entry, depth first in render order.
    ///
    /// A group header with a link comes before its children.
    pub fn links(&self) -> Links<'_> {
        Links {
            groups: self.0.iter(),
            stack: Vec::new(),
        }
    }

    /// Deepest group nesting, 0 for an empty sidebar.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&SidebarGroup, usize)> = self.0.iter().map(|g| (g, 1)).collect();
        while let Some((group, depth)) = stack.pop() {
            max = max.max(depth);
            for item in &group.items {
                if let SidebarItem::Group(child) = item {
                    stack.push((child, depth + 1));
                }
            }
        }
        max
    }

    /// Group texts leading to the entry for `route` (breadcrumb).
    ///
    /// The first match in render order wins.
    pub fn trail(&self, route: &str) -> Option<Vec<&str>> {
        let target = normalize_route(route);
        let hit = |link: &str| !is_external_link(link) && normalize_route(link) == target;

        for group in &self.0 {
            let mut trail = vec![group.text.as_str()];
            if group.link.as_deref().is_some_and(hit) {
                return Some(trail);
            }
            let mut stack = vec![group.items.iter()];
            while let Some(items) = stack.last_mut() {
                match items.next() {
                    Some(SidebarItem::Link(nav)) if hit(&nav.link) => return Some(trail),
                    Some(SidebarItem::Link(_)) => {}
                    Some(SidebarItem::Group(child)) => {
                        trail.push(&child.text);
                        if child.link.as_deref().is_some_and(hit) {
                            return Some(trail);
                        }
                        stack.push(child.items.iter());
                    }
                    None => {
                        stack.pop();
                        trail.pop();
                    }
                }
            }
        }
        None
    }

    /// Previous and next internal pages around `route`.
    pub fn neighbors(&self, route: &str) -> (Option<SidebarLink<'_>>, Option<SidebarLink<'_>>) {
        let target = normalize_route(route);
        let pages: Vec<_> = self
            .links()
            .filter(|entry| !is_external_link(entry.link))
            .collect();

        match pages
            .iter()
            .position(|entry| normalize_route(entry.link) == target)
        {
            Some(i) => (
                i.checked_sub(1).map(|prev| pages[prev]),
                pages.get(i + 1).copied(),
            ),
            None => (None, None),
        }
    }

    /// Validate links and group shape, reporting paths like
    /// `themeConfig.sidebar[0].items[2].link`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut stack: Vec<(FieldPath, &SidebarGroup)> = self
            .0
            .iter()
            .enumerate()
            .rev()
            .map(|(i, group)| (FIELD.index(i), group))
            .collect();

        while let Some((field, group)) = stack.pop() {
            if group.text.trim().is_empty() {
                diag.warn(field.key("text"), "group has no display text");
            }
            if group.link.as_deref().is_some_and(|l| l.trim().is_empty()) {
                diag.error(field.key("link"), format!("link of group `{}` is empty", group.text));
            }
            if group.items.is_empty() {
                diag.warn(field.key("items"), format!("group `{}` has no items", group.text));
            }

            let items = field.key("items");
            let mut children = Vec::new();
            for (i, item) in group.items.iter().enumerate() {
                match item {
                    SidebarItem::Link(nav) => nav.validate(&items.index(i), diag),
                    SidebarItem::Group(child) => children.push((items.index(i), child)),
                }
            }
            // Visit nested groups in declaration order.
            stack.extend(children.into_iter().rev());
        }
    }
}

impl From<Vec<SidebarGroup>> for Sidebar {
    fn from(groups: Vec<SidebarGroup>) -> Self {
        Self(groups)
    }
}

/// Depth-first iterator over linked sidebar entries.
pub struct Links<'a> {
    groups: std::slice::Iter<'a, SidebarGroup>,
    stack: Vec<(std::slice::Iter<'a, SidebarItem>, usize)>,
}

impl<'a> Links<'a> {
    fn enter(&mut self, group: &'a SidebarGroup, depth: usize) -> Option<SidebarLink<'a>> {
        self.stack.push((group.items.iter(), depth + 1));
        group.link.as_deref().map(|link| SidebarLink {
            text: &group.text,
            link,
            depth,
        })
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = SidebarLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((items, depth)) = self.stack.last_mut() else {
                let group = self.groups.next()?;
                if let Some(header) = self.enter(group, 0) {
                    return Some(header);
                }
                continue;
            };
            let depth = *depth;

            match items.next() {
                Some(SidebarItem::Link(nav)) => {
                    return Some(SidebarLink {
                        text: &nav.text,
                        link: &nav.link,
                        depth,
                    });
                }
                Some(SidebarItem::Group(child)) => {
                    if let Some(header) = self.enter(child, depth) {
                        return Some(header);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Handle to a group inside a [`SidebarBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SidebarError {
    #[error("link `{text}` in group `{group}` is empty")]
    EmptyLink { group: String, text: String },

    #[error("nesting `{child}` under `{parent}` would make a group its own descendant")]
    Cycle { parent: String, child: String },

    #[error("group `{group}` is already nested under `{parent}`")]
    AlreadyNested { group: String, parent: String },

    #[error("unknown sidebar group id {0}")]
    UnknownGroup(usize),

    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("sidebar entry `{text}` needs a `link` or `items`")]
    NoTarget { text: String },

    #[error("sidebar group `{text}` needs `items`")]
    NoItems { text: String },

    #[error("`{key}` does not apply to sidebar entry `{text}`")]
    Misplaced { key: &'static str, text: String },
}

enum Slot {
    Link(NavItem),
    Group(GroupId),
}

struct Node {
    text: String,
    collapsed: bool,
    link: Option<String>,
    parent: Option<GroupId>,
    slots: Vec<Slot>,
}

/// Arena for assembling a sidebar in code.
///
/// Groups are created first and nested by id. Every mutation is checked, so
/// [`SidebarBuilder::build`] always yields a valid tree: top-level groups
/// are the ones never nested, in creation order.
///
/// ```
/// use quire::config::section::theme::SidebarBuilder;
///
/// let mut b = SidebarBuilder::new();
/// let stubs = b.group("Stubs");
/// b.link(stubs, "JSON", "/guide/stubs/json").unwrap();
/// let advanced = b.group("Advanced");
/// b.nest(stubs, advanced).unwrap();
/// assert!(b.nest(advanced, stubs).is_err());
/// ```
#[derive(Default)]
pub struct SidebarBuilder {
    nodes: Vec<Node>,
}

impl SidebarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&mut self, text: impl Into<String>) -> GroupId {
        self.nodes.push(Node {
            text: text.into(),
            collapsed: false,
            link: None,
            parent: None,
            slots: Vec::new(),
        });
        GroupId(self.nodes.len() - 1)
    }

    pub fn set_collapsed(&mut self, id: GroupId, collapsed: bool) -> Result<(), SidebarError> {
        self.node_mut(id)?.collapsed = collapsed;
        Ok(())
    }

    /// Give the group header its own page.
    pub fn set_link(&mut self, id: GroupId, link: impl Into<String>) -> Result<(), SidebarError> {
        let link = link.into();
        let node = self.node_mut(id)?;
        if link.trim().is_empty() {
            return Err(SidebarError::EmptyLink {
                group: node.text.clone(),
                text: node.text.clone(),
            });
        }
        node.link = Some(link);
        Ok(())
    }

    /// Append a leaf link to a group.
    pub fn link(
        &mut self,
        id: GroupId,
        text: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<(), SidebarError> {
        let node = self.node_mut(id)?;
        let item = NavItem::new(text, link).map_err(|err| match err {
            NavError::EmptyLink { text } => SidebarError::EmptyLink {
                group: node.text.clone(),
                text,
            },
        })?;
        node.slots.push(Slot::Link(item));
        Ok(())
    }

    /// Append `child` as the next item of `parent`.
    pub fn nest(&mut self, parent: GroupId, child: GroupId) -> Result<(), SidebarError> {
        self.node(parent)?;
        let child_node = self.node(child)?;

        if let Some(existing) = child_node.parent {
            return Err(SidebarError::AlreadyNested {
                group: child_node.text.clone(),
                parent: self.nodes[existing.0].text.clone(),
            });
        }

        // `parent` and all its ancestors must differ from `child`.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(SidebarError::Cycle {
                    parent: self.nodes[parent.0].text.clone(),
                    child: child_node.text.clone(),
                });
            }
            cursor = self.nodes[id.0].parent;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].slots.push(Slot::Group(child));
        Ok(())
    }

    pub fn build(mut self) -> Sidebar {
        let roots: Vec<_> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].parent.is_none())
            .map(GroupId)
            .collect();
        let groups = roots
            .into_iter()
            .map(|id| Self::assemble(&mut self.nodes, id))
            .collect();
        Sidebar(groups)
    }

    fn assemble(nodes: &mut [Node], id: GroupId) -> SidebarGroup {
        let slots = std::mem::take(&mut nodes[id.0].slots);
        let items = slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Link(item) => SidebarItem::Link(item),
                Slot::Group(child) => SidebarItem::Group(Self::assemble(nodes, child)),
            })
            .collect();

        let node = &mut nodes[id.0];
        SidebarGroup {
            text: std::mem::take(&mut node.text),
            collapsed: node.collapsed,
            link: node.link.take(),
            items,
        }
    }

    fn node(&self, id: GroupId) -> Result<&Node, SidebarError> {
        self.nodes.get(id.0).ok_or(SidebarError::UnknownGroup(id.0))
    }

    fn node_mut(&mut self, id: GroupId) -> Result<&mut Node, SidebarError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(SidebarError::UnknownGroup(id.0))
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, SiteConfig, test_parse_config};

    fn link(text: &str, link: &str) -> NavItem {
        NavItem::new(text, link).unwrap()
    }

    fn stubs_sidebar() -> Sidebar {
        Sidebar::new(vec![
            SidebarGroup::new("Introduction")
                .item(link("Overview", "/guide/introduction/overview"))
                .item(link("Quick Start", "/guide/introduction/quick-start")),
            SidebarGroup::new("Stubs")
                .item(link("JSON", "/guide/stubs/json"))
                .item(link("YAML", "/guide/stubs/yaml"))
                .item(
                    SidebarGroup::new("Advanced")
                        .collapsed(true)
                        .item(link("Templates", "/guide/stubs/templates")),
                ),
            SidebarGroup::new("Community").item(link("GitHub", "https://github.com/bavix/gripmock")),
        ])
    }

    #[test]
    fn test_parse_preserves_declaration_order() {
        let config = test_parse_config(
            r#"[[themeConfig.sidebar]]
text = "Stubs"
collapsed = false
items = [
    { text = "JSON", link = "/guide/stubs/json" },
    { text = "YAML", link = "/guide/stubs/yaml" },
]
"#,
        );
        let groups = config.theme_config.sidebar.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].text, "Stubs");
        assert!(!groups[0].collapsed);

        let texts: Vec<_> = config.theme_config.sidebar.links().map(|l| l.text).collect();
        assert_eq!(texts, ["JSON", "YAML"]);
    }

    #[test]
    fn test_parse_nested_groups_array_of_tables() {
        let config = test_parse_config(
            r#"[[themeConfig.sidebar]]
text = "Guide"

[[themeConfig.sidebar.items]]
text = "Intro"
link = "/guide/intro"

[[themeConfig.sidebar.items]]
text = "Deep"
collapsed = true
items = [{ text = "Deeper", items = [{ text = "Leaf", link = "/guide/leaf" }] }]
"#,
        );
        let sidebar = &config.theme_config.sidebar;
        assert_eq!(sidebar.depth(), 3);

        let SidebarItem::Group(deep) = &sidebar.groups()[0].items[1] else {
            panic!("expected nested group");
        };
        assert!(deep.collapsed);
        assert_eq!(
            sidebar.trail("/guide/leaf"),
            Some(vec!["Guide", "Deep", "Deeper"])
        );
    }

    #[test]
    fn test_empty_link_rejected_at_parse() {
        let result = SiteConfig::from_str(
            r#"[[themeConfig.sidebar]]
text = "Stubs"
items = [{ text = "JSON", link = "" }]
"#,
        );
        let Err(ConfigError::Toml(err)) = result else {
            panic!("expected a parse error");
        };
        assert!(err.to_string().contains("nav item `JSON` has an empty link"));

        let group_link = SiteConfig::from_str(
            r#"[[themeConfig.sidebar]]
text = "Stubs"
link = " "
items = []
"#,
        );
        assert!(group_link.is_err());
    }

    #[test]
    fn test_misspelt_keys_are_reported() {
        let (config, ignored) = SiteConfig::parse_with_ignored(
            r#"[[themeConfig.sidebar]]
text = "Stubs"
items = [
    { text = "Advanced", colapsed = true, items = [
        { text = "Templates", link = "/guide/stubs/templates" },
    ] },
]
"#,
        )
        .unwrap();
        assert_eq!(ignored, ["themeConfig.sidebar.0.items.0.colapsed"]);

        let SidebarItem::Group(advanced) = &config.theme_config.sidebar.groups()[0].items[0] else {
            panic!("expected nested group");
        };
        assert!(!advanced.collapsed);
    }

    #[test]
    fn test_entry_shape_errors() {
        let cases = [
            ("items = [{ text = \"JSON\" }]", "needs a `link` or `items`"),
            (
                "items = [{ text = \"JSON\", link = \"/json\", collapsed = true }]",
                "`collapsed` does not apply",
            ),
            (
                "items = [{ text = \"G\", activeMatch = \"^/g\", items = [] }]",
                "`activeMatch` does not apply",
            ),
            ("link = \"/stubs/\"", "needs `items`"),
        ];
        for (body, message) in cases {
            let toml = format!("[[themeConfig.sidebar]]\ntext = \"Stubs\"\n{body}\n");
            let Err(ConfigError::Toml(err)) = SiteConfig::from_str(&toml) else {
                panic!("expected a parse error for {body}");
            };
            assert!(err.to_string().contains(message), "{body}: {err}");
        }
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let sidebar = stubs_sidebar();
        let json = serde_json::to_string(&sidebar).unwrap();
        let back: Sidebar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sidebar);

        let before: Vec<_> = sidebar.links().map(|l| l.link).collect();
        let after: Vec<_> = back.links().map(|l| l.link).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_links_depth_first() {
        let sidebar = stubs_sidebar();
        let entries: Vec<_> = sidebar.links().map(|l| (l.text, l.depth)).collect();
        assert_eq!(
            entries,
            [
                ("Overview", 1),
                ("Quick Start", 1),
                ("JSON", 1),
                ("YAML", 1),
                ("Templates", 2),
                ("GitHub", 1),
            ]
        );
    }

    #[test]
    fn test_group_link_precedes_children() {
        let mut group = SidebarGroup::new("API").item(link("Stubs", "/api/stubs"));
        group.link = Some("/api/".into());
        let sidebar = Sidebar::new(vec![group]);

        let links: Vec<_> = sidebar.links().map(|l| l.link).collect();
        assert_eq!(links, ["/api/", "/api/stubs"]);
        assert_eq!(sidebar.trail("/api"), Some(vec!["API"]));
    }

    #[test]
    fn test_neighbors_skip_external() {
        let sidebar = stubs_sidebar();

        let (prev, next) = sidebar.neighbors("/guide/stubs/yaml.html");
        assert_eq!(prev.map(|l| l.text), Some("JSON"));
        assert_eq!(next.map(|l| l.text), Some("Templates"));

        let (prev, next) = sidebar.neighbors("/guide/stubs/templates");
        assert_eq!(prev.map(|l| l.text), Some("YAML"));
        assert_eq!(next, None);

        let (prev, _) = sidebar.neighbors("/guide/introduction/overview");
        assert_eq!(prev, None);

        assert_eq!(sidebar.neighbors("/missing"), (None, None));
    }

    #[test]
    fn test_trail() {
        let sidebar = stubs_sidebar();
        assert_eq!(
            sidebar.trail("/guide/stubs/templates"),
            Some(vec!["Stubs", "Advanced"])
        );
        assert_eq!(sidebar.trail("/guide/stubs/json/"), Some(vec!["Stubs"]));
        assert_eq!(sidebar.trail("/nowhere"), None);
    }

    #[test]
    fn test_trail_deep_nesting() {
        let mut group = SidebarGroup::new("level 1000").item(link("Leaf", "/deep/leaf"));
        for level in (1..1000).rev() {
            group = SidebarGroup::new(format!("level {level}")).item(group);
        }
        let sidebar = Sidebar::new(vec![SidebarGroup::new("Other").item(link("X", "/x")), group]);

        let trail = sidebar.trail("/deep/leaf").unwrap();
        assert_eq!(trail.len(), 1000);
        assert_eq!(trail[0], "level 1");
        assert_eq!(trail[999], "level 1000");
        assert_eq!(sidebar.trail("/x"), Some(vec!["Other"]));
    }

    #[test]
    fn test_trail_prefers_render_order() {
        let sidebar = Sidebar::new(vec![
            SidebarGroup::new("Guide")
                .item(SidebarGroup::new("Nested").item(link("JSON", "/json")))
                .item(link("JSON again", "/json")),
        ]);
        assert_eq!(sidebar.trail("/json"), Some(vec!["Guide", "Nested"]));
    }

    #[test]
    fn test_depth() {
        assert_eq!(Sidebar::default().depth(), 0);
        assert_eq!(stubs_sidebar().depth(), 2);
    }

    #[test]
    fn test_validate_paths() {
        let sidebar = Sidebar::new(vec![
            SidebarGroup::new("Stubs")
                .item(link("JSON", "/guide/stubs/json"))
                .item(SidebarGroup::new("Nested").item(NavItem {
                    text: "Empty".into(),
                    link: String::new(),
                    active_match: None,
                })),
            SidebarGroup::new("Empty group"),
        ]);
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);

        let errors: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(errors, ["themeConfig.sidebar[0].items[1].items[0].link"]);

        let warnings: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warnings, ["themeConfig.sidebar[1].items"]);
    }

    #[test]
    fn test_builder_assembles_in_order() {
        let mut b = SidebarBuilder::new();
        let intro = b.group("Introduction");
        let stubs = b.group("Stubs");
        let advanced = b.group("Advanced");

        b.link(intro, "Overview", "/guide/introduction/overview").unwrap();
        b.link(stubs, "JSON", "/guide/stubs/json").unwrap();
        b.link(stubs, "YAML", "/guide/stubs/yaml").unwrap();
        b.nest(stubs, advanced).unwrap();
        b.set_collapsed(advanced, true).unwrap();
        b.link(advanced, "Templates", "/guide/stubs/templates").unwrap();

        let sidebar = b.build();
        let tops: Vec<_> = sidebar.groups().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(tops, ["Introduction", "Stubs"]);
        assert_eq!(sidebar.depth(), 2);

        let SidebarItem::Group(nested) = &sidebar.groups()[1].items[2] else {
            panic!("expected nested group");
        };
        assert_eq!(nested.text, "Advanced");
        assert!(nested.collapsed);
    }

    #[test]
    fn test_builder_rejects_cycles() {
        let mut b = SidebarBuilder::new();
        let a = b.group("A");
        let bb = b.group("B");
        let c = b.group("C");
        b.nest(a, bb).unwrap();
        b.nest(bb, c).unwrap();

        assert!(matches!(b.nest(a, a), Err(SidebarError::Cycle { .. })));
        assert_eq!(
            b.nest(c, a),
            Err(SidebarError::Cycle {
                parent: "C".into(),
                child: "A".into()
            })
        );
        assert_eq!(
            b.nest(a, c),
            Err(SidebarError::AlreadyNested {
                group: "C".into(),
                parent: "B".into()
            })
        );
    }

    #[test]
    fn test_builder_rejects_empty_links_and_unknown_ids() {
        let mut b = SidebarBuilder::new();
        let g = b.group("Stubs");
        assert_eq!(
            b.link(g, "JSON", ""),
            Err(SidebarError::EmptyLink {
                group: "Stubs".into(),
                text: "JSON".into()
            })
        );
        assert!(b.set_link(g, " ").is_err());
        assert_eq!(
            b.link(GroupId(9), "x", "/x"),
            Err(SidebarError::UnknownGroup(9))
        );
    }
}
