//! `head` configuration: tags injected into every page's `<head>`.
//!
//! # Example
//!
//! ```toml
//! [[head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.svg" }
//!
//! # Runtime tuple form is accepted as well
//! head = [["meta", { name = "theme-color", content = "#5f67ee" }]]
//! ```
//!
//! Tags are emitted in declaration order. A tag may name the `src` of an
//! earlier loader script in `requires`; validation rejects the list if that
//! loader is missing or comes later.

use serde::de::{self, MapAccess, SeqAccess, Visitor, value::MapAccessDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html::{is_raw_text_element, is_valid_tag_name, is_void_element};

const FIELD: FieldPath = FieldPath::new("head");

/// Google tag loader endpoint.
const GTAG_LOADER: &str = "https://www.googletagmanager.com/gtag/js";

// ============================================================================
// HeadTag
// ============================================================================

/// A single `<head>` element descriptor.
///
/// Reads either a table (`{ tag, attrs, content, requires }`) or the
/// runtime tuple form `[tag, attrs]` / `[tag, attrs, content]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    /// Element name (`script`, `meta`, `link`, ...).
    pub tag: String,

    /// Attributes, emitted in key order. Empty values render as boolean attributes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,

    /// Inner content (inline script body, style sheet, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// `src` of a loader tag that must be emitted before this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
}

#[derive(Deserialize)]
struct HeadTagTable {
    tag: String,
    #[serde(default)]
    attrs: BTreeMap<String, String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    requires: Option<String>,
}

// Dispatches on the input shape without buffering, so unknown table keys
// still reach `serde_ignored`.
struct HeadTagVisitor;

impl<'de> Visitor<'de> for HeadTagVisitor {
    type Value = HeadTag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a head tag table or a [tag, attrs, content] array")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<HeadTag, A::Error> {
        let HeadTagTable {
            tag,
            attrs,
            content,
            requires,
        } = HeadTagTable::deserialize(MapAccessDeserializer::new(map))?;
        Ok(HeadTag {
            tag,
            attrs,
            content,
            requires,
        })
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HeadTag, A::Error> {
        let tag: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let attrs: BTreeMap<String, String> = seq.next_element()?.unwrap_or_default();
        let content: Option<String> = seq.next_element()?;
        if content.is_some() && seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }
        Ok(HeadTag {
            tag,
            attrs,
            content,
            requires: None,
        })
    }
}

impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HeadTagVisitor)
    }
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            content: None,
            requires: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Declare that this tag depends on the loader with the given `src`.
    pub fn requires(mut self, src: impl Into<String>) -> Self {
        self.requires = Some(src.into());
        self
    }

    /// `<meta name=.. content=..>`
    pub fn meta(name: &str, content: &str) -> Self {
        Self::new("meta").attr("name", name).attr("content", content)
    }

    /// `<link rel=.. href=..>`
    pub fn link(rel: &str, href: &str) -> Self {
        Self::new("link").attr("rel", rel).attr("href", href)
    }

    /// The `src` attribute, if this tag loads something.
    pub fn src(&self) -> Option<&str> {
        self.attrs.get("src").map(String::as_str)
    }

    /// Google Analytics tags: an async loader followed by the inline
    /// configuration script.
    ///
    /// The inline script defines `gtag` as a push onto `window.dataLayer`,
    /// so calls made before the loader finishes are queued and replayed
    /// once it arrives. Characters other than ASCII alphanumerics, `-` and
    /// `_` are dropped from the measurement id.
    pub fn analytics(measurement_id: &str) -> [HeadTag; 2] {
        let id: String = measurement_id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
            .collect();
        let src = format!("{GTAG_LOADER}?id={id}");

        let loader = Self::new("script").attr("async", "").attr("src", &src);
        let inline = Self::new("script")
            .with_content(format!(
                "window.dataLayer = window.dataLayer || [];\n\
                 function gtag(){{dataLayer.push(arguments);}}\n\
                 gtag('js', new Date());\n\
                 gtag('config', '{id}');"
            ))
            .requires(src);

        [loader, inline]
    }
}

// ============================================================================
// HeadInjection
// ============================================================================

/// Ordered list of tags emitted into every page's `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadInjection(Vec<HeadTag>);

/// A `requires` edge that the tag order does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyViolation {
    /// No tag loads the required `src`.
    Missing { index: usize, src: String },
    /// The loader exists but is emitted at or after the dependent tag.
    LoadedAfter {
        index: usize,
        loader: usize,
        src: String,
    },
}

impl HeadInjection {
    pub fn new(tags: Vec<HeadTag>) -> Self {
        Self(tags)
    }

    pub fn push(&mut self, tag: HeadTag) {
        self.0.push(tag);
    }

    pub fn extend(&mut self, tags: impl IntoIterator<Item = HeadTag>) {
        self.0.extend(tags);
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeadTag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every `requires` edge whose loader is missing or not strictly earlier.
    pub fn dependency_violations(&self) -> Vec<DependencyViolation> {
        let mut violations = Vec::new();

        for (index, tag) in self.0.iter().enumerate() {
            let Some(src) = &tag.requires else {
                continue;
            };
            match self.0.iter().position(|t| t.src() == Some(src.as_str())) {
                None => violations.push(DependencyViolation::Missing {
                    index,
                    src: src.clone(),
                }),
                Some(loader) if loader >= index => {
                    violations.push(DependencyViolation::LoadedAfter {
                        index,
                        loader,
                        src: src.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        violations
    }

    /// Validate tag syntax and loader ordering.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, tag) in self.0.iter().enumerate() {
            let field = FIELD.index(i);

            if !is_valid_tag_name(&tag.tag) {
                diag.error(
                    field.key("tag"),
                    format!("'{}' is not a valid element name", tag.tag),
                );
                continue;
            }

            let Some(content) = &tag.content else {
                continue;
            };
            if is_void_element(&tag.tag) {
                diag.error_with_hint(
                    field.key("content"),
                    format!("<{}> is a void element and cannot have content", tag.tag),
                    "move the value into an attribute, e.g. attrs = { content = \"...\" }",
                );
            } else if is_raw_text_element(&tag.tag)
                && content
                    .to_ascii_lowercase()
                    .contains(&format!("</{}", tag.tag.to_ascii_lowercase()))
            {
                diag.error(
                    field.key("content"),
                    format!("inline <{0}> content must not contain `</{0}`", tag.tag),
                );
            }
        }

        for violation in self.dependency_violations() {
            match violation {
                DependencyViolation::Missing { index, src } => diag.error_with_hint(
                    FIELD.index(index).key("requires"),
                    format!("requires loader `{src}` but no tag has that src"),
                    "add the loader script before this tag",
                ),
                DependencyViolation::LoadedAfter { index, loader, src } => diag.error_with_hint(
                    FIELD.index(index).key("requires"),
                    format!("loader `{src}` is emitted at head[{loader}], after this tag"),
                    "move the loader script before the inline script that uses it",
                ),
            }
        }
    }
}

impl From<Vec<HeadTag>> for HeadInjection {
    fn from(tags: Vec<HeadTag>) -> Self {
        Self(tags)
    }
}

impl<'a> IntoIterator for &'a HeadInjection {
    type Item = &'a HeadTag;
    type IntoIter = std::slice::Iter<'a, HeadTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_table_form() {
        let config = test_parse_config(
            r#"[[head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.svg" }

[[head]]
tag = "script"
content = "console.log(1)"
"#,
        );
        assert_eq!(config.head.len(), 2);
        assert_eq!(config.head.tags()[0].tag, "link");
        assert_eq!(config.head.tags()[0].attrs["href"], "/favicon.svg");
        assert_eq!(
            config.head.tags()[1].content.as_deref(),
            Some("console.log(1)")
        );
    }

    #[test]
    fn test_tuple_form() {
        let config = test_parse_config(
            r##"head = [
    ["meta", { name = "theme-color", content = "#5f67ee" }],
    ["script", {}, "window.ready = true"],
]"##,
        );
        let tags = config.head.tags();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], HeadTag::meta("theme-color", "#5f67ee"));
        assert_eq!(tags[1].tag, "script");
        assert!(tags[1].attrs.is_empty());
        assert_eq!(tags[1].content.as_deref(), Some("window.ready = true"));
    }

    #[test]
    fn test_unknown_table_key_is_reported() {
        let (config, ignored) = SiteConfig::parse_with_ignored(
            r#"[[head]]
tag = "script"
atributes = { src = "https://plausible.io/js/script.js" }
"#,
        )
        .unwrap();
        assert!(config.head.tags()[0].attrs.is_empty());
        assert_eq!(ignored, ["head.0.atributes"]);
    }

    #[test]
    fn test_tuple_with_extra_element_rejected() {
        let result = SiteConfig::from_str(r#"head = [["script", {}, "a()", "b()"]]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_analytics_pair_order() {
        let [loader, inline] = HeadTag::analytics("G-3MG9WPBDWL");
        assert_eq!(
            loader.src(),
            Some("https://www.googletagmanager.com/gtag/js?id=G-3MG9WPBDWL")
        );
        assert!(loader.attrs.contains_key("async"));
        assert_eq!(inline.requires.as_deref(), loader.src());

        let script = inline.content.as_deref().unwrap();
        assert!(script.contains("window.dataLayer = window.dataLayer || [];"));
        assert!(script.contains("gtag('config', 'G-3MG9WPBDWL');"));

        let head = HeadInjection::new(vec![loader, inline]);
        assert!(head.dependency_violations().is_empty());
    }

    #[test]
    fn test_analytics_sanitizes_id() {
        let [_, inline] = HeadTag::analytics("G-1');alert(1)//");
        assert!(inline.content.unwrap().contains("gtag('config', 'G-1alert1');"));
    }

    #[test]
    fn test_swapped_analytics_is_violation() {
        let [loader, inline] = HeadTag::analytics("G-1");
        let head = HeadInjection::new(vec![inline, loader]);
        assert_eq!(
            head.dependency_violations(),
            vec![DependencyViolation::LoadedAfter {
                index: 0,
                loader: 1,
                src: "https://www.googletagmanager.com/gtag/js?id=G-1".into(),
            }]
        );

        let mut diag = ConfigDiagnostics::new();
        head.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "head[0].requires");
    }

    #[test]
    fn test_missing_loader_is_violation() {
        let head = HeadInjection::new(vec![
            HeadTag::new("script")
                .with_content("plausible('pageview')")
                .requires("https://plausible.io/js/script.js"),
        ]);
        assert!(matches!(
            head.dependency_violations().as_slice(),
            [DependencyViolation::Missing { index: 0, .. }]
        ));
    }

    #[test]
    fn test_validate_tag_syntax() {
        let head = HeadInjection::new(vec![
            HeadTag::new("bad tag"),
            HeadTag::meta("description", "x").with_content("oops"),
            HeadTag::new("script").with_content("let s = '</SCRIPT>';"),
            HeadTag::new("style").with_content("body { color: red }"),
        ]);
        let mut diag = ConfigDiagnostics::new();
        head.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["head[0].tag", "head[1].content", "head[2].content"]);
    }

    #[test]
    fn test_serialize_uses_table_form() {
        let head = HeadInjection::new(vec![HeadTag::link("icon", "/favicon.svg")]);
        let json = serde_json::to_value(&head).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "tag": "link", "attrs": { "href": "/favicon.svg", "rel": "icon" } }])
        );
    }
}
