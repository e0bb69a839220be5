//! `ignoreDeadLinks` configuration.
//!
//! Links matching an exemption are never reported by the dead link
//! checker, whatever their reachability. This is how documentation
//! references local development endpoints that do not exist in CI.
//!
//! # Example
//!
//! ```toml
//! # Regular expressions, plain or as /literal/flags
//! ignoreDeadLinks = ["^https?://localhost:4771", '/^https?:\/\/localhost:4770/i']
//!
//! # Every loopback URL
//! ignoreDeadLinks = "localhostLinks"
//!
//! # Everything
//! ignoreDeadLinks = true
//! ```

use regex::{Regex, RegexBuilder};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::utils::url::is_localhost_url;

/// Invalid exemption pattern.
#[derive(Debug, Error)]
#[error("invalid dead link pattern `{pattern}`: {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

// ============================================================================
// ExemptPattern
// ============================================================================

/// A compiled exemption pattern that keeps its source text.
#[derive(Clone)]
pub struct ExemptPattern {
    source: String,
    regex: Regex,
}

impl ExemptPattern {
    /// Compile a pattern.
    ///
    /// `/body/flags` is read as a regex literal: `\/` becomes `/` and the
    /// `i` flag enables case-insensitive matching. Anything else is used
    /// as the regex body directly.
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        let source = source.into();
        let (body, case_insensitive) = split_literal(&source);

        let regex = RegexBuilder::new(&body)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|err| PatternError {
                pattern: source.clone(),
                source: err,
            })?;

        Ok(Self { source, regex })
    }

    #[inline]
    pub fn is_match(&self, link: &str) -> bool {
        self.regex.is_match(link)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Split `/body/flags` into an unescaped body and the `i` flag.
fn split_literal(source: &str) -> (String, bool) {
    if let Some(rest) = source.strip_prefix('/')
        && let Some(end) = rest.rfind('/')
    {
        let flags = &rest[end + 1..];
        if flags.chars().all(|c| matches!(c, 'i' | 'g' | 'm' | 's' | 'u')) {
            let body = rest[..end].replace("\\/", "/");
            return (body, flags.contains('i'));
        }
    }
    (source.to_string(), false)
}

impl fmt::Debug for ExemptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExemptPattern").field(&self.source).finish()
    }
}

impl PartialEq for ExemptPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl TryFrom<String> for ExemptPattern {
    type Error = PatternError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

impl Serialize for ExemptPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for ExemptPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(source).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// DeadLinkExemption
// ============================================================================

/// Keyword form: exempt every loopback URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocalhostKeyword {
    #[serde(rename = "localhostLinks")]
    LocalhostLinks,
}

const LOCALHOST_KEYWORD: &str = "localhostLinks";

/// Which links the dead link checker must skip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeadLinkExemption {
    /// `true` skips every link, `false` none.
    All(bool),
    /// Skip links to localhost and loopback addresses.
    Localhost(LocalhostKeyword),
    /// Skip links matching any pattern.
    Patterns(Vec<ExemptPattern>),
}

struct ExemptionVisitor;

impl<'de> Visitor<'de> for ExemptionVisitor {
    type Value = DeadLinkExemption;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a boolean, \"{LOCALHOST_KEYWORD}\" or a list of patterns")
    }

    fn visit_bool<E: de::Error>(self, all: bool) -> Result<Self::Value, E> {
        Ok(DeadLinkExemption::All(all))
    }

    fn visit_str<E: de::Error>(self, keyword: &str) -> Result<Self::Value, E> {
        if keyword == LOCALHOST_KEYWORD {
            Ok(DeadLinkExemption::Localhost(LocalhostKeyword::LocalhostLinks))
        } else {
            Err(E::invalid_value(de::Unexpected::Str(keyword), &self))
        }
    }

    // Element errors carry the regex message through unchanged.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut patterns = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(pattern) = seq.next_element::<ExemptPattern>()? {
            patterns.push(pattern);
        }
        Ok(DeadLinkExemption::Patterns(patterns))
    }
}

impl<'de> Deserialize<'de> for DeadLinkExemption {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExemptionVisitor)
    }
}

impl Default for DeadLinkExemption {
    fn default() -> Self {
        Self::Patterns(Vec::new())
    }
}

impl DeadLinkExemption {
    pub fn patterns(patterns: impl IntoIterator<Item = ExemptPattern>) -> Self {
        Self::Patterns(patterns.into_iter().collect())
    }

    /// Check whether `link` is exempt from dead link validation.
    pub fn matches(&self, link: &str) -> bool {
        match self {
            Self::All(all) => *all,
            Self::Localhost(_) => is_localhost_url(link),
            Self::Patterns(patterns) => patterns.iter().any(|p| p.is_match(link)),
        }
    }

    /// The first pattern matching `link`, for reporting.
    pub fn matching_pattern(&self, link: &str) -> Option<&str> {
        match self {
            Self::Patterns(patterns) => patterns
                .iter()
                .find(|p| p.is_match(link))
                .map(ExemptPattern::as_str),
            Self::All(true) => Some("true"),
            Self::Localhost(_) if is_localhost_url(link) => Some(LOCALHOST_KEYWORD),
            _ => None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
