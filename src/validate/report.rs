//! Link check report and formatting.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use super::LinkStatus;
use crate::utils::{plural_count, plural_s};

/// A single broken link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// The link as written.
    pub target: String,
    /// Why it failed.
    pub reason: String,
}

/// Outcome of checking every link in a site.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Broken links, grouped by the file they appear in.
    pub broken: BTreeMap<String, Vec<BrokenLink>>,
    /// Links skipped through `ignoreDeadLinks`.
    pub exempt: usize,
    /// External links that are not fetched.
    pub unchecked: usize,
    /// Links that resolved.
    pub valid: usize,
}

impl ValidationReport {
    /// Tally `status` for `link` found in `source`.
    pub fn record(&mut self, source: &str, link: &str, status: LinkStatus) {
        match status {
            LinkStatus::Valid => self.valid += 1,
            LinkStatus::Exempt => self.exempt += 1,
            LinkStatus::Unchecked => self.unchecked += 1,
            LinkStatus::Broken(reason) => self.add_broken(source, link, reason),
        }
    }

    pub fn add_broken(&mut self, source: &str, link: &str, reason: impl Into<String>) {
        self.broken
            .entry(source.to_string())
            .or_default()
            .push(BrokenLink {
                target: link.to_string(),
                reason: reason.into(),
            });
    }

    /// Files with at least one broken link.
    pub fn file_count(&self) -> usize {
        self.broken.len()
    }

    pub fn broken_count(&self) -> usize {
        self.broken.values().map(Vec::len).sum()
    }

    /// Every link seen, whatever its status.
    pub fn total(&self) -> usize {
        self.valid + self.exempt + self.unchecked + self.broken_count()
    }

    pub fn is_ok(&self) -> bool {
        self.broken.is_empty()
    }

    /// Print broken links grouped by file to stderr.
    pub fn print(&self) {
        if self.broken.is_empty() {
            return;
        }
        eprintln!();

        let file_count = self.file_count();
        let error_count = self.broken_count();
        eprintln!(
            "{} {}",
            "links".red().bold(),
            format!(
                "({file_count} file{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, links) in &self.broken {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for link in links {
                eprintln!("{} {} {}", "→".red(), link.target, link.reason.dimmed());
            }
        }
    }

    /// Fail when anything is broken.
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            return Ok(());
        }
        bail!(
            "{} in {}",
            plural_count(self.broken_count(), "broken link"),
            plural_count(self.file_count(), "file")
        )
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let broken = self.broken_count();
        if broken == 0 {
            write!(f, "{}", "all links valid".green())?;
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                broken.to_string().red().bold(),
                format!("broken link{}", plural_s(broken)).dimmed()
            )?;
        }
        write!(
            f,
            " {}",
            format!("({} exempt, {} external)", self.exempt, self.unchecked).dimmed()
        )
    }
}
