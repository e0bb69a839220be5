//! Build-time dead link checker.
//!
//! # Resolution order
//!
//! For each link [`LinkChecker::check`] decides, first match wins:
//!
//! 1. matches `ignoreDeadLinks` → [`LinkStatus::Exempt`]
//! 2. fragment on the current page → [`LinkStatus::Valid`]
//! 3. localhost / loopback URL → broken, unreachable from CI
//! 4. other URL with a scheme → [`LinkStatus::Unchecked`]
//! 5. site-root or file-relative path → valid iff it names a known page or file
//!
//! An exempt link therefore never fails the build.

mod link;
mod report;
mod scan;

pub use link::LinkKind;
pub use report::{BrokenLink, ValidationReport};
pub use scan::{ScannedPage, SiteScan, extract_links, scan_site};

use rustc_hash::FxHashSet;

use crate::config::{DeadLinkExemption, SiteConfig};
use crate::utils::url::{normalize_route, resolve_relative, strip_base};

/// Report key for links declared in the config itself.
pub const CONFIG_SOURCE: &str = "themeConfig";

/// Page that relative config links are resolved against.
const CONFIG_BASE_PAGE: &str = "/index.md";

/// Outcome of checking one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Resolves to a known page, file or anchor.
    Valid,
    /// Skipped through `ignoreDeadLinks`.
    Exempt,
    /// External, not fetched.
    Unchecked,
    /// Does not resolve.
    Broken(String),
}

impl LinkStatus {
    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken(_))
    }
}

/// Resolves links against the set of known routes.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    exemption: DeadLinkExemption,
    base: String,
    routes: FxHashSet<String>,
    assets: FxHashSet<String>,
}

impl LinkChecker {
    /// Checker for a site serving `routes`.
    pub fn new<I, S>(config: &SiteConfig, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = config.base.clone();
        let routes = routes
            .into_iter()
            .map(|route| normalize_route(strip_base(route.as_ref(), &base)))
            .collect();
        Self {
            exemption: config.ignore_dead_links.clone(),
            base,
            routes,
            assets: FxHashSet::default(),
        }
    }

    /// Checker for everything found by [`scan_site`].
    pub fn from_scan(config: &SiteConfig, scan: &SiteScan) -> Self {
        Self::new(config, scan.routes()).with_assets(&scan.assets)
    }

    /// Also accept links to these static file paths.
    pub fn with_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.assets
            .extend(assets.into_iter().map(|a| a.as_ref().to_string()));
        self
    }

    pub fn has_route(&self, route: &str) -> bool {
        self.routes.contains(&normalize_route(route))
    }

    /// Check `link` as written in the page at `source`
    /// (a source path such as `/guide/stubs/json.md`).
    pub fn check(&self, source: &str, link: &str) -> LinkStatus {
        if self.exemption.matches(link) {
            return LinkStatus::Exempt;
        }

        let target = match LinkKind::parse(link) {
            LinkKind::Fragment(_) => return LinkStatus::Valid,
            LinkKind::Localhost(_) => {
                return LinkStatus::Broken("unreachable local endpoint".into());
            }
            LinkKind::External(_) => return LinkStatus::Unchecked,
            LinkKind::SiteRoot(path) => strip_base(path_part(path), &self.base).to_string(),
            LinkKind::FileRelative(path) => {
                let path = path_part(path);
                if path.is_empty() {
                    return LinkStatus::Broken("empty link".into());
                }
                resolve_relative(source, path)
            }
        };

        if self.assets.contains(&target) || self.routes.contains(&normalize_route(&target)) {
            LinkStatus::Valid
        } else {
            LinkStatus::Broken("page not found".into())
        }
    }

    /// Check every link of a scanned page.
    pub fn check_page(&self, page: &ScannedPage, report: &mut ValidationReport) {
        for link in &page.links {
            report.record(&page.source, link, self.check(&page.source, link));
        }
    }

    /// Check the links declared in `config`: nav bar, sidebar, social links
    /// and the edit link as it would appear on the home page.
    pub fn check_config(&self, config: &SiteConfig, report: &mut ValidationReport) {
        let theme = &config.theme_config;
        let nav = theme.nav.iter().map(|item| item.link.as_str());
        let sidebar = theme.sidebar.links().map(|entry| entry.link);
        let social = theme.social_links.iter().map(|social| social.link.as_str());

        for link in nav.chain(sidebar).chain(social) {
            report.record(CONFIG_SOURCE, link, self.check(CONFIG_BASE_PAGE, link));
        }

        if let Some(edit_link) = &theme.edit_link {
            let link = edit_link.url_for(CONFIG_BASE_PAGE);
            let status = self.check(CONFIG_BASE_PAGE, &link);
            report.record(CONFIG_SOURCE, &link, status);
        }
    }
}

/// Link without query string or fragment.
fn path_part(link: &str) -> &str {
    link.split(['?', '#']).next().unwrap_or_default()
}
