//! `quire check`: config validation plus dead link checking.

use anyhow::Result;

use quire::config::SiteConfig;
use quire::utils::{plural_count, plural_s};
use quire::validate::{LinkChecker, ValidationReport, scan_site};
use quire::{debug, log};

use super::args::CheckArgs;

/// Report key for links passed on the command line.
const ARGS_SOURCE: &str = "--link";

/// Check every link the site exposes.
///
/// The config has already been validated by the time this runs.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let src_dir = config.source_dir();
    debug!("check"; "scanning {}", src_dir.display());

    let scan = scan_site(&src_dir)?;
    log!(
        "check";
        "checking {} in {}",
        plural_count(scan.link_count() + args.links.len(), "link"),
        plural_count(scan.pages.len(), "page")
    );

    let checker = LinkChecker::from_scan(config, &scan);
    let mut report = ValidationReport::default();

    checker.check_config(config, &mut report);
    for page in &scan.pages {
        checker.check_page(page, &mut report);
    }
    for link in &args.links {
        report.record(ARGS_SOURCE, link, checker.check("/index.md", link));
    }

    if report.exempt > 0 {
        debug!("check"; "{} exempt through ignoreDeadLinks", plural_count(report.exempt, "link"));
    }

    report.print();
    log!("check"; "{}", report);

    if args.warn_only && !report.is_ok() {
        let count = report.broken_count();
        log!("warning"; "ignoring {} broken link{} (--warn-only)", count, plural_s(count));
        return Ok(());
    }
    report.into_result()
}
