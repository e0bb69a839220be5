//! Source tree scanning for the link checker.

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};

use crate::utils::url::normalize_route;

/// Directories never scanned.
const IGNORED_DIRS: &[&str] = &["node_modules"];

/// Static files under this directory are served from the site root.
const PUBLIC_DIR: &str = "public";

/// A markdown page and the links it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPage {
    /// Source path relative to the source directory, with a leading slash.
    pub source: String,
    /// Route the page is served at.
    pub route: String,
    /// Link and image destinations, in document order.
    pub links: Vec<String>,
}

/// Everything found under a source directory.
#[derive(Debug, Default)]
pub struct SiteScan {
    pub pages: Vec<ScannedPage>,
    /// Site paths of non-markdown files.
    pub assets: Vec<String>,
}

impl SiteScan {
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.route.as_str())
    }

    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }
}

/// Walk `src_dir`, reading every `*.md` page and recording other files as assets.
pub fn scan_site(src_dir: &Path) -> Result<SiteScan> {
    let mut scan = SiteScan::default();

    let mut files: Vec<_> = WalkDir::new(src_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| !is_ignored(path, src_dir))
        .collect();
    files.sort();

    for file in files {
        let Some(site_path) = site_path(&file, src_dir) else {
            continue;
        };

        if file.extension().is_some_and(|ext| ext == "md") {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            scan.pages.push(ScannedPage {
                route: normalize_route(&site_path),
                source: site_path,
                links: extract_links(&content),
            });
        } else {
            let public_prefix = format!("/{PUBLIC_DIR}/");
            let served = match site_path.strip_prefix(&public_prefix) {
                Some(rest) => format!("/{rest}"),
                None => site_path,
            };
            scan.assets.push(served);
        }
    }

    Ok(scan)
}

/// Link and image destinations in a markdown document.
pub fn extract_links(markdown: &str) -> Vec<String> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    Parser::new_ext(markdown, options)
        .filter_map(|event| match event {
            Event::Start(Tag::Link {
                link_type, dest_url, ..
            }) if link_type != LinkType::Email => Some(dest_url),
            Event::Start(Tag::Image { dest_url, .. }) => Some(dest_url),
            _ => None,
        })
        .filter(|dest| !dest.is_empty())
        .map(|dest| dest.into_string())
        .collect()
}

fn is_ignored(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| matches!(c, Component::Normal(name) if IGNORED_DIRS.iter().any(|d| name == *d)))
}

/// `/guide/stubs/json.md` for `<src_dir>/guide/stubs/json.md`.
fn site_path(file: &Path, src_dir: &Path) -> Option<String> {
    let relative = file.strip_prefix(src_dir).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect();
    Some(format!("/{}", parts.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let md = r#"# Stubs

See [JSON](./json.md) and [YAML](/guide/stubs/yaml#format).

![diagram](/images/flow.svg)

Call `[not a link](/code)` or <http://localhost:4771/ping>.

Mail <team@example.com>.

```
[inside code](/nope)
```
"#;
        assert_eq!(
            extract_links(md),
            [
                "./json.md",
                "/guide/stubs/yaml#format",
                "/images/flow.svg",
                "http://localhost:4771/ping",
            ]
        );
    }

    #[test]
    fn test_scan_site() {
        let dir = tempfile::Builder::new().prefix("site").tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("guide/stubs")).unwrap();
        fs::create_dir_all(root.join("public/images")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".vitepress")).unwrap();

        fs::write(root.join("index.md"), "[Guide](/guide/)").unwrap();
        fs::write(root.join("guide/index.md"), "# Guide").unwrap();
        fs::write(root.join("guide/stubs/json.md"), "[YAML](./yaml.md)").unwrap();
        fs::write(root.join("public/images/logo.svg"), "<svg/>").unwrap();
        fs::write(root.join("node_modules/pkg/readme.md"), "[x](/x)").unwrap();
        fs::write(root.join(".vitepress/config.md"), "").unwrap();

        let scan = scan_site(root).unwrap();

        let routes: Vec<_> = scan.routes().collect();
        assert_eq!(routes, ["/guide", "/guide/stubs/json", "/"]);
        assert_eq!(scan.pages[1].source, "/guide/stubs/json.md");
        assert_eq!(scan.pages[1].links, ["./yaml.md"]);
        assert_eq!(scan.assets, ["/images/logo.svg"]);
        assert_eq!(scan.link_count(), 2);
    }
}
