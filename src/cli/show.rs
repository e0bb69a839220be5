//! Read-only commands: `head`, `nav`, `dump`.

use std::fmt::Write as _;

use anyhow::Result;

use quire::config::SiteConfig;
use quire::config::section::theme::{SidebarGroup, SidebarItem};
use quire::render::render_head;

/// `quire head`
pub fn print_head(config: &SiteConfig, title: Option<&str>) -> Result<()> {
    print!("{}", render_head(config, title));
    Ok(())
}

/// `quire dump`
pub fn print_json(config: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", config.to_runtime_json(pretty)?);
    Ok(())
}

/// `quire nav`
pub fn print_nav(config: &SiteConfig) -> Result<()> {
    print!("{}", nav_outline(config));
    Ok(())
}

/// Indented outline of the nav bar and sidebar tree.
fn nav_outline(config: &SiteConfig) -> String {
    let theme = &config.theme_config;
    let mut out = String::new();

    out.push_str("nav\n");
    for item in &theme.nav {
        writeln!(out, "  {} → {}", item.text, item.link).ok();
    }

    out.push_str("sidebar\n");
    let mut stack: Vec<(&SidebarItem, usize)> = Vec::new();
    for group in theme.sidebar.groups() {
        push_group(&mut out, group, 1);
        stack.extend(group.items.iter().rev().map(|item| (item, 2)));

        while let Some((item, level)) = stack.pop() {
            match item {
                SidebarItem::Link(link) => {
                    writeln!(out, "{}{} → {}", "  ".repeat(level), link.text, link.link).ok();
                }
                SidebarItem::Group(group) => {
                    push_group(&mut out, group, level);
                    stack.extend(group.items.iter().rev().map(|item| (item, level + 1)));
                }
            }
        }
    }

    out
}

fn push_group(out: &mut String, group: &SidebarGroup, level: usize) {
    let indent = "  ".repeat(level);
    let marker = if group.collapsed { " (collapsed)" } else { "" };
    let written = match &group.link {
        Some(link) => writeln!(out, "{indent}{}{marker} → {link}", group.text),
        None => writeln!(out, "{indent}{}{marker}", group.text),
    };
    written.ok();
}
