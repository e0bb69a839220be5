//! Nav bar and sidebar markup.

use super::Render;
use crate::config::section::theme::{NavItem, Sidebar, SidebarGroup, SidebarItem, SocialLink};
use crate::utils::html::{escape, escape_attr};

fn push_anchor(out: &mut String, class: &str, item: &NavItem) {
    out.push_str("<a class=\"");
    out.push_str(class);
    out.push_str("\" href=\"");
    out.push_str(&escape_attr(&item.link));
    out.push('"');
    if item.is_external() {
        out.push_str(" target=\"_blank\" rel=\"noreferrer\"");
    }
    out.push('>');
    out.push_str(&escape(&item.text));
    out.push_str("</a>");
}

impl Render for NavItem {
    fn render_into(&self, out: &mut String) {
        push_anchor(out, "link", self);
    }
}

/// Top navigation bar, marking the item active on `route`.
pub fn render_nav(items: &[NavItem], route: Option<&str>) -> String {
    let mut out = String::from("<nav class=\"nav\">");
    for item in items {
        let active = route.is_some_and(|r| item.is_active(r));
        push_anchor(&mut out, if active { "link active" } else { "link" }, item);
    }
    out.push_str("</nav>");
    out
}

/// Social link bar.
pub fn render_social_links(links: &[SocialLink]) -> String {
    let mut out = String::from("<div class=\"social-links\">");
    links.render_into(&mut out);
    out.push_str("</div>");
    out
}

enum Step<'a> {
    Open(&'a SidebarGroup, usize),
    Link(&'a NavItem),
    Close,
}

impl Render for SidebarGroup {
    fn render_into(&self, out: &mut String) {
        let mut stack = vec![Step::Open(self, 0)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(group, level) => {
                    out.push_str("<section class=\"group level-");
                    out.push_str(&level.to_string());
                    if group.collapsed {
                        out.push_str(" collapsed");
                    }
                    out.push_str("\"><p class=\"text\">");
                    match &group.link {
                        Some(link) => {
                            out.push_str("<a href=\"");
                            out.push_str(&escape_attr(link));
                            out.push_str("\">");
                            out.push_str(&escape(&group.text));
                            out.push_str("</a>");
                        }
                        None => out.push_str(&escape(&group.text)),
                    }
                    out.push_str("</p>");

                    stack.push(Step::Close);
                    for item in group.items.iter().rev() {
                        stack.push(match item {
                            SidebarItem::Group(child) => Step::Open(child, level + 1),
                            SidebarItem::Link(link) => Step::Link(link),
                        });
                    }
                }
                Step::Link(item) => push_anchor(out, "item", item),
                Step::Close => out.push_str("</section>"),
            }
        }
    }
}

impl Render for Sidebar {
    fn render_into(&self, out: &mut String) {
        out.push_str("<aside class=\"sidebar\">");
        self.groups().render_into(out);
        out.push_str("</aside>");
    }
}
