//! Social link markup.

use super::Render;
use crate::config::section::theme::{SocialIcon, SocialLink};
use crate::utils::html::escape_attr;

impl Render for SocialIcon {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Named(name) => {
                out.push_str("<span class=\"icon icon-");
                out.push_str(&escape_attr(name));
                out.push_str("\"></span>");
            }
            // Inline markup is trusted config content.
            Self::Svg { svg } => out.push_str(svg.trim()),
        }
    }
}

impl Render for SocialLink {
    fn render_into(&self, out: &mut String) {
        out.push_str("<a class=\"social-link\" href=\"");
        out.push_str(&escape_attr(&self.link));
        out.push_str("\" aria-label=\"");
        out.push_str(&escape_attr(self.label()));
        out.push_str("\" target=\"_blank\" rel=\"noopener\">");
        self.icon.render_into(out);
        out.push_str("</a>");
    }
}
