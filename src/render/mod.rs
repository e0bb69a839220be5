//! HTML emission for config values.
//!
//! Every renderable config type implements [`Render`]. Callers never match
//! on variants (`SocialIcon::Named` vs `SocialIcon::Svg`, links vs nested
//! groups); each value decides its own markup.
//!
//! | Module   | Renders                                  |
//! |----------|------------------------------------------|
//! | `head`   | `HeadTag`, `HeadInjection`, page `<head>` |
//! | `nav`    | `NavItem`, nav bar, `Sidebar`            |
//! | `social` | `SocialIcon`, `SocialLink`               |

mod head;
mod nav;
mod social;

pub use head::render_head;
pub use nav::{render_nav, render_social_links};

/// A value that can write itself as HTML.
pub trait Render {
    /// Append markup to `out`.
    fn render_into(&self, out: &mut String);

    /// Render into a fresh string.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<T: Render> Render for [T] {
    fn render_into(&self, out: &mut String) {
        for item in self {
            item.render_into(out);
        }
    }
}
