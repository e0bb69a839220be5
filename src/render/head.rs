//! `<head>` markup.

use super::Render;
use crate::config::{HeadInjection, HeadTag, SiteConfig};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};

impl Render for HeadTag {
    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            // Empty value: boolean attribute (`async`, `defer`, ...)
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');

        if is_void_element(&self.tag) {
            return;
        }
        if let Some(content) = &self.content {
            if is_raw_text_element(&self.tag) {
                out.push_str(content);
            } else {
                out.push_str(&escape(content));
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// One tag per line, in declaration order.
impl Render for HeadInjection {
    fn render_into(&self, out: &mut String) {
        for tag in self {
            tag.render_into(out);
            out.push('\n');
        }
    }
}

/// Full `<head>` fragment for a page: charset, title, description, then
/// the configured injections in order.
pub fn render_head(config: &SiteConfig, page_title: Option<&str>) -> String {
    let mut out = String::from("<meta charset=\"utf-8\">\n");

    let title = config.page_title(page_title);
    if !title.is_empty() {
        out.push_str("<title>");
        out.push_str(&escape(&title));
        out.push_str("</title>\n");
    }

    if !config.description.is_empty() {
        HeadTag::meta("description", &config.description).render_into(&mut out);
        out.push('\n');
    }

    config.head.render_into(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_boolean_and_escaped_attrs() {
        let tag = HeadTag::new("script")
            .attr("async", "")
            .attr("src", "https://example.com/a.js?x=1&y=\"2\"");
        assert_eq!(
            tag.render(),
            "<script async src=\"https://example.com/a.js?x=1&amp;y=&quot;2&quot;\"></script>"
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let tag = HeadTag::link("icon", "/favicon.svg");
        assert_eq!(tag.render(), "<link href=\"/favicon.svg\" rel=\"icon\">");
    }

    #[test]
    fn test_raw_text_content_verbatim() {
        let script = HeadTag::new("script").with_content("if (a < b && c) {}");
        assert_eq!(script.render(), "<script>if (a < b && c) {}</script>");

        let title = HeadTag::new("noscript").with_content("<b>on</b>");
        assert_eq!(title.render(), "<noscript>&lt;b&gt;on&lt;/b&gt;</noscript>");
    }

    #[test]
    fn test_uppercase_script_stays_raw() {
        let script = HeadTag::new("SCRIPT").with_content("if (a < b) {}");
        assert_eq!(script.render(), "<SCRIPT>if (a < b) {}</SCRIPT>");
        assert_eq!(HeadTag::new("META").attr("charset", "utf-8").render(), "<META charset=\"utf-8\">");
    }

    #[test]
    fn test_analytics_pair_emitted_in_order() {
        let head = HeadInjection::new(HeadTag::analytics("G-TEST").to_vec());
        let html = head.render();

        let loader = html.find("<script async src=").unwrap();
        let inline = html.find("window.dataLayer").unwrap();
        assert!(loader < inline);
        assert_eq!(html.matches("</script>\n").count(), 2);
    }

    #[test]
    fn test_render_head() {
        let config = test_parse_config(
            r#"[[head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.svg" }
"#,
        );
        let html = render_head(&config, Some("JSON stubs"));
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(
            lines,
            [
                "<meta charset=\"utf-8\">",
                "<title>JSON stubs | Test</title>",
                "<meta content=\"Test\" name=\"description\">",
                "<link href=\"/favicon.svg\" rel=\"icon\">",
            ]
        );
    }

    #[test]
    fn test_render_head_without_description() {
        let config = SiteConfig::default();
        assert_eq!(render_head(&config, None), "<meta charset=\"utf-8\">\n");
    }
}
