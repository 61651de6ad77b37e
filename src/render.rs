//! Markup rendering for pagination items
//!
//! The engine produces typed [`PageItem`]s; a [`PageRenderer`] turns them
//! into a fragment. [`HtmlRenderer`] emits a `<nav>` list whose links carry a
//! plain `href` followed by htmx partial-update attributes.

use crate::config::MarkupConfig;
use crate::pagination::{PageItem, Rel};
use std::fmt::Write as _;

/// Serializes pagination items into a markup fragment
pub trait PageRenderer {
    /// Render `items` in order. `target` is the DOM region id partial
    /// updates replace, if any.
    fn render(&self, items: &[PageItem], target: Option<&str>) -> String;
}

/// HTML renderer with htmx attributes
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    markup: MarkupConfig,
}

impl HtmlRenderer {
    /// Create a renderer with custom markup settings
    pub fn new(markup: MarkupConfig) -> Self {
        Self { markup }
    }

    /// Get the markup settings
    pub fn markup(&self) -> &MarkupConfig {
        &self.markup
    }

    fn label(&self, rel: Rel, page: u64) -> String {
        match rel {
            Rel::Previous => escape_html(&self.markup.previous_label),
            Rel::Next => escape_html(&self.markup.next_label),
            Rel::Page => page.to_string(),
        }
    }

    fn write_item(&self, out: &mut String, item: &PageItem, target: Option<&str>) {
        let m = &self.markup;
        out.push_str("<li>");
        match item {
            PageItem::Link {
                page,
                href,
                partial_href,
                rel,
            } => {
                let _ = write!(
                    out,
                    r#"<a class="{}" href="{}""#,
                    escape_html(&m.link_class),
                    escape_html(href)
                );
                let _ = write!(out, r#" hx-get="{}""#, escape_html(partial_href));
                if let Some(target) = target {
                    let _ = write!(out, r##" hx-target="#{}""##, escape_html(target));
                }
                if m.push_url {
                    let _ = write!(out, r#" hx-push-url="{}""#, escape_html(href));
                }
                match rel {
                    Rel::Previous => out.push_str(r#" rel="prev""#),
                    Rel::Next => out.push_str(r#" rel="next""#),
                    Rel::Page => {}
                }
                let _ = write!(out, ">{}</a>", self.label(*rel, *page));
            }
            PageItem::Current { page } => {
                let _ = write!(
                    out,
                    r#"<span class="{} {}" aria-current="page">{page}</span>"#,
                    escape_html(&m.link_class),
                    escape_html(&m.current_class)
                );
            }
            PageItem::Disabled { rel } => {
                let _ = write!(
                    out,
                    r#"<span class="{} {}" aria-disabled="true">{}</span>"#,
                    escape_html(&m.link_class),
                    escape_html(&m.disabled_class),
                    self.label(*rel, 0)
                );
            }
            PageItem::Ellipsis => {
                let _ = write!(
                    out,
                    r#"<span class="{}">{}</span>"#,
                    escape_html(&m.ellipsis_class),
                    escape_html(&m.ellipsis_label)
                );
            }
        }
        out.push_str("</li>");
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, items: &[PageItem], target: Option<&str>) -> String {
        if items.is_empty() {
            return String::new();
        }

        let m = &self.markup;
        let mut out = String::with_capacity(items.len() * 160);
        let _ = write!(
            out,
            r#"<nav class="{}" aria-label="{}"><ul class="{}">"#,
            escape_html(&m.nav_class),
            escape_html(&m.aria_label),
            escape_html(&m.list_class)
        );
        for item in items {
            self.write_item(&mut out, item, target);
        }
        out.push_str("</ul></nav>");
        out
    }
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
