//! Daily brief rendering.
//!
//! Wraps pulldown-cmark behind [`MarkupRenderer`] so the dashboard can always
//! fall back to showing the literal text.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Other(String),
}

pub trait MarkupRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// CommonMark with tables, strikethrough and task lists.
///
/// Raw HTML in the source is emitted as escaped text rather than passed through,
/// and link or image targets outside [`is_safe_url`] are replaced with `#`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommonMarkRenderer;

impl MarkupRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, options()).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: safe_dest(dest_url),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: safe_dest(dest_url),
                title,
                id,
            }),
            other => other,
        });
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

fn safe_dest(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest) {
        dest
    } else {
        warn!(url = &*dest, "dropping unsafe link target");
        CowStr::Borrowed("#")
    }
}

/// `true` for http, https and mailto URLs and for relative references.
///
/// Whitespace and control characters are ignored when reading the scheme,
/// since browsers strip them too.
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(at) if cleaned[at..].starts_with(':') => {
            let scheme = cleaned[..at].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render the brief, falling back to the escaped literal text on failure.
pub fn render_brief(renderer: &impl MarkupRenderer, markdown: &str) -> String {
    match renderer.render(markdown) {
        Ok(fragment) => fragment,
        Err(err) => {
            warn!(error = %err, "brief render failed; showing raw text");
            literal_fragment(markdown)
        }
    }
}

pub fn literal_fragment(text: &str) -> String {
    format!("<pre>{}</pre>", escape_html(text))
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
