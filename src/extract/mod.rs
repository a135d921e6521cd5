//! HTML to readable text.
//!
//! Deliberately shallow: drop non-content elements, prefer the first
//! `<article>`/`<main>` container, and let `html2text` render the rest.

use std::io::Cursor;

use html2text::render::TrivialDecorator;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::core::models::Article;

/// Wide enough that `html2text` never wraps a paragraph.
const RENDER_WIDTH: usize = 10_000;

static NON_CONTENT: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script, style, noscript, template, iframe, svg")
        .expect("static selector parse")
});

// Tried in order; the first one with visible text wins.
static CONTAINERS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["article", "main", "body"]
        .iter()
        .map(|css| Selector::parse(css).expect("static selector parse"))
        .collect()
});

static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("static selector parse"));

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("static selector parse"));

/// Convert an HTML fragment to plain text, one block per line.
///
/// Links keep their text only and images contribute nothing. A fragment
/// `html2text` cannot render yields an empty string.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    render_text(html, RENDER_WIDTH)
}

fn render_text(html: &str, width: usize) -> String {
    let rendered = match html2text::from_read_with_decorator(
        Cursor::new(html.as_bytes()),
        width,
        TrivialDecorator::new(),
    ) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Failed to render HTML");
            return String::new();
        }
    };

    rendered
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Extract the title and readable body text of a page.
///
/// `page_url` supplies the host-name fallback when the page has no title.
#[must_use]
pub fn extract_article(html: &str, page_url: &str) -> Article {
    let mut document = Html::parse_document(html);
    strip_non_content(&mut document);

    let title = extract_title(&document)
        .or_else(|| {
            Url::parse(page_url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
        })
        .unwrap_or_else(|| page_url.to_string());

    let text = CONTAINERS
        .iter()
        .find_map(|selector| {
            document
                .select(selector)
                .map(|el| html_to_text(&el.inner_html()))
                .find(|text| !text.is_empty())
        })
        .unwrap_or_default();

    Article { title, text }
}

fn strip_non_content(document: &mut Html) {
    let ids: Vec<_> = document.select(&NON_CONTENT).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let og = document
        .select(&OG_TITLE)
        .filter_map(|el| el.value().attr("content"))
        .map(single_line);

    let plain = document
        .select(&TITLE)
        .map(|el| single_line(&el.text().collect::<String>()));

    og.chain(plain).find(|t| !t.is_empty())
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
