//! Page metadata extraction (title and favicon reference)

use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Metadata pulled from a page's markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub icon_ref: Option<String>,
}

static TITLE_SELECTOR: OnceLock<Selector> = OnceLock::new();
static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn title_selector() -> &'static Selector {
    TITLE_SELECTOR.get_or_init(|| Selector::parse("title").expect("static selector"))
}

fn link_selector() -> &'static Selector {
    LINK_SELECTOR.get_or_init(|| Selector::parse("link[rel][href]").expect("static selector"))
}

/// Extract the page title and favicon href from HTML.
///
/// Never fails: the parser recovers from broken markup and missing
/// fields come back as `None`.
pub fn extract(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = document
        .select(title_selector())
        .map(|el| el.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty());

    let icon_ref = document
        .select(link_selector())
        .filter(|el| el.value().attr("rel").is_some_and(is_icon_rel))
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
        .map(str::to_string);

    PageMetadata { title, icon_ref }
}

fn is_icon_rel(rel: &str) -> bool {
    let rel = rel.trim();
    rel.eq_ignore_ascii_case("icon") || rel.eq_ignore_ascii_case("shortcut icon")
}
