use crate::parsers::text;
use crate::results::{ExtractedPage, MAX_LINKS};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Page chrome that never contributes text or links
static STRIPPED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("header, footer, nav, script, style, iframe, form").unwrap());

static MAIN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static ARTICLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static CLASSED: LazyLock<Selector> = LazyLock::new(|| Selector::parse("[class]").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

static CONTENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)content|main|article").unwrap());

/// Extracts title, cleaned main content and links from an HTML page
///
/// `base` is the URL the page was fetched from; relative links are resolved
/// against it.
pub fn extract(html: &str, base: &Url) -> ExtractedPage {
    let mut doc = Html::parse_document(html);

    let title = extract_title(&doc);

    strip_boilerplate(&mut doc);

    let region = select_main_region(doc.root_element());
    let content = text::clean_text(&text::join_fragments(region.text()));

    let links = extract_links(doc.root_element(), base);

    ::log::debug!(
        "HTML parser extracted {} chars and {} links",
        content.len(),
        links.len()
    );

    ExtractedPage::new(title, content, links)
}

/// Detaches every boilerplate element from the document tree
///
/// Later selections start from the root element, so detached subtrees are
/// unreachable for text, region and link extraction.
pub fn strip_boilerplate(doc: &mut Html) {
    let ids = doc
        .root_element()
        .select(&STRIPPED)
        .map(|el| el.id())
        .collect::<Vec<_>>();

    ::log::trace!("Stripping {} boilerplate elements", ids.len());

    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Picks the element most likely to hold the page body
///
/// Priority: `<main>`, then `<article>`, then the first element with a
/// content-like class, then the whole document.
pub fn select_main_region(root: ElementRef<'_>) -> ElementRef<'_> {
    root.select(&MAIN)
        .next()
        .or_else(|| root.select(&ARTICLE).next())
        .or_else(|| {
            root.select(&CLASSED).find(|el| {
                el.value()
                    .attr("class")
                    .is_some_and(|class| CONTENT_CLASS.is_match(class))
            })
        })
        .unwrap_or(root)
}

/// Text of the first `<title>` element, or an empty string
pub fn extract_title(doc: &Html) -> String {
    doc.root_element()
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Resolves the first [`MAX_LINKS`] non-empty anchors against `base`
pub fn extract_links(root: ElementRef<'_>, base: &Url) -> Vec<String> {
    root.select(&ANCHOR)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| !href.trim().is_empty())
        .filter_map(|href| match base.join(href) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                ::log::debug!("Skipping unresolvable link {}: {}", href, e);
                None
            }
        })
        .take(MAX_LINKS)
        .collect()
}
