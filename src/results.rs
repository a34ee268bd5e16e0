use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maximum number of links kept per page
pub const MAX_LINKS: usize = 5;

/// Readable content extracted from a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Text of the `<title>` element (empty if the page has none)
    pub title: String,

    /// Cleaned text of the main-content region
    pub content: String,

    /// First few absolute links found on the page
    #[serde(default)]
    pub links: Vec<String>,
}

impl ExtractedPage {
    /// Create a new page record, keeping at most [`MAX_LINKS`] links
    pub fn new(title: String, content: String, mut links: Vec<String>) -> Self {
        links.truncate(MAX_LINKS);
        Self {
            title,
            content,
            links,
        }
    }
}

/// Per-URL entry of a [`ContentMap`]
///
/// Serialized untagged, so a page looks like `{title, content, links}` and a
/// failure like `{error}` on the wire. Anything else a client sends back is
/// kept as raw JSON and ignored when building prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRecord {
    Page(ExtractedPage),
    Failed { error: String },
    Other(serde_json::Value),
}

impl PageRecord {
    /// Returns the extracted page if this record holds one
    pub fn as_page(&self) -> Option<&ExtractedPage> {
        match self {
            PageRecord::Page(page) => Some(page),
            _ => None,
        }
    }
}

impl From<ExtractedPage> for PageRecord {
    fn from(page: ExtractedPage) -> Self {
        PageRecord::Page(page)
    }
}

/// Source URL to extracted record, in the order the URLs were supplied
pub type ContentMap = IndexMap<String, PageRecord>;
