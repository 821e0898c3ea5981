//! Server-rendered result fragment.

use regex::Regex;

/// Class name marking a pagination control inside a result fragment.
pub const PAGINATION_CLASS: &str = "search-submit";

/// One server-rendered result fragment, kept verbatim.
///
/// The fragment's markup is owned by the server; this type only carries it
/// to the surface and reports the pagination controls found inside it, so
/// an embedder that binds handlers directly (instead of delegating from
/// the result container) can re-attach them after every render.
#[derive(Debug, Clone)]
pub struct ResultFragment {
    html: String,
}

impl ResultFragment {
    /// Wraps a response body.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Returns the fragment markup verbatim.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Returns the page numbers carried by pagination controls, in order.
    pub fn pagination_targets(&self) -> Vec<usize> {
        let tag_re = Regex::new(r"<[^>]+>").unwrap();
        let value_re = Regex::new(r#"value="(\d+)""#).unwrap();

        let mut pages = Vec::new();
        for tag in tag_re.find_iter(&self.html) {
            if !tag.as_str().contains(PAGINATION_CLASS) {
                continue;
            }
            if let Some(captures) = value_re.captures(tag.as_str()) {
                if let Ok(page) = captures[1].parse::<usize>() {
                    pages.push(page);
                }
            }
        }
        pages
    }
}
