use scraper::{ElementRef, Html, Selector};

/// The parts of a page the sentence picker reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: Option<String>,
    /// Text of every `<p>` element, in document order, empty ones dropped.
    pub paragraphs: Vec<String>,
    /// blake3 hex digest of the raw HTML.
    pub checksum: String,
}

/// Pull the `<title>` and paragraph texts out of an HTML document.
///
/// Each text fragment inside a paragraph is trimmed and the fragments are
/// joined with single spaces, so inline markup does not glue words together.
///
/// ```
/// use topicline_web::extract_page;
///
/// let page = extract_page(
///     "<html><head><title> Rankings </title></head>\
///      <body><p>Rust <b>climbs</b> again.</p><p>  </p></body></html>",
/// );
/// assert_eq!(page.title.as_deref(), Some("Rankings"));
/// assert_eq!(page.paragraphs, ["Rust climbs again."]);
/// ```
pub fn extract_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title = selector("title")
        .and_then(|sel| {
            let first = document.select(&sel).next();
            first.map(element_text)
        })
        .filter(|t| !t.is_empty());

    let paragraphs: Vec<String> = selector("p")
        .map(|sel| {
            document
                .select(&sel)
                .map(element_text)
                .filter(|p| !p.is_empty())
                .collect()
        })
        .unwrap_or_default();

    tracing::debug!(
        title = ?title,
        paragraphs = paragraphs.len(),
        html_len = html.len(),
        "extract.page"
    );
    PageContent {
        title,
        paragraphs,
        checksum: blake3::hash(html.as_bytes()).to_hex().to_string(),
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(err) => {
            tracing::warn!(css, error = ?err, "extract.selector_invalid");
            None
        }
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
