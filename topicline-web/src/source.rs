use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use topicline_http::{HttpClient, RequestOpts};
use url::Url;

use crate::extract::{PageContent, extract_page};

#[derive(Debug, Clone)]
pub struct PageCapture {
    pub url: Url,
    pub html: String,
    pub content: PageContent,
}

impl PageCapture {
    /// Page title, or the URL when the page has none.
    pub fn title_or_url(&self) -> String {
        self.content
            .title
            .clone()
            .unwrap_or_else(|| self.url.to_string())
    }
}

/// Something that can turn a URL into extracted page content.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn capture(&self, url: &Url) -> Result<PageCapture>;
}

/// Plain HTTP GET followed by HTML extraction.
pub struct HttpPageSource {
    client: HttpClient,
}

impl HttpPageSource {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PageSource for HttpPageSource {
    async fn capture(&self, url: &Url) -> Result<PageCapture> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.5"),
        );
        let opts = RequestOpts {
            headers: Some(headers),
            ..Default::default()
        };

        let html = self
            .client
            .get_text(url.as_str(), opts)
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        let content = extract_page(&html);
        tracing::info!(
            %url,
            paragraphs = content.paragraphs.len(),
            checksum = %content.checksum,
            "page.captured"
        );
        Ok(PageCapture {
            url: url.clone(),
            html,
            content,
        })
    }
}
