//! Fetch a web page through a JSON-wrapping CORS proxy and keep its
//! paragraph text.

mod html;

use std::time::Duration;

use serde::Deserialize;

pub use html::extract_paragraphs;

/// Separator between imported paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("No URL given")]
    EmptyUrl,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Proxy returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid proxy payload: {0}")]
    InvalidPayload(String),

    #[error("No paragraphs found on page")]
    NoParagraphs,
}

/// allorigins-style `/get` response
#[derive(Debug, Deserialize)]
struct ProxyPayload {
    contents: Option<String>,
}

#[derive(Clone)]
pub struct PageImporter {
    client: reqwest::Client,
    proxy_url: String,
}

impl PageImporter {
    pub fn new(proxy_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            proxy_url,
        }
    }

    pub fn with_timeout(proxy_url: String, timeout: Duration) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, proxy_url })
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    /// Fetch `url` and return its paragraphs joined by blank lines
    pub async fn fetch_text(&self, url: &str) -> Result<String, ImportError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ImportError::EmptyUrl);
        }

        let html = self.fetch_html(url).await?;
        let paragraphs = extract_paragraphs(&html);
        tracing::info!("Imported {} paragraphs from {}", paragraphs.len(), url);

        join_paragraphs(paragraphs)
    }

    async fn fetch_html(&self, url: &str) -> Result<String, ImportError> {
        tracing::debug!("Fetching {} via {}", url, self.proxy_url);

        let response = self
            .client
            .get(&self.proxy_url)
            .query(&[("url", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_payload(&body)
    }
}

fn parse_payload(body: &str) -> Result<String, ImportError> {
    let payload: ProxyPayload =
        serde_json::from_str(body).map_err(|e| ImportError::InvalidPayload(e.to_string()))?;

    payload
        .contents
        .ok_or_else(|| ImportError::InvalidPayload("missing `contents`".to_string()))
}

fn join_paragraphs(paragraphs: Vec<String>) -> Result<String, ImportError> {
    if paragraphs.is_empty() {
        return Err(ImportError::NoParagraphs);
    }
    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_is_rejected_before_fetching() {
        // Unroutable proxy: any request would fail with a network error
        let importer = PageImporter::new("http://127.0.0.1:9/get".to_string());

        assert!(matches!(
            importer.fetch_text("").await,
            Err(ImportError::EmptyUrl)
        ));
        assert!(matches!(
            importer.fetch_text("   ").await,
            Err(ImportError::EmptyUrl)
        ));
    }

    #[test]
    fn test_parse_payload() {
        let html = parse_payload(r#"{"contents": "<p>你好</p>", "status": {"http_code": 200}}"#)
            .unwrap();
        assert_eq!(html, "<p>你好</p>");
    }

    #[test]
    fn test_parse_payload_errors() {
        assert!(matches!(
            parse_payload("not json"),
            Err(ImportError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"contents": null}"#),
            Err(ImportError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_join_paragraphs() {
        let text = join_paragraphs(vec!["第一段。".to_string(), "第二段。".to_string()]).unwrap();
        assert_eq!(text, "第一段。\n\n第二段。");

        assert!(matches!(
            join_paragraphs(Vec::new()),
            Err(ImportError::NoParagraphs)
        ));
    }

    #[test]
    fn test_page_without_paragraphs() {
        let html = "<html><body><div>只有 div</div></body></html>";
        assert!(matches!(
            join_paragraphs(extract_paragraphs(html)),
            Err(ImportError::NoParagraphs)
        ));
    }
}
