//! Page sources: where a run's listing text comes from.

use eventwatch_core::errors::{ExError, ExErrorKind};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{bad_status, from_reqwest, read_page, Result};
use crate::html::{html_to_text, looks_like_html};

/// Decoded listing text plus the location it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Recorded as `source_url` on every extracted event
    pub url: String,
    pub text: String,
}

/// Fetch collaborator for one run.
///
/// Implementations hand back line-oriented text; any markup decoding
/// happens before the page reaches the extractor.
pub trait PageSource {
    /// # Errors
    ///
    /// `Fetch`, `Timeout`, `NotFound` or `Io` depending on the transport.
    fn fetch(&self) -> Result<FetchedPage>;

    /// Human-readable location for logs.
    fn location(&self) -> String;
}

/// Listing page served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// # Errors
    ///
    /// `InvalidConfig` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ExError::new(ExErrorKind::InvalidConfig)
                    .with_op("build_http_client")
                    .with_message(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self) -> Result<FetchedPage> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| from_reqwest(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(bad_status(&self.url, status));
        }

        let is_html_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("html"));
        let body = response.text().map_err(|e| from_reqwest(&self.url, e))?;
        tracing::debug!(url = %self.url, bytes = body.len(), %status, "Fetched listing page");

        let text = if is_html_type || looks_like_html(&body) {
            html_to_text(&body)
        } else {
            body
        };
        Ok(FetchedPage {
            url: self.url.clone(),
            text,
        })
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Listing saved to a local file; `.html`/`.htm` files are decoded.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_html(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
    }
}

impl PageSource for FileSource {
    fn fetch(&self) -> Result<FetchedPage> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| read_page(&self.path, e))?;
        let text = if self.is_html() { html_to_text(&raw) } else { raw };
        Ok(FetchedPage {
            url: self.location(),
            text,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_plain_text_passthrough() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listing.txt");
        std::fs::write(&path, "NV - Spring Open - Reno\n").unwrap();

        let page = FileSource::new(&path).fetch().unwrap();
        assert_eq!(page.text, "NV - Spring Open - Reno\n");
        assert_eq!(page.url, path.display().to_string());
    }

    #[test]
    fn test_file_source_decodes_html_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listing.HTML");
        std::fs::write(&path, "<li>NV &ndash; Spring Open</li><li>CA - Palm Classic</li>").unwrap();

        let page = FileSource::new(&path).fetch().unwrap();
        assert_eq!(page.text, "NV – Spring Open\nCA - Palm Classic");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FileSource::new(dir.path().join("absent.txt")).fetch().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
    }

    #[test]
    fn test_http_source_builds_client() {
        let source = HttpSource::new("https://example.test/events", 5, "eventwatch-test").unwrap();
        assert_eq!(source.location(), "https://example.test/events");
    }

    #[test]
    fn test_unreachable_host_is_fetch_error() {
        // port 9 on localhost: discard service, normally closed
        let source = HttpSource::new("http://127.0.0.1:9/events", 2, "eventwatch-test").unwrap();
        let err = source.fetch().unwrap_err();
        assert!(matches!(err.kind(), ExErrorKind::Fetch | ExErrorKind::Timeout));
    }
}
