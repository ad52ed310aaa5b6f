//! Remote image retrieval.

use std::time::Duration;

use crate::error::{AssetError, AssetResult};

/// A successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Response body.
    pub bytes: Vec<u8>,
    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
}

/// Something that can download a URL.
pub trait Fetch {
    /// Download `url`. Non-success status codes are errors.
    fn fetch(&self, url: &str) -> AssetResult<Fetched>;
}

/// Blocking HTTP fetcher with no request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher. Requests wait as long as the server takes.
    pub fn new() -> AssetResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> AssetResult<Fetched> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Unavailable {
                reference: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes()?.to_vec();
        tracing::debug!(url, bytes = bytes.len(), "fetched remote image");
        Ok(Fetched {
            bytes,
            content_type,
        })
    }
}
