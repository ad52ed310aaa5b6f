//! Reachability check for remote image URLs.

use std::time::Duration;

use crate::error::AssetResult;

/// URLs checked when none are given.
pub const DEFAULT_PROBE_URLS: [&str; 4] = [
    "https://img1.doubanio.com/view/photo/s_ratio_poster/public/p2873330697.jpg",
    "https://img1.doubanio.com/view/photo/s_ratio_poster/public/p2554699049.jpg",
    "https://picsum.photos/seed/test1/300/450",
    "https://via.placeholder.com/300x450",
];

/// Default per-request timeout for probes.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// What a server answered for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// The probed URL.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Body length in bytes.
    pub bytes: usize,
}

impl ProbeReport {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET `url` with a timeout and report the response. Any status code is a
/// report; only transport failures are errors.
pub fn probe(url: &str, timeout: Duration) -> AssetResult<ProbeReport> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes()?.len();
    tracing::debug!(url, status, bytes, "probe finished");
    Ok(ProbeReport {
        url: url.to_string(),
        status,
        content_type,
        bytes,
    })
}
