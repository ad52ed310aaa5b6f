//! Embeddable image bytes.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Mime type assumed when nothing better is known.
pub const FALLBACK_MIME: &str = "image/jpeg";

/// Image bytes plus their mime type, ready to embed as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Mime type, e.g. `image/png`.
    pub mime: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// True if the image was synthesized rather than loaded.
    pub placeholder: bool,
}

impl ImagePayload {
    /// A loaded image.
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
            placeholder: false,
        }
    }

    /// A synthesized SVG image.
    pub fn svg(markup: String) -> Self {
        Self {
            mime: "image/svg+xml".to_string(),
            bytes: markup.into_bytes(),
            placeholder: true,
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Guess a mime type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => FALLBACK_MIME,
    }
}

/// Mime type from a `Content-Type` header value, without parameters.
pub fn mime_from_content_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_guessed_from_extension() {
        assert_eq!(mime_for_path(Path::new("a/b.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("noext")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.bmp")), "image/jpeg");
    }

    #[test]
    fn content_type_parameters_dropped() {
        assert_eq!(
            mime_from_content_type(Some("image/png; charset=binary")),
            "image/png"
        );
        assert_eq!(mime_from_content_type(Some("")), "image/jpeg");
        assert_eq!(mime_from_content_type(None), "image/jpeg");
    }

    #[test]
    fn data_uri_is_base64() {
        let payload = ImagePayload::new("image/png", b"abc".to_vec());
        assert_eq!(payload.data_uri(), "data:image/png;base64,YWJj");
        assert!(!payload.placeholder);
    }
}
