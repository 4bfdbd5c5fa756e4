//! Inline image payloads
//!
//! Uploaded files are stored as `data:` URLs. Pasted URLs are stored verbatim
//! and left as live references.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Where a stored image comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Embedded `data:` URL with its media type
    Embedded { mime: &'a str },
    /// Anything else (http(s), relative path, ...)
    External(&'a str),
}

/// Encode raw file bytes as a base64 `data:` URL.
///
/// Browsers report an empty type for unknown files; those fall back to
/// `application/octet-stream` like `FileReader.readAsDataURL` does.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Classify a stored image string
pub fn classify(src: &str) -> ImageSource<'_> {
    match src.strip_prefix("data:") {
        Some(rest) => {
            let header = rest.split(',').next().unwrap_or("");
            let mime = header.split(';').next().unwrap_or("");
            ImageSource::Embedded { mime }
        }
        None => ImageSource::External(src),
    }
}

/// Decode the payload of a base64 `data:` URL, if it is one
pub fn decode(src: &str) -> Option<Vec<u8>> {
    let rest = src.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}
