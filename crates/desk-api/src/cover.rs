//! Cover images embedded as `data:` URLs.
//!
//! The backend stores `cover_image_url` as an opaque string, so a local file is
//! uploaded by inlining it as `data:<mime>;base64,<payload>`.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::ApiError;

const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type guessed from the file extension.
#[must_use]
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

/// Encode raw bytes as a `data:` URL.
#[must_use]
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file and return it as a `data:` URL.
///
/// # Errors
///
/// Returns [`ApiError::Io`] if the file cannot be read.
pub fn data_url_from_file(path: &Path) -> Result<String, ApiError> {
    let bytes = std::fs::read(path).map_err(|source| ApiError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mime = image_mime(path).unwrap_or_else(|| {
        tracing::warn!(path = %path.display(), "unrecognized image extension");
        FALLBACK_MIME
    });
    Ok(to_data_url(mime, &bytes))
}
