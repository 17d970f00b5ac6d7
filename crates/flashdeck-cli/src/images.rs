//! Image files to `data:image/...;base64,` URIs.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Guess the image MIME subtype from a file extension.
fn mime_subtype(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("png"),
        "jpg" | "jpeg" => Some("jpeg"),
        "gif" => Some("gif"),
        "webp" => Some("webp"),
        "bmp" => Some("bmp"),
        "svg" => Some("svg+xml"),
        _ => None,
    }
}

/// Encode raw image bytes as a data URI.
pub fn to_data_uri(subtype: &str, bytes: &[u8]) -> String {
    format!("data:image/{subtype};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file and encode it for a card's `termImage`/`definitionImage`.
pub fn read_image(path: &Path) -> anyhow::Result<String> {
    let subtype = mime_subtype(path).ok_or_else(|| {
        anyhow::anyhow!(
            "Unsupported image type: {} (expected png, jpg, gif, webp, bmp or svg)",
            path.display()
        )
    })?;
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read image {}: {}", path.display(), e))?;
    Ok(to_data_uri(subtype, &bytes))
}
