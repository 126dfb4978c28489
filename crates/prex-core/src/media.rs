//! Media helpers: format sniffing and `data:` URL encoding.
//!
//! Media elements carry their payload inline as a base64 `data:` URL so a
//! project file is self-contained.

use crate::element::ElementKind;
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Errors from media handling.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("No media data")]
    Empty,
    #[error("Unrecognized media format")]
    UnknownFormat,
    #[error("Not a data URL")]
    NotDataUrl,
    #[error("Data URL is not base64-encoded")]
    UnsupportedEncoding,
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Supported media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Mp4,
    WebM,
}

impl MediaFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Png => "image/png",
            MediaFormat::Jpeg => "image/jpeg",
            MediaFormat::Gif => "image/gif",
            MediaFormat::WebP => "image/webp",
            MediaFormat::Mp4 => "video/mp4",
            MediaFormat::WebM => "video/webm",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(MediaFormat::Png),
            "jpg" | "jpeg" => Some(MediaFormat::Jpeg),
            "gif" => Some(MediaFormat::Gif),
            "webp" => Some(MediaFormat::WebP),
            "mp4" | "m4v" => Some(MediaFormat::Mp4),
            "webm" => Some(MediaFormat::WebM),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(MediaFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(MediaFormat::Jpeg);
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(MediaFormat::Gif);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(MediaFormat::WebP);
        }

        // ISO base media: ....ftyp
        if data.len() >= 8 && &data[4..8] == b"ftyp" {
            return Some(MediaFormat::Mp4);
        }

        // EBML header (Matroska/WebM)
        if data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
            return Some(MediaFormat::WebM);
        }

        None
    }

    /// Element kind this format becomes when dropped on a slide.
    pub fn element_kind(&self) -> ElementKind {
        kind_for_mime(self.mime_type())
    }
}

/// Video MIME types become video elements; anything else is shown as an image.
pub fn kind_for_mime(mime: &str) -> ElementKind {
    if mime.starts_with("video/") {
        ElementKind::Video
    } else {
        ElementKind::Image
    }
}

/// Encode bytes as a base64 `data:` URL.
pub fn to_data_url(data: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

/// Split a base64 `data:` URL into its MIME type and decoded bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), MediaError> {
    let rest = url.strip_prefix("data:").ok_or(MediaError::NotDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(MediaError::NotDataUrl)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(MediaError::UnsupportedEncoding)?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

/// Media ready to become an element's content.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub format: MediaFormat,
    pub data_url: String,
}

impl MediaSource {
    /// Sniff `data` and encode it.
    ///
    /// Magic bytes win; the extension hint is used only when sniffing fails.
    pub fn from_bytes(data: &[u8], extension: Option<&str>) -> Result<Self, MediaError> {
        if data.is_empty() {
            return Err(MediaError::Empty);
        }
        let format = MediaFormat::from_magic_bytes(data)
            .or_else(|| extension.and_then(MediaFormat::from_extension))
            .ok_or(MediaError::UnknownFormat)?;
        Ok(Self {
            format,
            data_url: to_data_url(data, format.mime_type()),
        })
    }

    pub fn kind(&self) -> ElementKind {
        self.format.element_kind()
    }

    /// Decoded size in bytes.
    pub fn data_size(&self) -> usize {
        let payload = self.data_url.split_once(',').map_or("", |(_, p)| p);
        let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
        (payload.len() * 3 / 4).saturating_sub(padding)
    }
}
