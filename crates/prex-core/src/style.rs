//! Kind-specific style attributes carried by every element.
//!
//! Each group is flattened into the element record. A group is only
//! meaningful for its own element kind but is harmless elsewhere, which keeps
//! project files forward-compatible.

use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializable color representation (RGBA8), stored as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. Also accepts `transparent`.
    pub fn from_hex(color: &str) -> Option<Self> {
        let color = color.trim();
        if color == "transparent" {
            return Some(Self::transparent());
        }

        let hex = color.strip_prefix('#')?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl Serialize for SerializableColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SerializableColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s:?}")))
    }
}

/// CSS font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// CSS font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// CSS text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Typography for text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub text_align: TextAlign,
    pub color: SerializableColor,
    /// Extra spacing between glyphs, in pixels.
    pub letter_spacing: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl TextStyle {
    pub const DEFAULT_FONT_FAMILY: &'static str = "Inter, sans-serif";
    pub const DEFAULT_FONT_SIZE: f64 = 24.0;
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            text_align: TextAlign::default(),
            color: SerializableColor::white(),
            letter_spacing: 0.0,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }
}

/// Crop window for image elements.
///
/// `crop_x`/`crop_y` place the visible window's center as a percentage of
/// the source image; `zoom` scales the source and never drops below 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageCrop {
    pub crop_x: f64,
    pub crop_y: f64,
    pub zoom: f64,
}

impl ImageCrop {
    pub const MIN_ZOOM: f64 = 1.0;
}

impl Default for ImageCrop {
    fn default() -> Self {
        Self {
            crop_x: 50.0,
            crop_y: 50.0,
            zoom: Self::MIN_ZOOM,
        }
    }
}

/// Playback settings for video elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoPlayback {
    #[serde(rename = "loop")]
    pub looping: bool,
    pub muted: bool,
    /// Trim start in seconds.
    pub start_time: f64,
    /// Trim end in seconds; `None` plays to the end of the media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl VideoPlayback {
    /// The playable range in seconds, given the media duration.
    ///
    /// An end before the start collapses the range to the start.
    pub fn trim_range(&self, duration: f64) -> (f64, f64) {
        let start = self.start_time.clamp(0.0, duration);
        let end = self.end_time.unwrap_or(duration).clamp(start, duration);
        (start, end)
    }
}

impl Default for VideoPlayback {
    fn default() -> Self {
        Self {
            looping: true,
            muted: true,
            start_time: 0.0,
            end_time: None,
        }
    }
}
