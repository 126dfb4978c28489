//! Visual elements placed on a slide.

use crate::style::{
    FontStyle, FontWeight, ImageCrop, SerializableColor, TextAlign, TextDecoration, TextStyle,
    VideoPlayback,
};
use kurbo::{Affine, Point, Rect, Shape as _, Vec2};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// The kind of content an element displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Video,
}

impl ElementKind {
    /// Default box size for newly created elements of this kind.
    pub fn default_size(self) -> (f64, f64) {
        match self {
            ElementKind::Text => (400.0, 100.0),
            ElementKind::Image | ElementKind::Video => (300.0, 200.0),
        }
    }
}

/// A positioned visual object owned by exactly one slide.
///
/// Geometry is relative to the slide's top-left corner. Rotation is in
/// degrees around the element's center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Text for text elements, a media reference (usually a data URL)
    /// otherwise.
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_z_index")]
    pub z_index: i64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Background elements fill the slide and sit beneath everything else.
    #[serde(default)]
    pub is_background: bool,
    #[serde(flatten)]
    pub text: TextStyle,
    #[serde(flatten)]
    pub crop: ImageCrop,
    #[serde(flatten)]
    pub playback: VideoPlayback,
}

fn default_z_index() -> i64 {
    Element::DEFAULT_Z_INDEX
}

fn default_opacity() -> f64 {
    1.0
}

impl Element {
    /// Default offset of a new element within its slide.
    pub const DEFAULT_POSITION: Point = Point::new(100.0, 100.0);
    pub const DEFAULT_Z_INDEX: i64 = 1;

    /// Create an element with the defaults for its kind.
    pub fn new(kind: ElementKind, content: impl Into<String>) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            x: Self::DEFAULT_POSITION.x,
            y: Self::DEFAULT_POSITION.y,
            width,
            height,
            rotation: 0.0,
            z_index: Self::DEFAULT_Z_INDEX,
            opacity: 1.0,
            is_background: false,
            text: TextStyle::default(),
            crop: ImageCrop::default(),
            playback: VideoPlayback::default(),
        }
    }

    /// The unrotated box in slide coordinates.
    ///
    /// Background elements ignore their own geometry and cover `slide_size`.
    pub fn frame(&self, slide_size: kurbo::Size) -> Rect {
        if self.is_background {
            return slide_size.to_rect();
        }
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Transform from the element's local box to slide coordinates,
    /// rotating around the box center.
    pub fn transform(&self) -> Affine {
        if self.is_background {
            return Affine::IDENTITY;
        }
        let center = Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0);
        Affine::translate(center)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::translate(-Vec2::new(self.width / 2.0, self.height / 2.0))
    }

    /// Axis-aligned bounds in slide coordinates, accounting for rotation.
    pub fn bounds(&self, slide_size: kurbo::Size) -> Rect {
        if self.is_background {
            return slide_size.to_rect();
        }
        let local = Rect::new(0.0, 0.0, self.width, self.height);
        (self.transform() * local.to_path(0.1)).bounding_box()
    }
}

/// A sparse update for an element. Only present fields are applied.
///
/// Used both as the creation overrides for [`crate::Deck::add_element`] and
/// as the merge patch for [`crate::Deck::update_element`]. The identifier and
/// kind are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_background: Option<bool>,

    // Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<SerializableColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,

    // Image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,

    // Video
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    /// `Some(None)` clears the trim end; JSON `null` deserializes to it.
    #[serde(
        default,
        deserialize_with = "deserialize_clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<Option<f64>>,
}

/// Keeps an explicit `null` apart from an absent key.
fn deserialize_clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the element's fields with every field present in the patch.
    ///
    /// Opacity is clamped to 0–1, crop centers to 0–100 and zoom to at
    /// least 1.
    pub fn apply_to(&self, element: &mut Element) {
        if let Some(content) = &self.content {
            element.content = content.clone();
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(z) = self.z_index {
            element.z_index = z;
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(bg) = self.is_background {
            element.is_background = bg;
        }

        let text = &mut element.text;
        if let Some(family) = &self.font_family {
            text.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            text.font_size = size;
        }
        if let Some(weight) = self.font_weight {
            text.font_weight = weight;
        }
        if let Some(style) = self.font_style {
            text.font_style = style;
        }
        if let Some(decoration) = self.text_decoration {
            text.text_decoration = decoration;
        }
        if let Some(align) = self.text_align {
            text.text_align = align;
        }
        if let Some(color) = self.color {
            text.color = color;
        }
        if let Some(spacing) = self.letter_spacing {
            text.letter_spacing = spacing;
        }
        if let Some(line_height) = self.line_height {
            text.line_height = line_height;
        }

        let crop = &mut element.crop;
        if let Some(cx) = self.crop_x {
            crop.crop_x = cx.clamp(0.0, 100.0);
        }
        if let Some(cy) = self.crop_y {
            crop.crop_y = cy.clamp(0.0, 100.0);
        }
        if let Some(zoom) = self.zoom {
            crop.zoom = zoom.max(ImageCrop::MIN_ZOOM);
        }

        let playback = &mut element.playback;
        if let Some(looping) = self.looping {
            playback.looping = looping;
        }
        if let Some(muted) = self.muted {
            playback.muted = muted;
        }
        if let Some(start) = self.start_time {
            playback.start_time = start.max(0.0);
        }
        if let Some(end) = self.end_time {
            playback.end_time = end.map(|e| e.max(0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn test_text_defaults() {
        let el = Element::new(ElementKind::Text, "hi");
        assert_eq!((el.width, el.height), (400.0, 100.0));
        assert_eq!((el.x, el.y), (100.0, 100.0));
        assert_eq!(el.rotation, 0.0);
        assert_eq!(el.z_index, 1);
        assert_eq!(el.opacity, 1.0);
        assert_eq!(el.text.font_size, 24.0);
        assert!(!el.is_background);
    }

    #[test]
    fn test_media_defaults() {
        let img = Element::new(ElementKind::Image, "data:image/png;base64,");
        assert_eq!((img.width, img.height), (300.0, 200.0));
        let vid = Element::new(ElementKind::Video, "clip.mp4");
        assert_eq!((vid.width, vid.height), (300.0, 200.0));
        assert!(vid.playback.looping);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Element::new(ElementKind::Text, "a");
        let b = Element::new(ElementKind::Text, "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_patch_preserves_absent_fields() {
        let mut el = Element::new(ElementKind::Text, "hi");
        let patch = ElementPatch {
            x: Some(5.0),
            font_size: Some(40.0),
            ..Default::default()
        };
        patch.apply_to(&mut el);

        assert_eq!(el.x, 5.0);
        assert_eq!(el.y, 100.0);
        assert_eq!(el.text.font_size, 40.0);
        assert_eq!(el.text.font_family, TextStyle::DEFAULT_FONT_FAMILY);
        assert_eq!(el.content, "hi");
    }

    #[test]
    fn test_patch_clamps() {
        let mut el = Element::new(ElementKind::Image, "img");
        ElementPatch {
            opacity: Some(3.0),
            zoom: Some(0.2),
            crop_x: Some(-10.0),
            crop_y: Some(140.0),
            ..Default::default()
        }
        .apply_to(&mut el);

        assert_eq!(el.opacity, 1.0);
        assert_eq!(el.crop.zoom, 1.0);
        assert_eq!(el.crop.crop_x, 0.0);
        assert_eq!(el.crop.crop_y, 100.0);
    }

    #[test]
    fn test_patch_from_json() {
        let patch: ElementPatch = serde_json::from_str(r#"{"fontSize": 32, "loop": false, "zIndex": 4}"#).unwrap();
        assert_eq!(patch.font_size, Some(32.0));
        assert_eq!(patch.looping, Some(false));
        assert_eq!(patch.z_index, Some(4));
        assert!(patch.x.is_none());
        assert!(ElementPatch::new().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_clears_end_time() {
        let mut el = Element::new(ElementKind::Video, "clip.mp4");

        let set: ElementPatch = serde_json::from_str(r#"{"endTime": 5}"#).unwrap();
        assert_eq!(set.end_time, Some(Some(5.0)));
        set.apply_to(&mut el);
        assert_eq!(el.playback.end_time, Some(5.0));

        // Absent key leaves the trim alone
        let other: ElementPatch = serde_json::from_str(r#"{"muted": false}"#).unwrap();
        assert!(other.end_time.is_none());
        other.apply_to(&mut el);
        assert_eq!(el.playback.end_time, Some(5.0));

        let clear: ElementPatch = serde_json::from_str(r#"{"endTime": null}"#).unwrap();
        assert_eq!(clear.end_time, Some(None));
        assert!(!clear.is_empty());
        clear.apply_to(&mut el);
        assert_eq!(el.playback.end_time, None);

        let json = serde_json::to_value(&clear).unwrap();
        assert!(json["endTime"].is_null());
        assert!(json.as_object().unwrap().contains_key("endTime"));
    }

    #[test]
    fn test_element_json_shape() {
        let el = Element::new(ElementKind::Video, "clip.mp4");
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["zIndex"], 1);
        assert_eq!(json["isBackground"], false);
        assert_eq!(json["fontSize"], 24.0);
        assert_eq!(json["cropX"], 50.0);
        assert_eq!(json["muted"], true);

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, el);
    }

    #[test]
    fn test_element_minimal_json_takes_defaults() {
        let json = r##"{
            "id": "6f1c1d2e-8a7b-4c3d-9e0f-112233445566",
            "type": "text",
            "content": "Hello",
            "x": 100, "y": 100, "width": 400, "height": 100,
            "rotation": 0, "fontSize": 24, "fontFamily": "Inter, sans-serif",
            "color": "#ffffff", "textAlign": "left"
        }"##;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.kind, ElementKind::Text);
        assert_eq!(el.z_index, 1);
        assert_eq!(el.opacity, 1.0);
        assert_eq!(el.crop, ImageCrop::default());
        assert_eq!(el.playback, VideoPlayback::default());
    }

    #[test]
    fn test_element_missing_required_field() {
        let json = r#"{"id": "6f1c1d2e-8a7b-4c3d-9e0f-112233445566", "type": "text", "content": "x"}"#;
        assert!(serde_json::from_str::<Element>(json).is_err());
    }

    #[test]
    fn test_background_fills_slide() {
        let mut el = Element::new(ElementKind::Image, "img");
        el.is_background = true;
        let size = Size::new(1920.0, 1080.0);
        assert_eq!(el.frame(size), Rect::new(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(el.bounds(size), Rect::new(0.0, 0.0, 1920.0, 1080.0));
    }

    #[test]
    fn test_rotated_bounds() {
        let mut el = Element::new(ElementKind::Image, "img");
        el.x = 0.0;
        el.y = 0.0;
        el.width = 100.0;
        el.height = 100.0;
        el.rotation = 45.0;

        let bounds = el.bounds(Size::new(1000.0, 1000.0));
        let diag = 100.0 * std::f64::consts::SQRT_2;
        assert!((bounds.width() - diag).abs() < 1e-6);
        assert!((bounds.center().x - 50.0).abs() < 1e-6);
    }
}
