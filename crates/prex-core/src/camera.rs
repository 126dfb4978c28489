//! Camera module for slide-to-slide navigation.

use crate::grid::GridCoord;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Default viewport span of one grid step, in camera units.
///
/// One unit is one percent of the viewport, so a slide at `(1, 0)` sits one
/// full viewport to the right of the origin.
pub const DEFAULT_VIEWPORT_UNIT: f64 = 100.0;

/// Camera manages the viewport offset over the slide plane.
///
/// The offset is normally derived from the focused slide's coordinate
/// (`coord * unit`); free-form panning may move it anywhere.
/// Serializes as a bare `{x, y}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Camera {
    /// Current translation offset (pan)
    pub offset: Vec2,
}

impl Camera {
    /// Create a new camera at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera looking at the slide at `coord`.
    pub fn for_coord(coord: GridCoord, unit: f64) -> Self {
        Self {
            offset: Vec2::new(coord.x as f64 * unit, coord.y as f64 * unit),
        }
    }

    /// Snap the camera onto the slide at `coord`.
    pub fn focus_on(&mut self, coord: GridCoord, unit: f64) {
        *self = Self::for_coord(coord, unit);
    }

    /// Unconditional override, used for free-form panning.
    pub fn set_raw(&mut self, x: f64, y: f64) {
        self.offset = Vec2::new(x, y);
    }

    /// Pan the camera by a delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// The grid cell whose slide covers most of the viewport.
    pub fn nearest_coord(&self, unit: f64) -> GridCoord {
        GridCoord::new(
            (self.offset.x / unit).round() as i64,
            (self.offset.y / unit).round() as i64,
        )
    }

    /// The area a slide occupies on the plane, in camera units.
    pub fn slide_frame(coord: GridCoord, unit: f64) -> Rect {
        let origin = Point::new(coord.x as f64 * unit, coord.y as f64 * unit);
        Rect::from_origin_size(origin, (unit, unit))
    }

    /// Convert a plane point to viewport coordinates.
    pub fn world_to_view(&self, world_point: Point) -> Point {
        world_point - self.offset
    }

    /// Convert a viewport point to plane coordinates.
    pub fn view_to_world(&self, view_point: Point) -> Point {
        view_point + self.offset
    }
}
