//! Grid addressing for slides.
//!
//! Slides live on an unbounded integer plane. A slide's public identifier is
//! derived from its coordinate (`slide-{x}-{y}`), so moving a slide changes
//! its identifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An integer cell on the slide grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
}

impl GridCoord {
    /// The origin cell, where a fresh deck places its first slide.
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The next cell forward along an axis, or `None` at the edge of the
    /// `i64` plane.
    pub fn step(self, axis: Axis) -> Option<Self> {
        match axis {
            Axis::Row => Some(Self::new(self.x.checked_add(1)?, self.y)),
            Axis::Column => Some(Self::new(self.x, self.y.checked_add(1)?)),
        }
    }

    /// The neighbouring cell in a direction, or `None` at the edge of the
    /// `i64` plane.
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => Some(Self::new(self.x.checked_sub(1)?, self.y)),
            Direction::Right => Some(Self::new(self.x.checked_add(1)?, self.y)),
            Direction::Up => Some(Self::new(self.x, self.y.checked_sub(1)?)),
            Direction::Down => Some(Self::new(self.x, self.y.checked_add(1)?)),
        }
    }

    /// The identifier of the slide occupying this cell.
    pub fn slide_id(self) -> SlideId {
        SlideId(self)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis along which the grid grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// +x: the next slide in the same row.
    Row,
    /// +y: the next slide in the same column.
    Column,
}

/// Where to place a slide relative to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertDirection {
    AfterInRow,
    AfterInColumn,
}

impl InsertDirection {
    pub fn axis(self) -> Axis {
        match self {
            InsertDirection::AfterInRow => Axis::Row,
            InsertDirection::AfterInColumn => Axis::Column,
        }
    }
}

/// Arrow-key navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Public slide identifier, derived from the slide's coordinate.
///
/// Serialized as `slide-{x}-{y}`. Two slides at the same coordinate would
/// share an identifier, which is why the deck never allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(GridCoord);

impl SlideId {
    pub fn coord(self) -> GridCoord {
        self.0
    }
}

impl From<GridCoord> for SlideId {
    fn from(coord: GridCoord) -> Self {
        Self(coord)
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide-{}-{}", self.0.x, self.0.y)
    }
}

/// Error returned when a string is not of the form `slide-{x}-{y}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid slide id: {0:?}")]
pub struct SlideIdParseError(pub String);

impl FromStr for SlideId {
    type Err = SlideIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SlideIdParseError(s.to_string());
        let rest = s.strip_prefix("slide-").ok_or_else(err)?;

        // Coordinates may be negative, so the separator is the first '-'
        // that is not a sign: skip one leading char before searching.
        let split = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(err)?;
        let (x, y) = (&rest[..split], &rest[split + 1..]);

        let x = x.parse::<i64>().map_err(|_| err())?;
        let y = y.parse::<i64>().map_err(|_| err())?;
        Ok(Self(GridCoord::new(x, y)))
    }
}

impl Serialize for SlideId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlideId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Scan forward from `origin` along `axis` for the first unoccupied cell.
///
/// Starts one step past `origin` and is O(occupied cells in that row or
/// column). Returns `None` if the scan runs off the end of the `i64` axis.
pub fn next_free_cell(
    origin: GridCoord,
    axis: Axis,
    occupied: impl Fn(GridCoord) -> bool,
) -> Option<GridCoord> {
    let mut cell = origin.step(axis)?;
    while occupied(cell) {
        cell = cell.step(axis)?;
    }
    Some(cell)
}
