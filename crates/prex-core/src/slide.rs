//! A single slide: one grid cell and the elements drawn on it.

use crate::element::{Element, ElementId};
use crate::grid::{GridCoord, SlideId};

/// Stable internal key for a slide.
///
/// Assigned once when the slide enters a [`crate::Deck`] and never reused
/// within it. Unlike [`SlideId`] it survives compaction, so anything that
/// needs to follow a slide through a coordinate change holds a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideHandle(pub(crate) u64);

/// A full-viewport canvas of elements at one grid coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub(crate) handle: SlideHandle,
    pub(crate) coord: GridCoord,
    /// Elements in insertion order.
    pub elements: Vec<Element>,
}

impl Slide {
    pub(crate) fn new(handle: SlideHandle, coord: GridCoord) -> Self {
        Self {
            handle,
            coord,
            elements: Vec::new(),
        }
    }

    pub fn handle(&self) -> SlideHandle {
        self.handle
    }

    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    /// The identifier derived from the slide's current coordinate.
    pub fn id(&self) -> SlideId {
        self.coord.slide_id()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements back to front: background elements first, then ascending
    /// z-index. Sequence order breaks ties.
    pub fn stacking_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        // sort_by_key is stable, so insertion order survives within a layer
        ordered.sort_by_key(|e| (!e.is_background, e.z_index));
        ordered
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_id_follows_coord() {
        let mut slide = Slide::new(SlideHandle(7), GridCoord::new(1, 2));
        assert_eq!(slide.id().to_string(), "slide-1-2");
        slide.coord = GridCoord::new(1, 1);
        assert_eq!(slide.id().to_string(), "slide-1-1");
        assert_eq!(slide.handle(), SlideHandle(7));
    }

    #[test]
    fn test_stacking_order() {
        let mut slide = Slide::new(SlideHandle(0), GridCoord::ORIGIN);

        let mut top = Element::new(ElementKind::Text, "top");
        top.z_index = 5;
        let first = Element::new(ElementKind::Text, "first");
        let second = Element::new(ElementKind::Text, "second");
        let mut bg = Element::new(ElementKind::Image, "bg");
        bg.is_background = true;
        bg.z_index = 99;

        slide.elements = vec![top.clone(), first.clone(), second.clone(), bg.clone()];

        let order: Vec<&str> = slide.stacking_order().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(order, vec!["bg", "first", "second", "top"]);
    }
}
