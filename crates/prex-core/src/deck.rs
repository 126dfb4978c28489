//! The slide store: slides keyed by grid coordinate, focus, and camera.
//!
//! Slides live in an insertion-ordered arena keyed by [`SlideHandle`], with a
//! coordinate index on the side. Public operations address slides by
//! [`SlideId`], which is resolved through the coordinate index; focus is held
//! by handle so it follows its slide when compaction moves it.
//!
//! Every mutation either leaves the grid consistent or does nothing. Not
//! found ids and guard refusals are silent no-ops reported only through the
//! return value.

use crate::camera::{Camera, DEFAULT_VIEWPORT_UNIT};
use crate::element::{Element, ElementId, ElementKind, ElementPatch};
use crate::grid::{Axis, Direction, GridCoord, InsertDirection, SlideId, next_free_cell};
use crate::slide::{Slide, SlideHandle};
use indexmap::IndexMap;
use std::collections::HashMap;

/// The document: every slide, the focused slide, and the camera.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: IndexMap<SlideHandle, Slide>,
    by_coord: HashMap<GridCoord, SlideHandle>,
    current: SlideHandle,
    camera: Camera,
    unit: f64,
    next_handle: u64,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A deck holding one empty slide at the origin, focused.
    pub fn new() -> Self {
        Self::with_unit(DEFAULT_VIEWPORT_UNIT)
    }

    /// Like [`Deck::new`], with a custom viewport span per grid step.
    pub fn with_unit(unit: f64) -> Self {
        let mut deck = Self {
            slides: IndexMap::new(),
            by_coord: HashMap::new(),
            current: SlideHandle(0),
            camera: Camera::new(),
            unit,
            next_handle: 0,
        };
        deck.current = deck.insert_slide(GridCoord::ORIGIN);
        deck
    }

    /// Build a deck from already-validated parts.
    ///
    /// `slides` must have unique coordinates and `current` must be one of
    /// them; [`crate::project`] checks both before calling this.
    pub(crate) fn from_parts(
        slides: Vec<(GridCoord, Vec<Element>)>,
        current: GridCoord,
        camera: Camera,
        unit: f64,
    ) -> Self {
        let mut deck = Self {
            slides: IndexMap::with_capacity(slides.len()),
            by_coord: HashMap::with_capacity(slides.len()),
            current: SlideHandle(0),
            camera,
            unit,
            next_handle: 0,
        };
        for (coord, elements) in slides {
            let handle = deck.insert_slide(coord);
            if let Some(slide) = deck.slides.get_mut(&handle) {
                slide.elements = elements;
            }
        }
        if let Some(&handle) = deck.by_coord.get(&current) {
            deck.current = handle;
        }
        deck
    }

    fn insert_slide(&mut self, coord: GridCoord) -> SlideHandle {
        let handle = SlideHandle(self.next_handle);
        self.next_handle += 1;
        self.slides.insert(handle, Slide::new(handle, coord));
        self.by_coord.insert(coord, handle);
        handle
    }

    fn handle_of(&self, id: SlideId) -> Option<SlideHandle> {
        self.by_coord.get(&id.coord()).copied()
    }

    fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        let handle = self.handle_of(id)?;
        self.slides.get_mut(&handle)
    }

    // ---------------------------------------------------------------
    // Grid queries
    // ---------------------------------------------------------------

    /// Whether some slide sits at `coord`.
    pub fn occupied_at(&self, coord: GridCoord) -> bool {
        self.by_coord.contains_key(&coord)
    }

    pub fn find_slide_at(&self, coord: GridCoord) -> Option<&Slide> {
        self.by_coord.get(&coord).and_then(|h| self.slides.get(h))
    }

    /// First free cell past `origin` along `axis`, if the axis has one left.
    pub fn next_free_cell(&self, origin: GridCoord, axis: Axis) -> Option<GridCoord> {
        next_free_cell(origin, axis, |c| self.occupied_at(c))
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.find_slide_at(id.coord())
    }

    /// Slides in insertion order.
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.values()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: a deck never loses its last slide.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_slide(&self) -> &Slide {
        // `current` always resolves: every path that removes a slide
        // retargets focus first.
        &self.slides[&self.current]
    }

    pub fn current_slide_id(&self) -> SlideId {
        self.current_slide().id()
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Viewport span of one grid step.
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// The slide next to the focused one in `direction`, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<&Slide> {
        self.find_slide_at(self.current_slide().coord.neighbor(direction)?)
    }

    // ---------------------------------------------------------------
    // Slide store
    // ---------------------------------------------------------------

    /// Insert an empty slide at `(x, y)`. No-op if the cell is taken.
    pub fn add_slide(&mut self, x: i64, y: i64) -> bool {
        let coord = GridCoord::new(x, y);
        if self.occupied_at(coord) {
            return false;
        }
        self.insert_slide(coord);
        log::debug!("Added slide at {}", coord);
        true
    }

    /// Insert a slide at the first free cell after `from` in a row or column.
    ///
    /// Never overwrites: scans forward past every occupied cell. Returns the
    /// new slide's id, or `None` if `from` does not resolve or the scan runs
    /// off the end of the axis.
    pub fn insert_adjacent(&mut self, from: SlideId, direction: InsertDirection) -> Option<SlideId> {
        let origin = self.slide(from)?.coord;
        let coord = self.next_free_cell(origin, direction.axis())?;
        self.insert_slide(coord);
        log::debug!("Inserted slide at {} after {}", coord, from);
        Some(coord.slide_id())
    }

    /// Delete a slide and close the gap it leaves along one axis.
    ///
    /// Refuses to delete the last slide. If slides sit below the deleted one
    /// in its column they each move up one cell; otherwise, if slides sit to
    /// its right in its row they each move left one cell. Only one axis is
    /// compacted per call, so some layouts keep a corner gap.
    ///
    /// Focus follows its slide through the shift. If the focused slide was
    /// deleted, focus moves to whatever now occupies the freed cell, or to
    /// the last slide in insertion order.
    pub fn remove_slide(&mut self, id: SlideId) -> bool {
        if self.slides.len() <= 1 {
            return false;
        }
        let Some(handle) = self.handle_of(id) else {
            return false;
        };

        let removed = self.slides.shift_remove(&handle);
        self.by_coord.remove(&id.coord());
        let del = id.coord();
        let deleted_focus = handle == self.current;
        let focus_before = (!deleted_focus).then(|| self.current_slide().coord);

        let below = |s: &Slide| s.coord.x == del.x && s.coord.y > del.y;
        let right = |s: &Slide| s.coord.y == del.y && s.coord.x > del.x;
        let vertical = self.slides.values().any(below);
        let shifted: Vec<SlideHandle> = self
            .slides
            .values()
            .filter(|&s| if vertical { below(s) } else { right(s) })
            .map(|s| s.handle)
            .collect();

        // Clear every old cell before claiming new ones; shifted slides
        // move into each other's cells.
        for h in &shifted {
            self.by_coord.remove(&self.slides[h].coord);
        }
        for h in &shifted {
            if let Some(slide) = self.slides.get_mut(h) {
                if vertical {
                    slide.coord.y -= 1;
                } else {
                    slide.coord.x -= 1;
                }
                self.by_coord.insert(slide.coord, *h);
            }
        }
        if !shifted.is_empty() {
            log::debug!(
                "Compacted {} slide(s) {} after removing {}",
                shifted.len(),
                if vertical { "up" } else { "left" },
                id
            );
        }

        if deleted_focus {
            let next = self
                .by_coord
                .get(&del)
                .copied()
                .or_else(|| self.slides.last().map(|(h, _)| *h));
            if let Some(next) = next {
                self.current = next;
                self.camera.focus_on(self.slides[&next].coord, self.unit);
            }
        } else if focus_before != Some(self.current_slide().coord) {
            let coord = self.current_slide().coord;
            self.camera.focus_on(coord, self.unit);
        }

        log::debug!("Removed slide {} ({} element(s))", id, removed.map_or(0, |s| s.elements.len()));
        true
    }

    // ---------------------------------------------------------------
    // Camera
    // ---------------------------------------------------------------

    /// Focus a slide and move the camera onto it. No-op if unresolved.
    pub fn focus_slide(&mut self, id: SlideId) -> bool {
        let Some(handle) = self.handle_of(id) else {
            return false;
        };
        self.current = handle;
        self.camera.focus_on(id.coord(), self.unit);
        true
    }

    /// Move the camera without changing focus.
    pub fn set_camera_raw(&mut self, x: f64, y: f64) {
        self.camera.set_raw(x, y);
    }

    // ---------------------------------------------------------------
    // Element store
    // ---------------------------------------------------------------

    /// Append a new element to a slide.
    ///
    /// The element starts from the defaults for `kind`; `overrides` are
    /// applied on top. Returns the new element's id, or `None` if the slide
    /// does not resolve.
    pub fn add_element(
        &mut self,
        slide: SlideId,
        kind: ElementKind,
        content: impl Into<String>,
        overrides: &ElementPatch,
    ) -> Option<ElementId> {
        let target = self.slide_mut(slide)?;
        let mut element = Element::new(kind, content);
        overrides.apply_to(&mut element);
        let id = element.id;
        target.elements.push(element);
        Some(id)
    }

    /// Merge `patch` onto an element. No-op if the pair does not resolve.
    pub fn update_element(&mut self, slide: SlideId, element: ElementId, patch: &ElementPatch) -> bool {
        let Some(target) = self.slide_mut(slide).and_then(|s| s.element_mut(element)) else {
            return false;
        };
        patch.apply_to(target);
        true
    }

    /// Delete an element. Idempotent.
    pub fn remove_element(&mut self, slide: SlideId, element: ElementId) -> bool {
        let Some(target) = self.slide_mut(slide) else {
            return false;
        };
        let before = target.elements.len();
        target.elements.retain(|e| e.id != element);
        target.elements.len() != before
    }

    pub fn element(&self, slide: SlideId, element: ElementId) -> Option<&Element> {
        self.slide(slide)?.element(element)
    }

    /// The slide currently holding an element.
    pub fn locate_element(&self, element: ElementId) -> Option<SlideId> {
        self.slides
            .values()
            .find(|s| s.element(element).is_some())
            .map(Slide::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(x: i64, y: i64) -> SlideId {
        GridCoord::new(x, y).slide_id()
    }

    fn deck_with(coords: &[(i64, i64)]) -> Deck {
        let mut deck = Deck::new();
        for &(x, y) in coords {
            deck.add_slide(x, y);
        }
        deck
    }

    fn coords(deck: &Deck) -> Vec<(i64, i64)> {
        let mut v: Vec<_> = deck.slides().map(|s| (s.coord().x, s.coord().y)).collect();
        v.sort();
        v
    }

    /// No two slides share a cell and the index agrees with the arena.
    fn assert_consistent(deck: &Deck) {
        let mut seen = std::collections::HashSet::new();
        for slide in deck.slides() {
            assert!(seen.insert(slide.coord()), "duplicate coordinate {}", slide.coord());
            assert_eq!(deck.find_slide_at(slide.coord()).map(Slide::handle), Some(slide.handle()));
        }
        assert_eq!(deck.by_coord.len(), deck.len());
        assert!(deck.slide(deck.current_slide_id()).is_some());
    }

    #[test]
    fn test_new_deck() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.current_slide_id().to_string(), "slide-0-0");
        assert_eq!(deck.camera(), Camera::new());
    }

    #[test]
    fn test_add_slide_is_idempotent() {
        let mut deck = Deck::new();
        assert!(deck.add_slide(1, 0));
        let before = deck.slide(id(1, 0)).map(Slide::handle);
        assert!(!deck.add_slide(1, 0));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slide(id(1, 0)).map(Slide::handle), before);
        assert_consistent(&deck);
    }

    #[test]
    fn test_insert_never_overwrites() {
        let mut deck = deck_with(&[(1, 0)]);
        let new = deck.insert_adjacent(id(0, 0), InsertDirection::AfterInRow);
        assert_eq!(new, Some(id(2, 0)));
        assert_eq!(coords(&deck), vec![(0, 0), (1, 0), (2, 0)]);
        assert_consistent(&deck);
    }

    #[test]
    fn test_insert_in_column() {
        let mut deck = deck_with(&[(0, 1), (1, 0)]);
        let new = deck.insert_adjacent(id(0, 0), InsertDirection::AfterInColumn);
        assert_eq!(new, Some(id(0, 2)));
    }

    #[test]
    fn test_insert_from_missing_slide() {
        let mut deck = Deck::new();
        assert_eq!(deck.insert_adjacent(id(5, 5), InsertDirection::AfterInRow), None);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_remove_last_slide_refused() {
        let mut deck = Deck::new();
        assert!(!deck.remove_slide(id(0, 0)));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_remove_missing_slide() {
        let mut deck = deck_with(&[(1, 0)]);
        assert!(!deck.remove_slide(id(9, 9)));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_vertical_compaction() {
        let mut deck = deck_with(&[(0, 1), (0, 2), (1, 0)]);
        let moved = deck.slide(id(0, 2)).map(Slide::handle);
        let untouched = deck.slide(id(1, 0)).map(Slide::handle);

        assert!(deck.remove_slide(id(0, 1)));

        assert_eq!(coords(&deck), vec![(0, 0), (0, 1), (1, 0)]);
        assert_eq!(deck.slide(id(0, 1)).map(Slide::handle), moved);
        assert_eq!(deck.slide(id(1, 0)).map(Slide::handle), untouched);
        assert_consistent(&deck);
    }

    #[test]
    fn test_row_compaction() {
        let mut deck = deck_with(&[(1, 0), (2, 0)]);
        let first = deck.slide(id(1, 0)).map(Slide::handle);
        let second = deck.slide(id(2, 0)).map(Slide::handle);

        assert!(deck.remove_slide(id(0, 0)));

        assert_eq!(coords(&deck), vec![(0, 0), (1, 0)]);
        assert_eq!(deck.slide(id(0, 0)).map(Slide::handle), first);
        assert_eq!(deck.slide(id(1, 0)).map(Slide::handle), second);
        assert_consistent(&deck);
    }

    #[test]
    fn test_vertical_wins_over_horizontal() {
        // Slides both below and to the right: only the column closes.
        let mut deck = deck_with(&[(0, 1), (1, 0)]);
        assert!(deck.remove_slide(id(0, 0)));
        assert_eq!(coords(&deck), vec![(0, 0), (1, 0)]);
        assert_consistent(&deck);
    }

    #[test]
    fn test_no_compaction_leaves_others() {
        let mut deck = deck_with(&[(1, 0), (1, 1)]);
        assert!(deck.remove_slide(id(1, 1)));
        assert_eq!(coords(&deck), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_corner_gap_is_kept() {
        // Only the column closes; row 1 keeps its gap at (0, 1).
        let mut deck = deck_with(&[(1, 0), (0, 1), (1, 1)]);
        assert!(deck.remove_slide(id(0, 0)));
        assert_eq!(coords(&deck), vec![(0, 0), (1, 0), (1, 1)]);
        assert!(!deck.occupied_at(GridCoord::new(0, 1)));
        assert_consistent(&deck);
    }

    #[test]
    fn test_repeated_removal_switches_axis() {
        let mut deck = deck_with(&[(1, 0), (2, 0), (0, 1)]);
        assert!(deck.remove_slide(id(0, 0)));
        assert_eq!(coords(&deck), vec![(0, 0), (1, 0), (2, 0)]);
        assert!(deck.remove_slide(id(0, 0)));
        assert_eq!(coords(&deck), vec![(0, 0), (1, 0)]);
        assert_consistent(&deck);
    }

    #[test]
    fn test_focus_follows_content() {
        let mut deck = deck_with(&[(0, 1), (0, 2), (1, 0)]);
        assert!(deck.focus_slide(id(0, 1)));
        assert_eq!(deck.camera(), Camera::for_coord(GridCoord::new(0, 1), deck.unit()));

        assert!(deck.remove_slide(id(0, 0)));

        assert_eq!(deck.current_slide_id(), id(0, 0));
        assert_eq!(deck.camera(), Camera::for_coord(GridCoord::ORIGIN, deck.unit()));
        assert_consistent(&deck);
    }

    #[test]
    fn test_focus_follows_row_compaction() {
        let mut deck = deck_with(&[(1, 0), (2, 0)]);
        let focused = deck.slide(id(2, 0)).map(Slide::handle);
        assert!(deck.focus_slide(id(2, 0)));

        assert!(deck.remove_slide(id(0, 0)));

        assert_eq!(deck.current_slide_id(), id(1, 0));
        assert_eq!(Some(deck.current_slide().handle()), focused);
        assert_eq!(deck.camera().offset, kurbo::Vec2::new(deck.unit(), 0.0));
        assert_consistent(&deck);
    }

    #[test]
    fn test_grid_edges_are_noops() {
        let mut deck = deck_with(&[(i64::MAX, 0), (0, i64::MIN)]);

        assert!(deck.focus_slide(id(i64::MAX, 0)));
        assert!(deck.neighbor(Direction::Right).is_none());
        assert_eq!(deck.insert_adjacent(id(i64::MAX, 0), InsertDirection::AfterInRow), None);
        assert_eq!(
            deck.insert_adjacent(id(i64::MAX, 0), InsertDirection::AfterInColumn),
            Some(id(i64::MAX, 1))
        );

        assert!(deck.focus_slide(id(0, i64::MIN)));
        assert!(deck.neighbor(Direction::Up).is_none());
        assert!(deck.add_slide(i64::MIN, i64::MIN));
        assert!(deck.focus_slide(id(i64::MIN, i64::MIN)));
        assert!(deck.neighbor(Direction::Left).is_none());
        assert!(deck.neighbor(Direction::Up).is_none());

        // A full run up to the end of the axis has no free cell left
        let mut deck = deck_with(&[(i64::MAX - 1, 5), (i64::MAX, 5)]);
        assert_eq!(deck.insert_adjacent(id(i64::MAX - 1, 5), InsertDirection::AfterInRow), None);
        assert_eq!(deck.len(), 3);
        assert_consistent(&deck);
    }

    #[test]
    fn test_deleted_focus_takes_freed_cell() {
        let mut deck = deck_with(&[(1, 0), (2, 0)]);
        let successor = deck.slide(id(1, 0)).map(Slide::handle);
        deck.focus_slide(id(0, 0));

        assert!(deck.remove_slide(id(0, 0)));

        assert_eq!(deck.current_slide_id(), id(0, 0));
        assert_eq!(Some(deck.current_slide().handle()), successor);
        assert_eq!(deck.camera(), Camera::for_coord(GridCoord::ORIGIN, deck.unit()));
    }

    #[test]
    fn test_deleted_focus_falls_back_to_last() {
        let mut deck = deck_with(&[(5, 5), (3, 3)]);
        deck.focus_slide(id(5, 5));

        assert!(deck.remove_slide(id(5, 5)));

        assert_eq!(deck.current_slide_id(), id(3, 3));
        assert_eq!(deck.camera(), Camera::for_coord(GridCoord::new(3, 3), deck.unit()));
    }

    #[test]
    fn test_unaffected_focus_keeps_camera() {
        let mut deck = deck_with(&[(1, 0), (0, 1)]);
        deck.focus_slide(id(1, 0));
        deck.set_camera_raw(123.0, 45.0);

        assert!(deck.remove_slide(id(0, 1)));

        assert_eq!(deck.current_slide_id(), id(1, 0));
        assert_eq!(deck.camera().offset, kurbo::Vec2::new(123.0, 45.0));
    }

    #[test]
    fn test_elements_travel_with_slide() {
        let mut deck = deck_with(&[(1, 0)]);
        let el = deck
            .add_element(id(1, 0), ElementKind::Text, "moving", &ElementPatch::new())
            .unwrap();

        assert!(deck.remove_slide(id(0, 0)));

        assert_eq!(deck.locate_element(el), Some(id(0, 0)));
        assert_eq!(deck.element(id(0, 0), el).map(|e| e.content.as_str()), Some("moving"));
    }

    #[test]
    fn test_focus_slide_missing() {
        let mut deck = Deck::new();
        deck.set_camera_raw(1.0, 2.0);
        assert!(!deck.focus_slide(id(3, 3)));
        assert_eq!(deck.camera().offset, kurbo::Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_custom_unit() {
        let mut deck = Deck::with_unit(1920.0);
        deck.add_slide(1, 0);
        deck.focus_slide(id(1, 0));
        assert_eq!(deck.camera().offset, kurbo::Vec2::new(1920.0, 0.0));
    }

    #[test]
    fn test_neighbor() {
        let deck = deck_with(&[(1, 0)]);
        assert_eq!(deck.neighbor(Direction::Right).map(Slide::id), Some(id(1, 0)));
        assert!(deck.neighbor(Direction::Left).is_none());
    }

    #[test]
    fn test_add_element_default_merge() {
        let mut deck = Deck::new();
        let patch = ElementPatch {
            font_size: Some(40.0),
            ..Default::default()
        };
        let el = deck.add_element(id(0, 0), ElementKind::Text, "hi", &patch).unwrap();
        let el = deck.element(id(0, 0), el).unwrap();

        assert_eq!(el.text.font_size, 40.0);
        assert_eq!(el.text.font_family, "Inter, sans-serif");
        assert_eq!(el.text.color, crate::style::SerializableColor::white());
        assert_eq!(el.text.text_align, crate::style::TextAlign::Left);
        assert_eq!(el.content, "hi");
    }

    #[test]
    fn test_add_element_missing_slide() {
        let mut deck = deck_with(&[(1, 0)]);
        assert!(deck.add_element(id(7, 7), ElementKind::Text, "x", &ElementPatch::new()).is_none());
        assert!(deck.slides().all(Slide::is_empty));
    }

    #[test]
    fn test_add_element_targets_one_slide() {
        let mut deck = deck_with(&[(1, 0)]);
        deck.add_element(id(1, 0), ElementKind::Image, "img", &ElementPatch::new());
        assert!(deck.slide(id(0, 0)).unwrap().is_empty());
        assert_eq!(deck.slide(id(1, 0)).unwrap().elements.len(), 1);
    }

    #[test]
    fn test_update_element() {
        let mut deck = Deck::new();
        let el = deck.add_element(id(0, 0), ElementKind::Text, "a", &ElementPatch::new()).unwrap();

        let patch = ElementPatch {
            content: Some("b".into()),
            rotation: Some(15.0),
            ..Default::default()
        };
        assert!(deck.update_element(id(0, 0), el, &patch));

        let el_ref = deck.element(id(0, 0), el).unwrap();
        assert_eq!(el_ref.content, "b");
        assert_eq!(el_ref.rotation, 15.0);
        assert_eq!(el_ref.width, 400.0);

        assert!(!deck.update_element(id(0, 0), ElementId::new_v4(), &patch));
        assert!(!deck.update_element(id(4, 4), el, &patch));
    }

    #[test]
    fn test_remove_element_idempotent() {
        let mut deck = Deck::new();
        let keep = deck.add_element(id(0, 0), ElementKind::Text, "keep", &ElementPatch::new()).unwrap();
        let gone = deck.add_element(id(0, 0), ElementKind::Text, "gone", &ElementPatch::new()).unwrap();

        assert!(deck.remove_element(id(0, 0), gone));
        let after_once = deck.slide(id(0, 0)).unwrap().clone();
        assert!(!deck.remove_element(id(0, 0), gone));
        assert_eq!(deck.slide(id(0, 0)).unwrap(), &after_once);
        assert!(deck.element(id(0, 0), keep).is_some());
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut deck = Deck::new();
        let ops: &[(u8, i64, i64)] = &[
            (0, 1, 0), (0, 2, 0), (0, 0, 1), (1, 0, 0), (0, 0, 2), (2, 1, 0),
            (1, 1, 0), (0, 3, 3), (2, 0, 0), (1, 0, 1), (1, 3, 3), (2, 0, 0),
        ];
        for &(op, x, y) in ops {
            match op {
                0 => {
                    deck.add_slide(x, y);
                }
                1 => {
                    deck.insert_adjacent(id(x, y), InsertDirection::AfterInRow);
                    deck.insert_adjacent(id(x, y), InsertDirection::AfterInColumn);
                }
                _ => {
                    deck.remove_slide(id(x, y));
                }
            }
            assert_consistent(&deck);
            assert!(!deck.is_empty());
        }
    }
}
