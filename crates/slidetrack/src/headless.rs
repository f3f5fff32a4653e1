//! In-memory surfaces.
//!
//! [`MemorySurface`] and [`MemoryControls`] implement the rendering seams
//! without drawing anything. They record exactly what a real surface would be
//! told, which makes them useful for tests and for hosts that render from the
//! recorded state themselves.

use crate::geometry::ItemLayout;
use crate::surface::{translate3d, ControlSurface, TrackSurface};
use crate::track::Track;

/// Recorded state of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryItem {
    /// Left edge within the track.
    pub offset_left: f32,
    /// Item width.
    pub width: f32,
    /// Whether the item carries the active marker.
    pub active: bool,
}

/// A track surface whose items are laid out edge to edge from their widths.
///
/// Item handles are the item positions (`usize`).
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    viewport_width: f32,
    items: Vec<MemoryItem>,
    translate_x: f32,
    transform: String,
    transition: bool,
    transform_writes: usize,
}

impl MemorySurface {
    /// An empty surface with the given viewport width.
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            items: Vec::new(),
            translate_x: 0.0,
            transform: translate3d(0.0),
            transition: true,
            transform_writes: 0,
        }
    }

    /// A surface with items of the given widths, laid out left to right.
    pub fn from_widths(viewport_width: f32, widths: impl IntoIterator<Item = f32>) -> Self {
        let mut surface = Self::new(viewport_width);
        surface.set_item_widths(widths);
        surface
    }

    /// A surface with `count` items of equal `width`.
    pub fn uniform(viewport_width: f32, count: usize, width: f32) -> Self {
        Self::from_widths(viewport_width, std::iter::repeat_n(width, count))
    }

    /// Replace every item, laying the new ones out left to right.
    ///
    /// Active markers are cleared.
    pub fn set_item_widths(&mut self, widths: impl IntoIterator<Item = f32>) {
        let mut offset = 0.0;
        self.items = widths
            .into_iter()
            .map(|width| {
                let item = MemoryItem {
                    offset_left: offset,
                    width,
                    active: false,
                };
                offset += width;
                item
            })
            .collect();
    }

    /// Change the viewport width.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Recorded item state.
    pub fn item_states(&self) -> &[MemoryItem] {
        &self.items
    }

    /// Indices of the items carrying the active marker.
    pub fn active_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Last horizontal offset written.
    pub fn translate_x(&self) -> f32 {
        self.translate_x
    }

    /// Last transform written, in CSS form.
    pub fn transform(&self) -> &str {
        &self.transform
    }

    /// Whether the smooth transition is enabled.
    pub fn transition_enabled(&self) -> bool {
        self.transition
    }

    /// Number of transform writes so far.
    pub fn transform_writes(&self) -> usize {
        self.transform_writes
    }
}

impl TrackSurface for MemorySurface {
    type Item = usize;

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn items(&self) -> Vec<ItemLayout<usize>> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| ItemLayout::new(i, item.offset_left, item.width))
            .collect()
    }

    fn set_transform(&mut self, x: f32) {
        self.translate_x = x;
        self.transform = translate3d(x);
        self.transform_writes += 1;
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn set_item_active(&mut self, item: &usize, active: bool) {
        if let Some(item) = self.items.get_mut(*item) {
            item.active = active;
        }
    }
}

/// Handle of an element in [`MemoryControls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// Recorded state of one control element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    /// Element label.
    pub label: String,
    /// Whether the element carries the active marker.
    pub active: bool,
    /// Slide index for indicators created by the navigator.
    pub created_for: Option<usize>,
    /// Whether the navigator removed this indicator.
    pub removed: bool,
}

/// A control surface that records its elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryControls {
    elements: Vec<MemoryElement>,
}

impl MemoryControls {
    /// An empty control surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-existing element (an arrow, or a supplied indicator).
    pub fn add_element(&mut self, label: impl Into<String>) -> ElementId {
        self.elements.push(MemoryElement {
            label: label.into(),
            active: false,
            created_for: None,
            removed: false,
        });
        ElementId(self.elements.len() - 1)
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(id.0)
    }

    /// All elements in creation order.
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    /// Elements carrying the active marker.
    pub fn active_elements(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.active && !element.removed)
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// Elements that have not been removed.
    pub fn live_elements(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.removed)
            .map(|(i, _)| ElementId(i))
            .collect()
    }
}

impl ControlSurface for MemoryControls {
    type Element = ElementId;

    fn create_indicator(&mut self, index: usize, label: &str) -> ElementId {
        let id = self.add_element(label);
        self.elements[id.0].created_for = Some(index);
        id
    }

    fn set_indicator_active(&mut self, element: &ElementId, active: bool) {
        if let Some(element) = self.elements.get_mut(element.0) {
            element.active = active;
        }
    }

    fn remove_indicator(&mut self, element: &ElementId) {
        if let Some(element) = self.elements.get_mut(element.0) {
            element.active = false;
            element.removed = true;
        }
    }
}

static_assertions::assert_impl_all!(Track<MemorySurface>: Send, Sync);
static_assertions::assert_impl_all!(MemoryControls: Send, Sync);
