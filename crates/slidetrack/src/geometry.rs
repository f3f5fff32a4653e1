//! Slide geometry and active-index bookkeeping.
//!
//! Every item on the track gets a [`SlideEntry`] holding the transform offset
//! that centers it in the viewport. Entries are collected into a
//! [`SlideArray`], rebuilt wholesale whenever layout may have changed.

use std::ops::Index;

/// Layout of one item as reported by a [`TrackSurface`](crate::TrackSurface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout<H> {
    /// Handle the surface uses to address this item.
    pub handle: H,
    /// Offset of the item's left edge within the track, in pixels.
    pub offset_left: f32,
    /// Rendered width of the item, in pixels.
    pub width: f32,
}

impl<H> ItemLayout<H> {
    /// Create an item layout.
    pub fn new(handle: H, offset_left: f32, width: f32) -> Self {
        Self {
            handle,
            offset_left,
            width,
        }
    }
}

/// Track offset that centers an item in a viewport of `viewport_width`.
///
/// The viewport, not the track, is the alignment reference, so items of
/// different widths are all centered on screen.
pub fn position_to_center(viewport_width: f32, offset_left: f32, width: f32) -> f32 {
    (viewport_width - width) * 0.5 - offset_left
}

/// One item together with its centering offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideEntry<H> {
    /// Handle of the item on the surface.
    pub element: H,
    /// Transform offset that centers this item.
    pub position_to_center: f32,
}

/// Ordered centering geometry for every item on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideArray<H> {
    entries: Vec<SlideEntry<H>>,
}

impl<H> Default for SlideArray<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> SlideArray<H> {
    /// Build entries for `items` in order, centering each in `viewport_width`.
    pub fn from_layout(viewport_width: f32, items: impl IntoIterator<Item = ItemLayout<H>>) -> Self {
        let entries = items
            .into_iter()
            .map(|item| SlideEntry {
                position_to_center: position_to_center(
                    viewport_width,
                    item.offset_left,
                    item.width,
                ),
                element: item.handle,
            })
            .collect();
        Self { entries }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SlideEntry<H>> {
        self.entries.get(index)
    }

    /// Iterate over the entries in track order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideEntry<H>> {
        self.entries.iter()
    }

    /// The last valid index, or `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }
}

impl<H> Index<usize> for SlideArray<H> {
    type Output = SlideEntry<H>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a, H> IntoIterator for &'a SlideArray<H> {
    type Item = &'a SlideEntry<H>;
    type IntoIter = std::slice::Iter<'a, SlideEntry<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The active slide and its neighbours.
///
/// Always derived from an active index and a slide count; `prev` is `None`
/// only on the first slide and `next` only on the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSlideInfo {
    /// Index before the active one.
    pub prev: Option<usize>,
    /// The active index.
    pub active: usize,
    /// Index after the active one.
    pub next: Option<usize>,
    /// Number of slides on the track.
    pub len: usize,
}

impl ActiveSlideInfo {
    /// Derive the neighbours of `active` on a track of `len` slides.
    ///
    /// `active` is expected to be less than `len`.
    pub fn new(active: usize, len: usize) -> Self {
        debug_assert!(active < len, "active index {active} out of range for {len} slides");
        Self {
            prev: active.checked_sub(1),
            active,
            next: (active + 1 < len).then_some(active + 1),
            len,
        }
    }

    /// Whether the active slide is the first one.
    pub fn is_first(&self) -> bool {
        self.prev.is_none()
    }

    /// Whether the active slide is the last one.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
