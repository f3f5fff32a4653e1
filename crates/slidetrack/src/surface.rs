//! Rendering seams.
//!
//! The track never renders anything itself. It measures items and writes
//! visual state through [`TrackSurface`], and the navigator drives its
//! arrows and indicators through [`ControlSurface`]. Hosts implement these
//! traits over whatever actually draws (a DOM, a retained widget tree, a
//! terminal); [`crate::headless`] provides in-memory implementations.

use crate::geometry::ItemLayout;

/// The container, inner track and child items a [`Track`](crate::Track) moves.
pub trait TrackSurface {
    /// Handle addressing one child item.
    type Item: Clone;

    /// Width of the viewport items are centered in.
    fn viewport_width(&self) -> f32;

    /// Current layout of every child item, in track order.
    fn items(&self) -> Vec<ItemLayout<Self::Item>>;

    /// Translate the track horizontally by `x` pixels.
    ///
    /// See [`translate3d`] for the CSS form of this value.
    fn set_transform(&mut self, x: f32);

    /// Enable or disable the smooth transform transition.
    ///
    /// Disabled while dragging so the track follows the pointer exactly.
    fn set_transition(&mut self, enabled: bool);

    /// Add or remove the "active" marker on `item`.
    fn set_item_active(&mut self, item: &Self::Item, active: bool);
}

/// External navigation controls bound by a [`Navigator`](crate::Navigator).
pub trait ControlSurface: Send + 'static {
    /// Handle addressing one control element (arrow or indicator).
    type Element: Clone + PartialEq + Send + std::fmt::Debug;

    /// Create an indicator for slide `index`, labelled `label`.
    fn create_indicator(&mut self, index: usize, label: &str) -> Self::Element;

    /// Add or remove the "active" marker on an indicator.
    fn set_indicator_active(&mut self, element: &Self::Element, active: bool);

    /// Remove an indicator created by [`create_indicator`](Self::create_indicator)
    /// whose slide no longer exists.
    fn remove_indicator(&mut self, element: &Self::Element);
}

/// CSS transform string for a horizontal track offset.
///
/// ```
/// assert_eq!(slidetrack::surface::translate3d(-120.5), "translate3d(-120.5px, 0, 0)");
/// ```
pub fn translate3d(x: f32) -> String {
    format!("translate3d({x}px, 0, 0)")
}
