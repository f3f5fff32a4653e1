//! Arrow and indicator navigation for a [`Track`].
//!
//! A [`Navigator`] binds prev/next arrows and a list of indicators to a track.
//! Clicking an arrow delegates to [`Track::active_prev`] / [`Track::active_next`];
//! clicking an indicator jumps straight to its slide. Independently, the
//! navigator listens to [`Track::changed`] and keeps exactly one indicator
//! marked active, whatever caused the change (drag, arrow, indicator, resize).
//! Synthesized indicators follow the slide count when a resize adds or drops
//! items.
//!
//! # Example
//!
//! ```
//! use slidetrack::headless::{MemoryControls, MemorySurface};
//! use slidetrack::navigator::{Control, Navigator, NavigatorOptions};
//! use slidetrack::Track;
//!
//! let mut track = Track::new(MemorySurface::uniform(800.0, 3, 200.0));
//! track.init().unwrap();
//!
//! let mut controls = MemoryControls::new();
//! let prev = controls.add_element("prev");
//! let next = controls.add_element("next");
//!
//! let navigator = Navigator::new(
//!     &track,
//!     controls,
//!     NavigatorOptions::new().with_arrows(prev, next),
//! )
//! .unwrap();
//!
//! assert!(navigator.click_element(&mut track, &next));
//! assert_eq!(navigator.active_indicator(), Some(1));
//! assert!(navigator.click(&mut track, Control::Indicator(2)));
//! assert_eq!(track.active_index(), Some(2));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slidetrack_core::logging::targets;
use slidetrack_core::{ConnectionGuard, Signal};

use crate::error::{Error, Result};
use crate::geometry::ActiveSlideInfo;
use crate::surface::{ControlSurface, TrackSurface};
use crate::track::Track;

/// A navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Go to the previous slide.
    Prev,
    /// Go to the next slide.
    Next,
    /// Jump to the slide at this index.
    Indicator(usize),
}

/// Where the indicator list comes from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IndicatorSource<E> {
    /// Pre-existing elements, one per slide in track order.
    Supplied(Vec<E>),
    /// Create one indicator per slide on the control surface.
    #[default]
    Synthesized,
}

/// Construction options for a [`Navigator`].
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorOptions<E> {
    /// Element that goes to the previous slide.
    pub prev: Option<E>,
    /// Element that goes to the next slide.
    pub next: Option<E>,
    /// Indicator list source.
    pub indicators: IndicatorSource<E>,
}

impl<E> Default for NavigatorOptions<E> {
    fn default() -> Self {
        Self {
            prev: None,
            next: None,
            indicators: IndicatorSource::Synthesized,
        }
    }
}

impl<E> NavigatorOptions<E> {
    /// Options with no arrows and synthesized indicators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arrow elements using builder pattern.
    pub fn with_arrows(mut self, prev: E, next: E) -> Self {
        self.prev = Some(prev);
        self.next = Some(next);
        self
    }

    /// Use pre-existing indicator elements using builder pattern.
    pub fn with_indicators(mut self, indicators: Vec<E>) -> Self {
        self.indicators = IndicatorSource::Supplied(indicators);
        self
    }
}

/// One indicator and the slide it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator<E> {
    /// Slide index.
    pub index: usize,
    /// 1-based ordinal label.
    pub label: String,
    /// Element on the control surface.
    pub element: E,
}

/// Indicator state shared between the navigator and its `changed` slot.
struct Controls<C: ControlSurface> {
    surface: C,
    indicators: Vec<Indicator<C::Element>>,
    active: Option<usize>,
    synthesized: bool,
    slide_count: usize,
}

impl<C: ControlSurface> Controls<C> {
    /// Bring the indicator list in line with a new slide count.
    ///
    /// Synthesized indicators are created or removed; supplied ones belong to
    /// the host and are only reported.
    fn sync_slide_count(&mut self, len: usize) {
        if len == self.slide_count {
            return;
        }
        self.slide_count = len;

        if !self.synthesized {
            if self.indicators.len() != len {
                tracing::warn!(
                    target: targets::NAVIGATOR,
                    indicators = self.indicators.len(),
                    slides = len,
                    "supplied indicator count does not match slide count"
                );
            }
            return;
        }

        while self.indicators.len() > len {
            if let Some(indicator) = self.indicators.pop() {
                self.surface.remove_indicator(&indicator.element);
            }
        }
        for index in self.indicators.len()..len {
            let label = ordinal_label(index);
            let element = self.surface.create_indicator(index, &label);
            self.indicators.push(Indicator {
                index,
                label,
                element,
            });
        }
        tracing::debug!(target: targets::NAVIGATOR, indicators = len, "indicators resynchronized");

        // Force the next activation to repaint every marker.
        self.active = None;
    }

    /// Mark the indicator for `index` active and every other one inactive.
    ///
    /// Re-activating the current index does nothing.
    fn activate(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            return false;
        }
        for indicator in &self.indicators {
            self.surface
                .set_indicator_active(&indicator.element, indicator.index == index);
        }
        if index >= self.indicators.len() {
            tracing::debug!(target: targets::NAVIGATOR, index, "no indicator for active slide");
        }
        self.active = Some(index);
        true
    }
}

/// Arrows and indicators bound to a track.
///
/// The navigator stays subscribed to the track's `changed` signal until it
/// is dropped.
pub struct Navigator<C: ControlSurface> {
    controls: Arc<Mutex<Controls<C>>>,
    prev: Option<C::Element>,
    next: Option<C::Element>,
    _connection: ConnectionGuard<ActiveSlideInfo>,
}

impl<C: ControlSurface> Navigator<C> {
    /// Bind controls to an initialized track.
    ///
    /// Synthesized indicators are created on `surface` now, one per slide,
    /// labelled `1..=n`, and are added or removed later as the slide count
    /// changes. The current active slide is marked immediately.
    pub fn new<S: TrackSurface>(
        track: &Track<S>,
        mut surface: C,
        options: NavigatorOptions<C::Element>,
    ) -> Result<Self> {
        let Some(active) = track.active_index() else {
            return Err(Error::NotInitialized);
        };

        let synthesized = matches!(options.indicators, IndicatorSource::Synthesized);
        let indicators: Vec<Indicator<C::Element>> = match options.indicators {
            IndicatorSource::Supplied(elements) => {
                if elements.len() != track.slides().len() {
                    tracing::warn!(
                        target: targets::NAVIGATOR,
                        indicators = elements.len(),
                        slides = track.slides().len(),
                        "supplied indicator count does not match slide count"
                    );
                }
                elements
                    .into_iter()
                    .enumerate()
                    .map(|(index, element)| Indicator {
                        index,
                        label: ordinal_label(index),
                        element,
                    })
                    .collect()
            }
            IndicatorSource::Synthesized => (0..track.slides().len())
                .map(|index| {
                    let label = ordinal_label(index);
                    let element = surface.create_indicator(index, &label);
                    Indicator {
                        index,
                        label,
                        element,
                    }
                })
                .collect(),
        };
        tracing::debug!(target: targets::NAVIGATOR, indicators = indicators.len(), "navigator bound");

        let controls = Arc::new(Mutex::new(Controls {
            surface,
            indicators,
            active: None,
            synthesized,
            slide_count: track.slides().len(),
        }));

        let slot_controls = controls.clone();
        let connection = Signal::connect_scoped(&track.changed, move |info: &ActiveSlideInfo| {
            let mut controls = slot_controls.lock();
            controls.sync_slide_count(info.len);
            controls.activate(info.active);
        });
        controls.lock().activate(active);

        Ok(Self {
            controls,
            prev: options.prev,
            next: options.next,
            _connection: connection,
        })
    }

    /// Perform a navigation action on `track`.
    ///
    /// Returns `true` if the track moved (or, for indicators, jumped).
    pub fn click<S: TrackSurface>(&self, track: &mut Track<S>, control: Control) -> bool {
        match control {
            Control::Prev => track.active_prev(),
            Control::Next => track.active_next(),
            Control::Indicator(index) => self.activate_indicator(track, index),
        }
    }

    /// Perform the action bound to `element`, if any.
    pub fn click_element<S: TrackSurface>(&self, track: &mut Track<S>, element: &C::Element) -> bool {
        match self.control_for(element) {
            Some(control) => self.click(track, control),
            None => false,
        }
    }

    /// The action bound to `element`.
    pub fn control_for(&self, element: &C::Element) -> Option<Control> {
        if self.prev.as_ref() == Some(element) {
            return Some(Control::Prev);
        }
        if self.next.as_ref() == Some(element) {
            return Some(Control::Next);
        }
        self.controls
            .lock()
            .indicators
            .iter()
            .find(|indicator| &indicator.element == element)
            .map(|indicator| Control::Indicator(indicator.index))
    }

    fn activate_indicator<S: TrackSurface>(&self, track: &mut Track<S>, index: usize) -> bool {
        if index >= track.slides().len() {
            tracing::debug!(target: targets::NAVIGATOR, index, "indicator has no slide");
            return false;
        }
        // The lock must not be held here: change_slide re-enters the `changed` slot.
        track.change_slide(index);
        self.controls.lock().activate(index);
        true
    }

    /// Index of the indicator currently marked active.
    pub fn active_indicator(&self) -> Option<usize> {
        self.controls.lock().active
    }

    /// The indicators in slide order.
    pub fn indicators(&self) -> Vec<Indicator<C::Element>> {
        self.controls.lock().indicators.clone()
    }

    /// The previous-arrow element.
    pub fn prev_element(&self) -> Option<&C::Element> {
        self.prev.as_ref()
    }

    /// The next-arrow element.
    pub fn next_element(&self) -> Option<&C::Element> {
        self.next.as_ref()
    }

    /// Inspect the control surface.
    pub fn with_controls<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.controls.lock().surface)
    }
}

fn ordinal_label(index: usize) -> String {
    (index + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{ElementId, MemoryControls, MemorySurface};
    use crate::input::MouseEvent;

    fn track(count: usize) -> Track<MemorySurface> {
        let mut track = Track::new(MemorySurface::uniform(800.0, count, 200.0));
        track.init().unwrap();
        track
    }

    fn active_dots(navigator: &Navigator<MemoryControls>) -> Vec<ElementId> {
        navigator.with_controls(|controls| controls.active_elements())
    }

    #[test]
    fn test_requires_initialized_track() {
        let track = Track::new(MemorySurface::uniform(800.0, 3, 200.0));
        let result = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new());
        assert!(matches!(result, Err(Error::NotInitialized)));
    }

    #[test]
    fn test_synthesizes_one_indicator_per_slide() {
        let track = track(4);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();

        let indicators = navigator.indicators();
        assert_eq!(indicators.len(), 4);
        let labels: Vec<_> = indicators.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["1", "2", "3", "4"]);
        navigator.with_controls(|controls| {
            assert_eq!(controls.elements()[2].created_for, Some(2));
        });
        assert_eq!(navigator.active_indicator(), Some(0));
        assert_eq!(active_dots(&navigator), vec![indicators[0].element]);
    }

    #[test]
    fn test_supplied_indicators_are_not_recreated() {
        let track = track(3);
        let mut controls = MemoryControls::new();
        let dots: Vec<_> = (0..3).map(|i| controls.add_element(format!("dot {i}"))).collect();

        let navigator = Navigator::new(
            &track,
            controls,
            NavigatorOptions::new().with_indicators(dots.clone()),
        )
        .unwrap();

        navigator.with_controls(|controls| assert_eq!(controls.elements().len(), 3));
        assert_eq!(active_dots(&navigator), vec![dots[0]]);
        assert_eq!(navigator.control_for(&dots[2]), Some(Control::Indicator(2)));
    }

    #[test]
    fn test_arrows_delegate_to_track() {
        let mut track = track(2);
        let mut controls = MemoryControls::new();
        let prev = controls.add_element("prev");
        let next = controls.add_element("next");
        let navigator = Navigator::new(
            &track,
            controls,
            NavigatorOptions::new().with_arrows(prev, next),
        )
        .unwrap();

        assert_eq!(navigator.prev_element(), Some(&prev));
        assert!(!navigator.click_element(&mut track, &prev));
        assert!(navigator.click_element(&mut track, &next));
        assert!(!navigator.click_element(&mut track, &next));
        assert_eq!(track.active_index(), Some(1));
        assert_eq!(navigator.active_indicator(), Some(1));
    }

    #[test]
    fn test_indicator_click_jumps() {
        let mut track = track(5);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();

        let fourth = navigator.indicators()[3].element;
        assert!(navigator.click_element(&mut track, &fourth));
        assert_eq!(track.active_index(), Some(3));
        assert_eq!(active_dots(&navigator), vec![fourth]);
    }

    #[test]
    fn test_drag_updates_indicators() {
        let mut track = track(3);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();

        track.handle_input(&mut MouseEvent::press(0.0).into());
        track.handle_input(&mut MouseEvent::moved(200.0).into());
        track.handle_input(&mut MouseEvent::release(200.0).into());

        assert_eq!(navigator.active_indicator(), Some(1));
        assert_eq!(active_dots(&navigator).len(), 1);
    }

    #[test]
    fn test_reapplying_active_index_is_noop() {
        let mut controls = Controls {
            surface: MemoryControls::new(),
            indicators: Vec::new(),
            active: None,
            synthesized: true,
            slide_count: 3,
        };
        for index in 0..3 {
            let element = controls.surface.create_indicator(index, &ordinal_label(index));
            controls.indicators.push(Indicator {
                index,
                label: ordinal_label(index),
                element,
            });
        }

        assert!(controls.activate(1));
        let snapshot = controls.surface.clone();
        assert!(!controls.activate(1));
        assert_eq!(controls.surface, snapshot);
        assert_eq!(controls.surface.active_elements(), vec![ElementId(1)]);
    }

    #[test]
    fn test_unknown_element_does_nothing() {
        let mut track = track(2);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();
        assert_eq!(navigator.control_for(&ElementId(99)), None);
        assert!(!navigator.click_element(&mut track, &ElementId(99)));
    }

    #[test]
    fn test_extra_supplied_indicator_is_ignored() {
        let mut track = track(2);
        let mut controls = MemoryControls::new();
        let dots: Vec<_> = (0..3).map(|i| controls.add_element(i.to_string())).collect();
        let navigator =
            Navigator::new(&track, controls, NavigatorOptions::new().with_indicators(dots.clone())).unwrap();

        assert!(!navigator.click_element(&mut track, &dots[2]));
        assert_eq!(track.active_index(), Some(0));
    }

    #[test]
    fn test_dropping_navigator_disconnects() {
        let track = track(2);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();
        assert_eq!(track.changed.connection_count(), 1);
        drop(navigator);
        assert_eq!(track.changed.connection_count(), 0);
    }

    fn resize_to(track: &mut Track<MemorySurface>, count: usize) {
        track.surface_mut().set_item_widths(std::iter::repeat_n(200.0, count));
        let t0 = std::time::Instant::now();
        track.handle_resize(t0);
        assert!(track.poll(t0 + track.config().resize_debounce()));
    }

    #[test]
    fn test_synthesized_indicators_grow_with_slides() {
        let mut track = track(3);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();

        resize_to(&mut track, 5);
        assert_eq!(navigator.indicators().len(), 5);

        track.change_slide(4);
        let indicators = navigator.indicators();
        assert_eq!(indicators[4].label, "5");
        assert_eq!(navigator.active_indicator(), Some(4));
        assert_eq!(active_dots(&navigator), vec![indicators[4].element]);

        assert!(navigator.click_element(&mut track, &indicators[3].element));
        assert_eq!(track.active_index(), Some(3));
    }

    #[test]
    fn test_synthesized_indicators_shrink_with_slides() {
        let mut track = track(5);
        let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();
        let before = navigator.indicators();
        track.change_slide(4);

        resize_to(&mut track, 2);
        assert_eq!(track.active_index(), Some(1));

        let indicators = navigator.indicators();
        assert_eq!(indicators.len(), 2);
        assert_eq!(active_dots(&navigator), vec![indicators[1].element]);
        navigator.with_controls(|controls| {
            assert_eq!(controls.live_elements(), vec![before[0].element, before[1].element]);
            assert!(controls.element(before[4].element).unwrap().removed);
        });
        assert_eq!(navigator.control_for(&before[4].element), None);
    }

    #[test]
    fn test_supplied_indicators_survive_slide_count_change() {
        let mut track = track(3);
        let mut controls = MemoryControls::new();
        let dots: Vec<_> = (0..3).map(|i| controls.add_element(i.to_string())).collect();
        let navigator =
            Navigator::new(&track, controls, NavigatorOptions::new().with_indicators(dots.clone())).unwrap();

        resize_to(&mut track, 4);
        assert_eq!(navigator.indicators().len(), 3);
        navigator.with_controls(|controls| assert_eq!(controls.live_elements(), dots));

        track.change_slide(2);
        assert_eq!(active_dots(&navigator), vec![dots[2]]);
    }
}
