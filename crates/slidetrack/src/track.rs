//! The draggable slide track.
//!
//! [`Track`] owns the drag physics, the per-item centering geometry and the
//! active-index state. The host forwards pointer input, resize notifications
//! and its clock; the track writes transforms and active markers to its
//! [`TrackSurface`] and announces every slide change on [`Track::changed`].
//!
//! # Drag sessions
//!
//! A press (or touch start) opens a session and records the pointer X. Each
//! move of the same input family places the track at
//! `displacement * acceleration + current_x`. On release the committed
//! position becomes the live one and the release decision runs:
//!
//! - displacement above the change threshold moves to the next slide, if any;
//! - displacement below the negative threshold moves to the previous slide, if any;
//! - anything else snaps back to the active slide.
//!
//! # Example
//!
//! ```
//! use slidetrack::headless::MemorySurface;
//! use slidetrack::input::{InputEvent, MouseEvent};
//! use slidetrack::Track;
//!
//! let surface = MemorySurface::uniform(800.0, 5, 200.0);
//! let mut track = Track::new(surface);
//! track.init().unwrap();
//!
//! track.handle_input(&mut InputEvent::from(MouseEvent::press(300.0)));
//! track.handle_input(&mut InputEvent::from(MouseEvent::moved(450.0)));
//! track.handle_input(&mut InputEvent::from(MouseEvent::release(450.0)));
//!
//! assert_eq!(track.active_index(), Some(1));
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use slidetrack_core::logging::{span_names, targets};
use slidetrack_core::{Debouncer, Signal};
use tracing::Span;

use crate::config::TrackConfig;
use crate::error::{Error, Result};
use crate::geometry::{ActiveSlideInfo, SlideArray};
use crate::input::{InputEvent, PointerFamily, PointerPhase, PointerSample};
use crate::surface::TrackSurface;

/// Horizontal drag bookkeeping.
///
/// `current_x` and `final_x` persist between sessions; `click_x` and
/// `displacement` only describe the session in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Movement {
    /// Offset committed by the last completed interaction.
    pub current_x: f32,
    /// Pointer X at the start of the current session.
    pub click_x: f32,
    /// Offset last written to the surface transform.
    pub final_x: f32,
    /// Signed pointer travel in the current session.
    pub displacement: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { family: PointerFamily },
}

/// A horizontally draggable list of items that snaps to the nearest item.
///
/// # Signals
///
/// - `changed(ActiveSlideInfo)`: Emitted on every [`change_slide`](Self::change_slide),
///   including snap-backs and resize re-centering.
pub struct Track<S: TrackSurface> {
    /// Rendering surface.
    surface: S,

    /// Tuning constants.
    config: TrackConfig,

    /// Drag bookkeeping.
    movement: Movement,

    /// Drag session state.
    drag: DragState,

    /// Span covering the open drag session.
    session: Option<Span>,

    /// Centering geometry for every item.
    slides: SlideArray<S::Item>,

    /// Active slide, set by the first `change_slide`.
    index: Option<ActiveSlideInfo>,

    /// Resize debounce timer.
    resize: Debouncer,

    /// Whether `init()` has completed and input is being handled.
    listening: bool,

    /// Signal emitted when the active slide is (re)applied.
    pub changed: Arc<Signal<ActiveSlideInfo>>,
}

impl<S: TrackSurface> Track<S> {
    /// Create a track over `surface` with default tuning.
    ///
    /// The track ignores input until [`init`](Self::init) succeeds.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, TrackConfig::default())
    }

    /// Create a track over `surface` with explicit configuration.
    pub fn with_config(surface: S, config: TrackConfig) -> Self {
        let resize = Debouncer::new(config.resize_debounce());
        Self {
            surface,
            config,
            movement: Movement::default(),
            drag: DragState::Idle,
            session: None,
            slides: SlideArray::default(),
            index: None,
            resize,
            listening: false,
            changed: Arc::new(Signal::new()),
        }
    }

    /// Set the start index using builder pattern.
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.config.start_index = index;
        self
    }

    /// Start handling input, build the slide geometry, start handling resize
    /// and jump to the configured start slide.
    ///
    /// Fails without touching the surface if the configuration is invalid,
    /// the surface has no items, or the start index is out of range.
    pub fn init(&mut self) -> Result<()> {
        self.config.validate()?;
        self.resize.set_delay(self.config.resize_debounce());

        self.slides = SlideArray::from_layout(self.surface.viewport_width(), self.surface.items());
        if self.slides.is_empty() {
            return Err(Error::NoSlides);
        }
        let start = self.config.start_index;
        if start >= self.slides.len() {
            return Err(Error::StartIndexOutOfRange {
                index: start,
                len: self.slides.len(),
            });
        }

        self.listening = true;
        tracing::debug!(
            target: targets::TRACK,
            slides = self.slides.len(),
            start,
            "track initialized"
        );
        self.change_slide(start);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface, e.g. to change its layout
    /// before calling [`handle_resize`](Self::handle_resize).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the track and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The track configuration.
    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Drag bookkeeping.
    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    /// Current slide geometry.
    pub fn slides(&self) -> &SlideArray<S::Item> {
        &self.slides
    }

    /// The active slide and its neighbours, once initialized.
    pub fn index(&self) -> Option<ActiveSlideInfo> {
        self.index
    }

    /// The active slide index, once initialized.
    pub fn active_index(&self) -> Option<usize> {
        self.index.map(|info| info.active)
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Whether [`init`](Self::init) has completed.
    pub fn is_initialized(&self) -> bool {
        self.listening
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed a mouse or touch event into the drag state machine.
    ///
    /// Accepted mouse presses have their default action prevented. Returns
    /// `true` if the event was consumed.
    pub fn handle_input(&mut self, event: &mut InputEvent) -> bool {
        if !self.listening {
            return false;
        }
        let Some(sample) = event.sample() else {
            return false;
        };

        match sample.phase {
            PointerPhase::Start => {
                let accepted = self.on_start(sample);
                if accepted && sample.family == PointerFamily::Mouse {
                    event.prevent_default();
                }
                accepted
            }
            PointerPhase::Move => self.on_move(sample),
            PointerPhase::End => self.on_end(sample),
        }
    }

    /// Open a drag session at `sample.x`.
    pub fn on_start(&mut self, sample: PointerSample) -> bool {
        if !self.listening {
            return false;
        }
        if let DragState::Dragging { family } = self.drag {
            if family != sample.family {
                tracing::debug!(
                    target: targets::TRACK,
                    active = ?family,
                    ignored = ?sample.family,
                    "start from another input family during drag ignored"
                );
                return false;
            }
        }

        let span = tracing::debug_span!(
            target: targets::TRACK,
            span_names::DRAG_SESSION,
            family = ?sample.family
        );
        let _entered = span.enter();

        self.movement.click_x = sample.x;
        self.movement.displacement = 0.0;
        self.surface.set_transition(false);
        self.drag = DragState::Dragging {
            family: sample.family,
        };
        tracing::debug!(target: targets::TRACK, click_x = sample.x, current_x = self.movement.current_x, "drag started");

        drop(_entered);
        self.session = Some(span);
        true
    }

    /// Follow the pointer while a session of the same family is open.
    pub fn on_move(&mut self, sample: PointerSample) -> bool {
        match self.drag {
            DragState::Dragging { family } if family == sample.family => {}
            _ => return false,
        }

        let span = self.session.clone().unwrap_or_else(Span::none);
        let _entered = span.enter();

        let final_x = self.update_position(sample.x);
        self.move_slide(final_x);
        tracing::trace!(
            target: targets::TRACK,
            displacement = self.movement.displacement,
            final_x,
            "drag moved"
        );
        true
    }

    /// Close the session, commit the position and run the release decision.
    pub fn on_end(&mut self, sample: PointerSample) -> bool {
        match self.drag {
            DragState::Dragging { family } if family == sample.family => {}
            DragState::Dragging { family } => {
                tracing::debug!(
                    target: targets::TRACK,
                    active = ?family,
                    ignored = ?sample.family,
                    "release from another input family during drag ignored"
                );
                return false;
            }
            DragState::Idle => return false,
        }

        let span = self.session.take().unwrap_or_else(Span::none);
        let _entered = span.enter();

        self.drag = DragState::Idle;
        self.movement.current_x = self.movement.final_x;
        self.surface.set_transition(true);
        self.change_slide_on_end();
        self.movement.displacement = 0.0;
        true
    }

    /// Compute the live offset for a pointer at `pointer_x`.
    fn update_position(&mut self, pointer_x: f32) -> f32 {
        self.movement.displacement = pointer_x - self.movement.click_x;
        self.movement.displacement * self.config.acceleration + self.movement.current_x
    }

    /// Write `x` to the surface transform.
    fn move_slide(&mut self, x: f32) {
        self.surface.set_transform(x);
        self.movement.final_x = x;
    }

    fn change_slide_on_end(&mut self) {
        let Some(info) = self.index else {
            tracing::warn!(target: targets::TRACK, "drag released with no slides configured");
            return;
        };

        let displacement = self.movement.displacement;
        let threshold = self.config.change_threshold;

        if displacement > threshold && info.next.is_some() {
            tracing::debug!(target: targets::TRACK, displacement, "release advances to next slide");
            self.active_next();
        } else if displacement < -threshold && info.prev.is_some() {
            tracing::debug!(target: targets::TRACK, displacement, "release returns to previous slide");
            self.active_prev();
        } else {
            tracing::debug!(target: targets::TRACK, displacement, "release snaps back");
            self.change_slide(info.active);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Rebuild the slide geometry from the surface and re-center the active slide.
    ///
    /// If items were removed, the active index clamps to the last remaining
    /// slide. With no items left the track has no active slide until items
    /// reappear.
    pub fn configure_slides(&mut self) {
        let span = tracing::trace_span!(target: targets::TRACK, span_names::CONFIGURE);
        let _entered = span.enter();

        self.slides = SlideArray::from_layout(self.surface.viewport_width(), self.surface.items());

        let Some(last) = self.slides.last_index() else {
            if self.index.take().is_some() {
                tracing::warn!(target: targets::TRACK, "every slide item was removed");
            }
            return;
        };

        match self.index {
            Some(info) => self.change_slide(info.active.min(last)),
            None if self.listening => self.change_slide(self.config.start_index.min(last)),
            None => {}
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jump to slide `index`.
    ///
    /// Moves the transform to the slide's centering offset, commits it, marks
    /// exactly that item active and emits [`changed`](Self::changed).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the number of slides. Use
    /// [`active_next`](Self::active_next) and [`active_prev`](Self::active_prev)
    /// for bounds-safe navigation.
    #[tracing::instrument(skip(self), target = "slidetrack::track", level = "trace")]
    pub fn change_slide(&mut self, index: usize) {
        let position = self.slides[index].position_to_center;
        self.move_slide(position);

        let info = ActiveSlideInfo::new(index, self.slides.len());
        self.index = Some(info);
        self.movement.current_x = position;
        self.change_active_class(index);

        tracing::debug!(target: targets::TRACK, index, position, "slide changed");
        self.changed.emit(info);
    }

    fn change_active_class(&mut self, index: usize) {
        for (i, entry) in self.slides.iter().enumerate() {
            self.surface.set_item_active(&entry.element, i == index);
        }
    }

    /// Move to the next slide. Returns `false` (and does nothing) on the last slide.
    pub fn active_next(&mut self) -> bool {
        match self.index.and_then(|info| info.next) {
            Some(next) => {
                self.change_slide(next);
                true
            }
            None => false,
        }
    }

    /// Move to the previous slide. Returns `false` (and does nothing) on the first slide.
    pub fn active_prev(&mut self) -> bool {
        match self.index.and_then(|info| info.prev) {
            Some(prev) => {
                self.change_slide(prev);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Note that the viewport was resized at `now`.
    ///
    /// Geometry is rebuilt by [`poll`](Self::poll) once resizing has been
    /// quiet for the configured debounce delay.
    pub fn handle_resize(&mut self, now: Instant) {
        if !self.listening {
            return;
        }
        self.resize.trigger(now);
    }

    /// Run any pending resize response that is due at `now`.
    ///
    /// Returns `true` if geometry was rebuilt.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.resize.fire_if_due(now) {
            return false;
        }
        tracing::debug!(target: targets::TRACK, "resize settled, reconfiguring slides");
        self.configure_slides();
        true
    }

    /// How long the host may wait before the next [`poll`](Self::poll) is useful.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.resize.time_until_fire(now)
    }
}
