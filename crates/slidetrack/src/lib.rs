//! slidetrack - a draggable, touch-capable slide track.
//!
//! A [`Track`] is a horizontal list of items the user drags with mouse or
//! finger. The track follows the pointer with a fixed acceleration, snaps to
//! the nearest item on release, exposes next/previous navigation, and
//! re-centers its active item after the viewport is resized. An optional
//! [`Navigator`] binds arrow buttons and indicator dots to the track.
//!
//! Rendering is left to the host through the [`TrackSurface`] and
//! [`ControlSurface`] traits; [`headless`] provides in-memory implementations.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use slidetrack::prelude::*;
//!
//! let mut track = Track::new(MemorySurface::uniform(800.0, 3, 200.0));
//! track.init().unwrap();
//!
//! let navigator = Navigator::new(&track, MemoryControls::new(), NavigatorOptions::new()).unwrap();
//!
//! track.handle_input(&mut MouseEvent::press(100.0).into());
//! track.handle_input(&mut MouseEvent::moved(300.0).into());
//! track.handle_input(&mut MouseEvent::release(300.0).into());
//! assert_eq!(navigator.active_indicator(), Some(1));
//!
//! // The host forwards resizes and its clock.
//! let now = Instant::now();
//! track.surface_mut().set_viewport_width(1024.0);
//! track.handle_resize(now);
//! assert!(track.poll(now + Duration::from_millis(200)));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod input;
pub mod navigator;
pub mod prelude;
pub mod surface;
pub mod track;

pub use config::TrackConfig;
pub use error::{Error, Result};
pub use geometry::{ActiveSlideInfo, ItemLayout, SlideArray, SlideEntry};
pub use navigator::{Control, IndicatorSource, Navigator, NavigatorOptions};
pub use surface::{ControlSurface, TrackSurface};
pub use track::{Movement, Track};

pub use slidetrack_core::{debounce, logging, ConnectionGuard, ConnectionId, Signal};
