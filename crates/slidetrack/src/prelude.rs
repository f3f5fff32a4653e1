//! Prelude module for slidetrack.
//!
//! ```ignore
//! use slidetrack::prelude::*;
//! ```

// ============================================================================
// Track and Navigation
// ============================================================================

pub use crate::navigator::{Control, IndicatorSource, Navigator, NavigatorOptions};
pub use crate::track::{Movement, Track};
pub use crate::TrackConfig;

// ============================================================================
// Geometry and Surfaces
// ============================================================================

pub use crate::geometry::{ActiveSlideInfo, ItemLayout};
pub use crate::headless::{MemoryControls, MemorySurface};
pub use crate::surface::{ControlSurface, TrackSurface};

// ============================================================================
// Input
// ============================================================================

pub use crate::input::{InputEvent, MouseEvent, TouchEvent, TouchPhase, TouchPoint};

// ============================================================================
// Signals
// ============================================================================

pub use slidetrack_core::Signal;
