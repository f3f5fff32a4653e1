//! Logging facilities for slidetrack.
//!
//! slidetrack uses the `tracing` crate for instrumentation. Libraries never
//! install a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("slidetrack=debug")
//!     .init();
//! ```
//!
//! Drag sessions, release decisions and slide changes are logged at `debug`.
//! Per-move position updates and signal emission are logged at `trace`.

/// Span names used throughout slidetrack for tracing.
pub mod span_names {
    /// A single drag session, from press to release.
    pub const DRAG_SESSION: &str = "slidetrack::drag_session";
    /// Rebuilding slide geometry.
    pub const CONFIGURE: &str = "slidetrack::configure";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Slide track target (drag physics, slide changes, resize).
    pub const TRACK: &str = "slidetrack::track";
    /// Navigator target (arrows and indicators).
    pub const NAVIGATOR: &str = "slidetrack::navigator";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "slidetrack_core::signal";
    /// Debounce target.
    pub const DEBOUNCE: &str = "slidetrack_core::debounce";
}
