//! Core systems for slidetrack.
//!
//! This crate provides the infrastructure the slide track component is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification ([`Signal`])
//! - **Debouncing**: Collapsing bursts of notifications ([`debounce`])
//! - **Logging**: `tracing` targets and span names ([`logging`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use slidetrack_core::Signal;
//!
//! let changed = Signal::<usize>::new();
//! let conn_id = changed.connect(|index| {
//!     println!("Active index: {}", index);
//! });
//!
//! changed.emit(1);
//! changed.disconnect(conn_id);
//! ```

pub mod debounce;
pub mod logging;
pub mod signal;

pub use debounce::{Debounced, Debouncer};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
