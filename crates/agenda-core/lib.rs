//! # Agenda-RS Core
//!
//! Priority-based timeline overlap resolution for calendar-style events.
//! Takes an arbitrary set of possibly-overlapping intervals, each carrying a
//! priority, and flattens them into a non-overlapping partition where every
//! covered instant is owned by exactly one event: the highest-priority event
//! active at that instant, ties broken in favor of the most recently started.
//!
//! ## Features
//!
//! - **Sweep-line core**: `O(n log n)` resolution via sorted boundary stamps
//! - **Zero-copy events**: output segments borrow labels from the input
//! - **Stable identity**: events are tracked by id, never deduplicated by
//!   their ordering key, so structurally identical events stay distinct
//! - **Injectable observability**: opt-in [`SweepObserver`] hook instead of
//!   hard-wired debug printing
//! - **`no_std` compatible**: alloc-only operation with `default-features = false`
//!
//! ## Quick Start
//!
//! ```rust
//! use agenda_core::{resolve_overlaps, Event};
//!
//! // Minutes since midnight; any uniform integer unit works.
//! let events = [
//!     Event::new("daily stand up", 10, 600, 630),
//!     Event::new("coffee break", 0, 615, 660),
//! ];
//!
//! let timeline = resolve_overlaps(&events)?;
//! assert_eq!(timeline.len(), 2);
//! assert_eq!(timeline[0], Event::new("daily stand up", 10, 600, 630));
//! assert_eq!(timeline[1], Event::new("coffee break", 0, 630, 660));
//! # Ok::<(), agenda_core::CoreError>(())
//! ```
//!
//! ## Performance Targets
//!
//! - Resolution: `O(n log n)` time, `O(n)` space
//! - Memory: one transient stamp list and active vector per call,
//!   nothing retained between calls
//! - Thread-safety: pure computation, independent calls run in parallel
//!   with no coordination

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod errors;
pub mod event;
pub mod observer;
pub mod resolve;

pub use errors::CoreError;
pub use event::{Event, Timestamp};
pub use observer::{NoopObserver, SweepObserver};
pub use resolve::{resolve_overlaps, resolve_overlaps_with, EventId, Stamp, StampKind};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
///
/// # Examples
///
/// ```rust
/// use agenda_core::{resolve_overlaps, Event, Result};
///
/// fn flatten<'a>(events: &[Event<'a>]) -> Result<Vec<Event<'a>>> {
///     resolve_overlaps(events)
/// }
/// ```
pub type Result<T> = core::result::Result<T, CoreError>;
