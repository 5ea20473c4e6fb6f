//! Timeline overlap resolution pipeline
//!
//! Flattens possibly-overlapping prioritized events into a non-overlapping
//! partition in three stages, each feeding only the next:
//!
//! 1. [`stamp`] — explode every event into Start/Finish boundary stamps and
//!    sort them into a deterministic total order
//! 2. [`sweep`] — scan the stamps once, tracking the active set and keeping
//!    the stamps of whichever event dominates each boundary
//! 3. [`segment`] — classify adjacent kept stamps back into output events
//!
//! # Guarantees
//!
//! For valid input (`start < finish` on every event) the output is ordered by
//! start ascending, pairwise non-overlapping, and covers exactly the union of
//! input intervals. Disjoint input passes through unchanged apart from
//! reordering. Either the full partition is returned or an error; there is no
//! partial output.
//!
//! # Example
//!
//! ```rust
//! use agenda_core::{resolve_overlaps, Event};
//!
//! // Three same-priority meetings, each overtaken by the next.
//! let events = [
//!     Event::new("meet1", 10, 600, 840),
//!     Event::new("meet2", 10, 720, 960),
//!     Event::new("meet3", 10, 900, 1080),
//! ];
//!
//! let timeline = resolve_overlaps(&events)?;
//! assert_eq!(timeline, [
//!     Event::new("meet1", 10, 600, 720),
//!     Event::new("meet2", 10, 720, 900),
//!     Event::new("meet3", 10, 900, 1080),
//! ]);
//! # Ok::<(), agenda_core::CoreError>(())
//! ```

pub mod segment;
pub mod stamp;
pub mod sweep;

pub use stamp::{EventId, Stamp, StampKind};

use alloc::vec::Vec;

use crate::errors::CoreError;
use crate::event::Event;
use crate::observer::{NoopObserver, SweepObserver};
use crate::Result;

/// Resolve overlaps among `events` into a non-overlapping timeline partition.
///
/// At every instant covered by at least one event, the output attributes that
/// instant to the highest-priority active event, ties broken in favor of the
/// most recently started one (and by input position among exact twins). Input
/// order is irrelevant; each event is resolved by identity, so structurally
/// identical events are still distinct competitors.
///
/// # Errors
///
/// - [`CoreError::InvalidInterval`] if any event has `start >= finish`;
///   nothing is resolved
/// - [`CoreError::Internal`] on a sweep invariant violation (a bug)
pub fn resolve_overlaps<'a>(events: &[Event<'a>]) -> Result<Vec<Event<'a>>> {
    resolve_overlaps_with(events, &mut NoopObserver)
}

/// [`resolve_overlaps`] with an observability hook.
///
/// The observer receives the sorted stamp list before the sweep and the
/// kept-stamp sequence after it. Resolution semantics are identical to the
/// plain entry point.
///
/// # Errors
///
/// Same as [`resolve_overlaps`].
pub fn resolve_overlaps_with<'a, O: SweepObserver>(
    events: &[Event<'a>],
    observer: &mut O,
) -> Result<Vec<Event<'a>>> {
    for event in events {
        if !event.is_valid() {
            return Err(CoreError::invalid_interval(event));
        }
    }

    let stamps = stamp::generate_stamps(events);
    observer.stamps_sorted(&stamps);

    let kept = sweep::sweep(events, &stamps)?;
    observer.stamps_kept(&kept);

    Ok(segment::rebuild_segments(events, &kept))
}
