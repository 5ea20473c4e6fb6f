//! Boundary stamp generation for the sweep-line resolver
//!
//! Converts each input event into a Start and a Finish stamp, then sorts the
//! multiset into the total order the sweep requires. Stamps are transient:
//! created fresh per resolution call and discarded afterwards.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::event::{Event, Timestamp};

/// Stable identity of an input event: its index in the caller's slice.
///
/// Identity is deliberately separate from the dominance ordering key. Two
/// events sharing priority and start instant are still distinct entities,
/// and the active set must track both; comparing ids is how "same event"
/// is decided, never structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventId(pub usize);

/// Boundary kind discriminant for sweep stamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StampKind {
    /// Event becomes active at this instant
    Start,
    /// Event stops being active at this instant
    Finish,
}

/// One boundary marker derived from an input event.
///
/// Carries no identity of its own beyond referencing its source event.
/// `source_start` duplicates the source event's start instant so stamps can
/// be ordered without reaching back into the event slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stamp {
    /// Source event identity
    pub event: EventId,
    /// Instant this boundary occurs at
    pub time: Timestamp,
    /// Start instant of the source event, the secondary ordering key
    pub source_start: Timestamp,
    /// Whether this boundary opens or closes the event
    pub kind: StampKind,
}

impl PartialOrd for Stamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stamp {
    /// Total order: time ascending, then source-event start ascending, then
    /// event id ascending. The secondary key applies uniformly to Start and
    /// Finish stamps so simultaneous boundaries resolve deterministically;
    /// the id tiebreak makes the order total.
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.source_start.cmp(&other.source_start))
            .then_with(|| self.event.cmp(&other.event))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

/// Emit both boundary stamps for every event and sort them.
///
/// Input order is irrelevant; the returned list is in the [`Stamp`] total
/// order, which is what the sweep consumes.
#[must_use]
pub(crate) fn generate_stamps(events: &[Event<'_>]) -> Vec<Stamp> {
    let mut stamps = Vec::with_capacity(events.len() * 2);

    for (index, event) in events.iter().enumerate() {
        let id = EventId(index);

        stamps.push(Stamp {
            event: id,
            time: event.start,
            source_start: event.start,
            kind: StampKind::Start,
        });

        stamps.push(Stamp {
            event: id,
            time: event.finish,
            source_start: event.start,
            kind: StampKind::Finish,
        });
    }

    stamps.sort_unstable();
    stamps
}
