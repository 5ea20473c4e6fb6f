//! Calendar event value type consumed and produced by overlap resolution
//!
//! Contains the [`Event`] struct representing one prioritized time interval
//! with zero-copy label references, plus small timing helpers. The resolver
//! never mutates input events; output segments are fresh `Event` values
//! borrowing the same labels.

/// Instant on the timeline, in whatever uniform integer unit the caller uses
/// (epoch milliseconds, minutes since midnight, frame numbers, ...).
///
/// The crate never interprets timestamps beyond ordering and subtraction,
/// so any unit works as long as it is consistent across one resolution call.
pub type Timestamp = i64;

/// One prioritized interval on the timeline.
///
/// Events are plain immutable values owned by the caller. The invariant
/// `start < finish` is required by [`crate::resolve_overlaps`], which rejects
/// zero-length and inverted intervals up front; the constructor itself does
/// not validate so that fixtures and intermediate values stay cheap to build.
///
/// # Examples
///
/// ```rust
/// use agenda_core::Event;
///
/// let standup = Event::new("daily stand up", 10, 600, 630);
/// assert_eq!(standup.duration(), 30);
/// assert!(standup.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event<'a> {
    /// Opaque display label, passed through to output segments unchanged.
    /// Never consulted for ordering.
    pub label: &'a str,

    /// Dominance rank; larger values win contested instants
    pub priority: i32,

    /// Inclusive start instant
    pub start: Timestamp,

    /// Exclusive finish instant
    pub finish: Timestamp,
}

impl<'a> Event<'a> {
    /// Create an event from its four fields.
    #[must_use]
    pub const fn new(label: &'a str, priority: i32, start: Timestamp, finish: Timestamp) -> Self {
        Self {
            label,
            priority,
            start,
            finish,
        }
    }

    /// Interval length in timestamp units.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.finish - self.start
    }

    /// Whether the interval satisfies the `start < finish` input invariant.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.start < self.finish
    }

    /// Whether two intervals share at least one instant.
    ///
    /// Touching boundaries (`self.finish == other.start`) do not count as
    /// overlap, matching the half-open interval model.
    #[must_use]
    pub const fn overlaps(&self, other: &Event<'_>) -> bool {
        self.start < other.finish && other.start < self.finish
    }
}
