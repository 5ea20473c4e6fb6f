//! Segment reconstruction from the kept-stamp sequence
//!
//! Final pipeline stage: turns the sweep's kept stamps back into output
//! events, one per maximal timeline slice owned by a single source event.
//! Output segments copy the owner's label and priority and replace only the
//! interval bounds.

use alloc::vec::Vec;

use crate::event::Event;
use crate::resolve::stamp::{EventId, Stamp, StampKind};

/// Rebuild output segments by classifying adjacent kept-stamp pairs.
///
/// | current | next   | condition        | segment owner                     |
/// |---------|--------|------------------|-----------------------------------|
/// | Start   | Finish | same event       | current: undisturbed lifetime     |
/// | Finish  | Finish | different events | next: eclipsed event resumes      |
/// | Start   | Start  | different events | current: cut short by a newcomer  |
///
/// Any other pair (notably Finish followed by Start, a gap between disjoint
/// events) emits nothing. Sequences of length 0 or 1 yield no segments.
#[must_use]
pub(crate) fn rebuild_segments<'a>(events: &[Event<'a>], kept: &[Stamp]) -> Vec<Event<'a>> {
    let mut segments = Vec::new();

    for pair in kept.windows(2) {
        let (current, next) = (pair[0], pair[1]);

        let owner: Option<EventId> = match (current.kind, next.kind) {
            (StampKind::Start, StampKind::Finish) if current.event == next.event => {
                Some(current.event)
            }
            (StampKind::Finish, StampKind::Finish) if current.event != next.event => {
                Some(next.event)
            }
            (StampKind::Start, StampKind::Start) if current.event != next.event => {
                Some(current.event)
            }
            _ => None,
        };

        if let Some(id) = owner {
            let source = &events[id.0];
            segments.push(Event {
                label: source.label,
                priority: source.priority,
                start: current.time,
                finish: next.time,
            });
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(event: usize, time: i64, source_start: i64, kind: StampKind) -> Stamp {
        Stamp {
            event: EventId(event),
            time,
            source_start,
            kind,
        }
    }

    #[test]
    fn empty_and_single_stamp_yield_nothing() {
        let events = [Event::new("a", 0, 0, 10)];
        assert!(rebuild_segments(&events, &[]).is_empty());

        let lone = [stamp(0, 0, 0, StampKind::Start)];
        assert!(rebuild_segments(&events, &lone).is_empty());
    }

    #[test]
    fn start_finish_same_event_is_full_lifetime() {
        let events = [Event::new("a", 7, 0, 10)];
        let kept = [
            stamp(0, 0, 0, StampKind::Start),
            stamp(0, 10, 0, StampKind::Finish),
        ];

        let segments = rebuild_segments(&events, &kept);
        assert_eq!(segments, [Event::new("a", 7, 0, 10)]);
    }

    #[test]
    fn finish_finish_resumes_eclipsed_event() {
        let events = [Event::new("short", 9, 0, 10), Event::new("long", 1, 5, 20)];
        let kept = [
            stamp(0, 10, 0, StampKind::Finish),
            stamp(1, 20, 5, StampKind::Finish),
        ];

        let segments = rebuild_segments(&events, &kept);
        assert_eq!(segments, [Event::new("long", 1, 10, 20)]);
    }

    #[test]
    fn start_start_cuts_current_short() {
        let events = [Event::new("first", 5, 0, 20), Event::new("second", 5, 10, 30)];
        let kept = [
            stamp(0, 0, 0, StampKind::Start),
            stamp(1, 10, 10, StampKind::Start),
        ];

        let segments = rebuild_segments(&events, &kept);
        assert_eq!(segments, [Event::new("first", 5, 0, 10)]);
    }

    #[test]
    fn finish_then_start_is_a_gap() {
        let events = [Event::new("a", 0, 0, 10), Event::new("b", 0, 20, 30)];
        let kept = [
            stamp(0, 10, 0, StampKind::Finish),
            stamp(1, 20, 20, StampKind::Start),
        ];

        assert!(rebuild_segments(&events, &kept).is_empty());
    }
}
