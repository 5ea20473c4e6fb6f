//! Active-set sweep over sorted boundary stamps
//!
//! The heart of the resolver: a single left-to-right scan that maintains the
//! set of currently-open events and records the stamps belonging to whichever
//! event dominates at each boundary.
//!
//! # Dominance
//!
//! The winner among active events is selected by `(priority desc, start desc,
//! id asc)`. The comparator is tie-break only; membership in the active set is
//! keyed on [`EventId`], so two events with identical priority and start stay
//! independently tracked instead of one silently replacing the other.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::errors::CoreError;
use crate::event::Event;
use crate::resolve::stamp::{EventId, Stamp, StampKind};
use crate::Result;

/// Run the sweep and return the kept-stamp sequence in timestamp order.
///
/// A stamp is kept iff its event *is* the dominant active event at the moment
/// the stamp is processed (identity comparison on [`EventId`]). Start stamps
/// insert before the dominance check so a just-started event can immediately
/// win; Finish stamps remove after it so a finishing event can still be
/// recorded as dominant for its own finish instant.
///
/// # Errors
///
/// Returns [`CoreError::Internal`] if the active set is empty at a dominance
/// check, which cannot happen for internally consistent Start/Finish pairs.
pub(crate) fn sweep(events: &[Event<'_>], stamps: &[Stamp]) -> Result<Vec<Stamp>> {
    let mut active: Vec<EventId> = Vec::new();
    let mut kept = Vec::with_capacity(stamps.len());

    for stamp in stamps {
        if stamp.kind == StampKind::Start {
            active.push(stamp.event);
        }

        let winner = dominant(events, &active)
            .ok_or_else(|| CoreError::internal("active set empty during dominance check"))?;

        if winner == stamp.event {
            kept.push(*stamp);
        }

        if stamp.kind == StampKind::Finish {
            if let Some(pos) = active.iter().position(|&id| id == stamp.event) {
                active.remove(pos);
            }
        }
    }

    Ok(kept)
}

/// Select the dominant member of the active set, if any.
///
/// Linear scan; the active set is tiny for realistic calendars and a vector
/// beats an ordered container that would have to key on the non-unique
/// dominance tuple.
fn dominant(events: &[Event<'_>], active: &[EventId]) -> Option<EventId> {
    active.iter().copied().max_by(|&a, &b| rank(events, a, b))
}

/// Dominance comparator: priority descending, start descending, id ascending.
///
/// Expressed for `max_by`, so `Greater` means "wins". The final id leg is
/// inverted: among otherwise equal events the *lower* id ranks first.
fn rank(events: &[Event<'_>], a: EventId, b: EventId) -> Ordering {
    let (ea, eb) = (&events[a.0], &events[b.0]);
    ea.priority
        .cmp(&eb.priority)
        .then_with(|| ea.start.cmp(&eb.start))
        .then_with(|| b.cmp(&a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::stamp::generate_stamps;

    fn kept_for(events: &[Event<'_>]) -> Vec<Stamp> {
        let stamps = generate_stamps(events);
        sweep(events, &stamps).expect("consistent stamps must sweep cleanly")
    }

    #[test]
    fn lone_event_keeps_both_stamps() {
        let events = [Event::new("solo", 0, 0, 10)];
        let kept = kept_for(&events);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].kind, StampKind::Start);
        assert_eq!(kept[1].kind, StampKind::Finish);
    }

    #[test]
    fn higher_priority_wins_contested_instants() {
        let events = [Event::new("high", 10, 0, 10), Event::new("low", 0, 5, 20)];
        let kept = kept_for(&events);

        // low's Start at t=5 loses to high; its Finish at t=20 is kept once
        // high is gone.
        let low_stamps: Vec<_> = kept.iter().filter(|s| s.event == EventId(1)).collect();
        assert_eq!(low_stamps.len(), 1);
        assert_eq!(low_stamps[0].kind, StampKind::Finish);
    }

    #[test]
    fn later_start_wins_equal_priority() {
        let events = [Event::new("first", 5, 0, 20), Event::new("second", 5, 10, 30)];
        let kept = kept_for(&events);

        // second's Start at t=10 immediately dominates first.
        assert!(kept
            .iter()
            .any(|s| s.event == EventId(1) && s.kind == StampKind::Start && s.time == 10));
        // first's Finish at t=20 is eclipsed by second.
        assert!(!kept
            .iter()
            .any(|s| s.event == EventId(0) && s.kind == StampKind::Finish));
    }

    #[test]
    fn finishing_event_owns_its_finish_instant() {
        let events = [Event::new("outer", 5, 0, 30), Event::new("inner", 5, 10, 20)];
        let kept = kept_for(&events);

        // inner dominates its whole lifetime including the finish boundary.
        assert!(kept
            .iter()
            .any(|s| s.event == EventId(1) && s.kind == StampKind::Finish && s.time == 20));
    }

    #[test]
    fn identical_key_events_stay_distinct() {
        // Same priority and same start: the ordering key cannot tell these
        // apart, but both must remain tracked. Lower id wins the tie, and the
        // shorter twin's removal must not evict the winner.
        let events = [Event::new("twin-a", 3, 0, 10), Event::new("twin-b", 3, 0, 5)];
        let kept = kept_for(&events);

        assert!(kept.iter().all(|s| s.event == EventId(0)));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].time, 10, "winner survives the loser's removal");
    }

    #[test]
    fn empty_active_set_is_internal_error() {
        // A Finish with no preceding Start breaches the sweep invariant.
        let events = [Event::new("ghost", 0, 0, 10)];
        let orphan = [Stamp {
            event: EventId(0),
            time: 10,
            source_start: 0,
            kind: StampKind::Finish,
        }];

        let err = sweep(&events, &orphan).expect_err("must surface invariant violation");
        assert!(err.is_internal_bug());
    }
}
