//! Injectable observability hook for the sweep pipeline
//!
//! The resolver never writes to an output stream. Callers who want to inspect
//! the intermediate stamp lists (debug tooling, tests, tracing layers) supply
//! a [`SweepObserver`]; everyone else pays nothing via [`NoopObserver`].

use crate::resolve::Stamp;

/// Hook invoked with the resolver's intermediate stamp lists.
///
/// Both methods have empty default bodies, so implementors override only
/// what they care about. The slices are borrowed; copy out whatever must
/// outlive the resolution call.
///
/// # Examples
///
/// ```rust
/// use agenda_core::{resolve_overlaps_with, Event, Stamp, SweepObserver};
///
/// struct StampCounter(usize);
///
/// impl SweepObserver for StampCounter {
///     fn stamps_sorted(&mut self, stamps: &[Stamp]) {
///         self.0 = stamps.len();
///     }
/// }
///
/// let events = [Event::new("standup", 10, 600, 630)];
/// let mut counter = StampCounter(0);
/// resolve_overlaps_with(&events, &mut counter)?;
/// assert_eq!(counter.0, 2);
/// # Ok::<(), agenda_core::CoreError>(())
/// ```
pub trait SweepObserver {
    /// Called once with the full sorted stamp list, before the sweep runs.
    fn stamps_sorted(&mut self, stamps: &[Stamp]) {
        let _ = stamps;
    }

    /// Called once with the kept-stamp sequence, after the sweep completes.
    fn stamps_kept(&mut self, stamps: &[Stamp]) {
        let _ = stamps;
    }
}

/// Observer that ignores everything; used by the plain entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
