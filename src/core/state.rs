//! # Track states, visit direction and visit identity.
//!
//! A visit is made of two tracks (request, navigation). Each track moves
//! forward through the same states and never goes back:
//! ```text
//! Initialized ──► Started ──┬──► Completed
//!                           └──► Canceled
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global counter for visit identities.
static VISIT_SEQ: AtomicU64 = AtomicU64::new(1);

/// State of a single track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackState {
    /// Not started yet.
    Initialized,
    /// In progress.
    Started,
    /// Finished normally.
    Completed,
    /// Stopped before finishing.
    Canceled,
}

impl TrackState {
    /// Returns the state name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackState::Initialized => "Initialized",
            TrackState::Started => "Started",
            TrackState::Completed => "Completed",
            TrackState::Canceled => "Canceled",
        }
    }

    /// Returns `true` once the track has left `Started` for good.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrackState::Completed | TrackState::Canceled)
    }
}

impl fmt::Display for TrackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a visit in the navigation history.
///
/// Informational only; it does not affect state logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Moving to a new location (default).
    #[default]
    Forward,
    /// Moving back to a previous location.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("Forward"),
            Direction::Backward => f.write_str("Backward"),
        }
    }
}

/// Process-unique identity of a visit.
///
/// Collaborators (content views, transports) receive it so they can route
/// their callbacks back to the right visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisitId(u64);

impl VisitId {
    /// Allocates the next identity.
    pub fn next() -> Self {
        Self(VISIT_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_and_canceled_are_terminal() {
        assert!(!TrackState::Initialized.is_terminal());
        assert!(!TrackState::Started.is_terminal());
        assert!(TrackState::Completed.is_terminal());
        assert!(TrackState::Canceled.is_terminal());
    }

    #[test]
    fn visit_ids_are_unique_and_increasing() {
        let a = VisitId::next();
        let b = VisitId::next();
        assert!(b > a);
        assert_eq!(format!("{a}"), format!("#{}", a.get()));
    }
}
