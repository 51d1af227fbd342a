//! # Notifications emitted by a visit.
//!
//! The [`EventKind`] enum classifies notifications across three categories:
//! - **Visit lifecycle**: started, failed, finished
//! - **Request track**: will-issue, completed with response, failed, finished
//! - **Content view**: web view load completed
//!
//! The [`Event`] struct carries metadata such as the visit id, location,
//! a snapshot of both tracks at emission time, and the failure or response
//! payload.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! For a successful visit the observer sees:
//! ```text
//! VisitStarted → RequestWillIssue → (driver specific) → RequestFinished → VisitFinished
//! ```
//! For a failed visit the failure report precedes `VisitFailed`, which precedes `VisitFinished`.
//!
//! ## Example
//! ```rust
//! use waypoint::{Event, EventKind, VisitError, VisitId};
//!
//! let ev = Event::new(EventKind::RequestFailedWithStatus, VisitId::next())
//!     .with_status_code(404)
//!     .with_error(VisitError::StatusCode { code: 404 });
//!
//! assert_eq!(ev.kind, EventKind::RequestFailedWithStatus);
//! assert_eq!(ev.status_code, Some(404));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::core::{Direction, TrackState, VisitId};
use crate::error::VisitError;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of visit notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    // === Visit lifecycle ===
    /// The request track was started.
    VisitStarted,

    /// The visit failed (emitted at most once).
    ///
    /// Preceded by the matching `RequestFailedWith*` report.
    VisitFailed,

    /// The visit finished (emitted exactly once per finished visit, always last).
    VisitFinished,

    // === Request track ===
    /// The driver is about to issue the request.
    RequestWillIssue,

    /// The side-channel transport delivered a response.
    ///
    /// Sets:
    /// - `response`: response body
    RequestCompleted,

    /// The request failed without a status code.
    ///
    /// Sets:
    /// - `error`: `Transport` or `Navigation`
    RequestFailedWithError,

    /// The request failed with a non-success status code.
    ///
    /// Sets:
    /// - `status_code`: observed status
    /// - `error`: `StatusCode`
    RequestFailedWithStatus,

    /// The request track left `Started` (completed or canceled).
    RequestFinished,

    // === Content view ===
    /// The content view finished loading the location.
    WebViewLoadCompleted,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::VisitStarted => "visit_started",
            EventKind::VisitFailed => "visit_failed",
            EventKind::VisitFinished => "visit_finished",
            EventKind::RequestWillIssue => "request_will_issue",
            EventKind::RequestCompleted => "request_completed",
            EventKind::RequestFailedWithError => "request_failed_with_error",
            EventKind::RequestFailedWithStatus => "request_failed_with_status",
            EventKind::RequestFinished => "request_finished",
            EventKind::WebViewLoadCompleted => "web_view_load_completed",
        }
    }
}

/// Visit notification with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `request` / `navigation`: track states at the moment the event was emitted
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Visit that emitted the event.
    pub visit: VisitId,
    /// Target location, if the visit has one.
    pub location: Option<Arc<str>>,
    /// Visit direction.
    pub direction: Direction,
    /// Request track state at emission.
    pub request: TrackState,
    /// Navigation track state at emission.
    pub navigation: TrackState,

    /// Response status code, for status failures.
    pub status_code: Option<u16>,
    /// Failure classification, for failure reports.
    pub error: Option<VisitError>,
    /// Response body, for completed side-channel requests.
    pub response: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind, visit: VisitId) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            visit,
            location: None,
            direction: Direction::Forward,
            request: TrackState::Initialized,
            navigation: TrackState::Started,
            status_code: None,
            error: None,
            response: None,
        }
    }

    /// Attaches a location.
    #[inline]
    pub fn with_location(mut self, location: impl Into<Arc<str>>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attaches the visit direction.
    #[inline]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Attaches a snapshot of both tracks.
    #[inline]
    pub fn with_tracks(mut self, request: TrackState, navigation: TrackState) -> Self {
        self.request = request;
        self.navigation = navigation;
        self
    }

    /// Attaches a response status code.
    #[inline]
    pub fn with_status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Attaches a failure classification.
    #[inline]
    pub fn with_error(mut self, error: VisitError) -> Self {
        self.error = Some(error);
        self
    }

    /// Attaches a response body.
    #[inline]
    pub fn with_response(mut self, body: impl Into<Arc<str>>) -> Self {
        self.response = Some(body.into());
        self
    }

    /// Returns `true` for `RequestFailedWithError` and `RequestFailedWithStatus`.
    #[inline]
    pub fn is_failure_report(&self) -> bool {
        matches!(
            self.kind,
            EventKind::RequestFailedWithError | EventKind::RequestFailedWithStatus
        )
    }
}
