//! # Visit: the dual-track state machine.
//!
//! A [`Visit`] merges two independently progressing activities into one
//! lifecycle: issuing a request (request track) and the content view's
//! navigation (navigation track).
//!
//! ## Tracks
//! ```text
//! request:     Initialized ──start──► Started ──┬─ complete_request ─► Completed
//!                                               └─ cancel_request ───► Canceled
//! navigation:  Started ──┬─ complete_navigation ─► Completed  ─┐
//!                        └─ cancel_navigation ───► Canceled   ─┴─► barrier opened
//! ```
//! The navigation track starts in `Started`: the content view is already
//! navigating when a visit is constructed.
//!
//! ## Cascades
//! ```text
//! cancel()            ─► cancel_navigation() ─► cancel_request() ─► finish()
//! cancel_navigation() ─► cancel_request() ─► finish()
//! cancel_request()    ─► abort_request() ─► RequestFinished ─► finish()
//! fail()              ─► VisitFailed ─► finish()
//! finish()            ─► complete_request() ─► complete_navigation() ─► VisitFinished
//! ```
//!
//! ## Rules
//! - Every operation checks its precondition and is a no-op when it does not hold.
//! - `finished` is set once, before the cascade runs, so re-entrant `finish()` calls are no-ops.
//! - `failed` is latched; only the first failure is reported.
//! - Side-channel responses/failures wait in the barrier until navigation leaves
//!   `Started`. Released items are dropped unless the request track is still
//!   `Started` and the visit has not finished.
//! - Callbacks arriving after the visit finished are dropped.

use std::fmt;
use std::sync::{Arc, Weak};
use url::Url;

use super::barrier::OrderingBarrier;
use super::builder::VisitBuilder;
use super::config::VisitConfig;
use super::state::{Direction, TrackState, VisitId};
use crate::drivers::{Callback, Deferred, Driver, Reaction};
use crate::error::VisitError;
use crate::events::{Event, EventKind};
use crate::observers::Observe;

/// Final snapshot of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOutcome {
    /// Visit identity.
    pub visit: VisitId,
    /// Final request track state.
    pub request: TrackState,
    /// Final navigation track state.
    pub navigation: TrackState,
    /// The visit finished.
    pub finished: bool,
    /// The visit failed.
    pub failed: bool,
    /// The visit finished with a canceled track.
    pub canceled: bool,
    /// The visit finished without failing or being canceled.
    pub succeeded: bool,
}

/// One navigation attempt, tracked until it reaches a terminal outcome.
///
/// All operations run on a single execution context and never block;
/// asynchronous progress arrives later through [`Visit::handle`] or the
/// public track operations.
pub struct Visit {
    id: VisitId,
    direction: Direction,
    location: Option<Url>,

    request_state: TrackState,
    navigation_state: TrackState,
    finished: bool,
    failed: bool,

    driver: Driver,
    barrier: OrderingBarrier<Deferred>,
    observer: Option<Weak<dyn Observe>>,
    cfg: VisitConfig,
}

impl Visit {
    /// Returns a builder for a visit driven by `driver`.
    pub fn builder(driver: Driver) -> VisitBuilder {
        VisitBuilder::new(driver)
    }

    pub(crate) fn from_parts(
        driver: Driver,
        location: Option<Url>,
        direction: Direction,
        observer: Option<Weak<dyn Observe>>,
        cfg: VisitConfig,
    ) -> Self {
        Self {
            id: VisitId::next(),
            direction,
            location,
            request_state: TrackState::Initialized,
            navigation_state: TrackState::Started,
            finished: false,
            failed: false,
            driver,
            barrier: OrderingBarrier::new(),
            observer,
            cfg,
        }
    }

    // ---- Accessors ----

    /// Returns the visit identity.
    pub fn id(&self) -> VisitId {
        self.id
    }

    /// Returns the direction the visit was created with.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the target location, if any.
    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    /// Returns the current request track state.
    pub fn request_state(&self) -> TrackState {
        self.request_state
    }

    /// Returns the current navigation track state.
    pub fn navigation_state(&self) -> TrackState {
        self.navigation_state
    }

    /// Returns the visit configuration.
    pub fn config(&self) -> &VisitConfig {
        &self.cfg
    }

    /// Returns `true` once `finish` has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns `true` once the visit has failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Finished with at least one canceled track.
    pub fn is_canceled(&self) -> bool {
        self.finished
            && (self.request_state == TrackState::Canceled
                || self.navigation_state == TrackState::Canceled)
    }

    /// Finished and not canceled.
    pub fn is_completed(&self) -> bool {
        self.finished && !self.is_canceled()
    }

    /// Completed and not failed.
    pub fn is_succeeded(&self) -> bool {
        self.is_completed() && !self.failed
    }

    /// Returns a snapshot of the visit's current outcome.
    pub fn outcome(&self) -> VisitOutcome {
        VisitOutcome {
            visit: self.id,
            request: self.request_state,
            navigation: self.navigation_state,
            finished: self.finished,
            failed: self.failed,
            canceled: self.is_canceled(),
            succeeded: self.is_succeeded(),
        }
    }

    /// Sets the observer; the visit keeps only a weak reference.
    pub fn set_observer<O: Observe>(&mut self, observer: &Arc<O>) {
        let weak = Arc::downgrade(observer) as Weak<dyn Observe>;
        self.observer = Some(weak);
    }

    /// Removes the observer; later notifications are skipped.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // ---- Lifecycle ----

    /// Starts the request track and issues the request.
    ///
    /// Emits `VisitStarted` then `RequestWillIssue`. No-op unless the request
    /// track is `Initialized`.
    pub fn start(&mut self) {
        if self.request_state != TrackState::Initialized {
            tracing::trace!(visit = %self.id, request = %self.request_state, "start ignored");
            return;
        }
        self.request_state = TrackState::Started;
        tracing::debug!(
            visit = %self.id,
            location = self.location_str(),
            direction = %self.direction,
            driver = self.driver.as_label(),
            "visit started"
        );
        self.emit(EventKind::VisitStarted);
        self.emit(EventKind::RequestWillIssue);
        self.driver.issue_request(self.id, self.location.as_ref());
    }

    /// Cancels both tracks and finishes the visit.
    pub fn cancel(&mut self) {
        tracing::debug!(
            visit = %self.id,
            request = %self.request_state,
            navigation = %self.navigation_state,
            "cancel requested"
        );
        self.cancel_navigation();
        self.cancel_request();
        self.finish();
    }

    /// Marks the visit failed and finishes it.
    ///
    /// Emits `VisitFailed` at most once. No-op once failed or finished.
    pub fn fail(&mut self) {
        if self.finished || self.failed {
            tracing::trace!(
                visit = %self.id,
                finished = self.finished,
                failed = self.failed,
                "fail ignored"
            );
            return;
        }
        self.failed = true;
        tracing::debug!(visit = %self.id, location = self.location_str(), "visit failed");
        self.emit(EventKind::VisitFailed);
        self.finish();
    }

    /// Completes whatever is still running and emits `VisitFinished`, once.
    pub fn finish(&mut self) {
        if self.finished {
            tracing::trace!(visit = %self.id, "finish ignored");
            return;
        }
        self.finished = true;
        self.complete_request();
        self.complete_navigation();
        tracing::debug!(
            visit = %self.id,
            request = %self.request_state,
            navigation = %self.navigation_state,
            failed = self.failed,
            "visit finished"
        );
        self.emit(EventKind::VisitFinished);
    }

    // ---- Request track ----

    /// Moves the request track `Started → Completed` and emits `RequestFinished`.
    pub fn complete_request(&mut self) {
        if self.request_state != TrackState::Started {
            tracing::trace!(visit = %self.id, request = %self.request_state, "complete_request ignored");
            return;
        }
        self.request_state = TrackState::Completed;
        tracing::debug!(visit = %self.id, "request completed");
        self.emit(EventKind::RequestFinished);
    }

    /// Moves the request track `Started → Canceled`, aborts the request and finishes.
    pub fn cancel_request(&mut self) {
        if self.request_state != TrackState::Started {
            tracing::trace!(visit = %self.id, request = %self.request_state, "cancel_request ignored");
            return;
        }
        self.request_state = TrackState::Canceled;
        tracing::debug!(visit = %self.id, "request canceled");
        self.driver.abort_request();
        self.emit(EventKind::RequestFinished);
        self.finish();
    }

    // ---- Navigation track ----

    /// Moves the navigation track `Started → Completed` and opens the barrier.
    pub fn complete_navigation(&mut self) {
        if self.navigation_state != TrackState::Started {
            tracing::trace!(
                visit = %self.id,
                navigation = %self.navigation_state,
                "complete_navigation ignored"
            );
            return;
        }
        self.navigation_state = TrackState::Completed;
        tracing::debug!(visit = %self.id, "navigation completed");
        self.release_barrier();
    }

    /// Moves the navigation track `Started → Canceled`, cancels the request and finishes.
    ///
    /// The barrier opens once the request cascade has run.
    pub fn cancel_navigation(&mut self) {
        if self.navigation_state != TrackState::Started {
            tracing::trace!(
                visit = %self.id,
                navigation = %self.navigation_state,
                "cancel_navigation ignored"
            );
            return;
        }
        self.navigation_state = TrackState::Canceled;
        tracing::debug!(visit = %self.id, "navigation canceled");
        self.cancel_request();
        self.release_barrier();
        self.finish();
    }

    // ---- Collaborator callbacks ----

    /// Feeds a collaborator callback through the bound driver.
    pub fn handle(&mut self, callback: Callback) {
        if self.finished {
            tracing::debug!(visit = %self.id, callback = callback.as_label(), "callback after finish dropped");
            return;
        }
        let reaction = self.driver.react(self.id, callback, &self.cfg, self.failed);
        match reaction {
            Reaction::Proceed => {}
            Reaction::Fail(error) => {
                self.report_failure(error);
                self.fail();
            }
            Reaction::LoadCompleted => {
                self.emit(EventKind::WebViewLoadCompleted);
                self.finish();
            }
            Reaction::Defer(deferred) => {
                if let Some(ready) = self.barrier.enqueue(deferred) {
                    self.run_deferred(ready);
                } else {
                    tracing::debug!(
                        visit = %self.id,
                        pending = self.barrier.pending(),
                        "deferred until navigation settles"
                    );
                }
            }
            Reaction::Misrouted(label) => {
                tracing::warn!(
                    visit = %self.id,
                    driver = self.driver.as_label(),
                    callback = label,
                    "callback does not belong to this driver"
                );
            }
        }
    }

    // ---- Internals ----

    fn release_barrier(&mut self) {
        let released = self.barrier.open();
        if !released.is_empty() {
            tracing::debug!(visit = %self.id, released = released.len(), "barrier opened");
        }
        for deferred in released {
            self.run_deferred(deferred);
        }
    }

    fn run_deferred(&mut self, deferred: Deferred) {
        if self.finished || self.request_state != TrackState::Started {
            tracing::debug!(
                visit = %self.id,
                request = %self.request_state,
                finished = self.finished,
                ?deferred,
                "request no longer running; deferred report dropped"
            );
            return;
        }
        match deferred {
            Deferred::Response(body) => {
                self.notify(self.event(EventKind::RequestCompleted).with_response(body));
                self.complete_request();
            }
            Deferred::Failure(status) => {
                let error = match status {
                    Some(code) => VisitError::StatusCode { code },
                    None => VisitError::Transport {
                        domain: self.cfg.transport_error_domain.clone(),
                    },
                };
                self.report_failure(error);
                self.fail();
            }
        }
    }

    fn report_failure(&self, error: VisitError) {
        tracing::debug!(visit = %self.id, error = error.as_label(), "request failure reported");
        let event = match error.status_code() {
            Some(code) => self
                .event(EventKind::RequestFailedWithStatus)
                .with_status_code(code),
            None => self.event(EventKind::RequestFailedWithError),
        };
        self.notify(event.with_error(error));
    }

    fn event(&self, kind: EventKind) -> Event {
        let ev = Event::new(kind, self.id)
            .with_direction(self.direction)
            .with_tracks(self.request_state, self.navigation_state);
        match &self.location {
            Some(location) => ev.with_location(location.as_str()),
            None => ev,
        }
    }

    fn emit(&self, kind: EventKind) {
        self.notify(self.event(kind));
    }

    fn notify(&self, event: Event) {
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            tracing::trace!(visit = %self.id, kind = event.kind.as_label(), "no observer");
            return;
        };
        observer.on_event(&event);
    }

    fn location_str(&self) -> &str {
        self.location.as_ref().map_or("-", Url::as_str)
    }
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Visit {}, location: {}>", self.id, self.location_str())
    }
}

impl fmt::Debug for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visit")
            .field("id", &self.id)
            .field("location", &self.location_str())
            .field("direction", &self.direction)
            .field("request", &self.request_state)
            .field("navigation", &self.navigation_state)
            .field("finished", &self.finished)
            .field("failed", &self.failed)
            .field("driver", &self.driver)
            .finish()
    }
}
