//! # Request drivers.
//!
//! A driver adapts the visit's abstract "issue / abort request" calls to a
//! concrete transport, and translates that transport's callbacks into the
//! visit's operation vocabulary.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!   Visit::start ─┤ Driver::issue_request        ├─► ContentView::navigate
//!                 │   Navigation(..)             │      or
//!                 │   SideChannel(..)            ├─► RequestTransport::issue_request
//!                 └──────────────────────────────┘
//!
//!   collaborator ── Callback ──► Visit::handle ──► Driver::react ──► Reaction
//!                                                                     ├─ Proceed
//!                                                                     ├─ Fail(VisitError)
//!                                                                     ├─ LoadCompleted
//!                                                                     ├─ Defer(Deferred) ─► barrier
//!                                                                     └─ Misrouted
//! ```
//!
//! ## Variants
//! - [`NavigationDriver`]: the content view's own navigation *is* the transport.
//! - [`SideChannelDriver`]: requests go over an out-of-band transport; responses
//!   are held back by the ordering barrier until navigation is stable.

mod navigation;
mod side_channel;

pub use navigation::{ContentView, NavigationDriver, PolicyDecision};
pub use side_channel::{RequestTransport, SideChannelDriver};

use std::sync::Arc;
use url::Url;

use crate::core::{VisitConfig, VisitId};
use crate::error::VisitError;

/// Callbacks a collaborator can report to a visit.
///
/// The first three come from a content view, the last two from a side-channel
/// transport. A callback that does not belong to the visit's driver is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback {
    /// Provisional response observed by the content view (policy decision point).
    NavigationResponse {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The content view finished loading.
    NavigationFinished,
    /// The content view failed to load.
    NavigationFailed {
        /// Underlying error description.
        error: String,
        /// `true` if the failure happened before any content was committed.
        provisional: bool,
    },
    /// The side-channel transport delivered a response body.
    ResponseReceived {
        /// Response body.
        body: String,
    },
    /// The side-channel transport failed, with a status code when one was received.
    RequestFailed {
        /// HTTP status code, if any.
        status: Option<u16>,
    },
}

impl Callback {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Callback::NavigationResponse { .. } => "navigation_response",
            Callback::NavigationFinished => "navigation_finished",
            Callback::NavigationFailed { .. } => "navigation_failed",
            Callback::ResponseReceived { .. } => "response_received",
            Callback::RequestFailed { .. } => "request_failed",
        }
    }
}

/// Work held back by the ordering barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Deferred {
    /// Report the response, then complete the request track.
    Response(Arc<str>),
    /// Report the failure, then fail the visit.
    Failure(Option<u16>),
}

/// What the visit must do in answer to a callback.
#[derive(Debug)]
pub(crate) enum Reaction {
    /// Nothing further; the driver handled it.
    Proceed,
    /// Report the failure, then fail the visit.
    Fail(VisitError),
    /// Report the content view load, then finish the visit.
    LoadCompleted,
    /// Route through the ordering barrier.
    Defer(Deferred),
    /// The callback does not belong to this driver.
    Misrouted(&'static str),
}

/// Request driver bound to a visit.
pub enum Driver {
    /// Content-view navigation is the transport.
    Navigation(NavigationDriver),
    /// Out-of-band request/response transport.
    SideChannel(SideChannelDriver),
}

impl Driver {
    /// Shorthand for `Driver::Navigation(NavigationDriver::new(view))`.
    pub fn navigation(view: Arc<dyn ContentView>) -> Self {
        Driver::Navigation(NavigationDriver::new(view))
    }

    /// Shorthand for `Driver::SideChannel(SideChannelDriver::new(transport))`.
    pub fn side_channel(transport: Arc<dyn RequestTransport>) -> Self {
        Driver::SideChannel(SideChannelDriver::new(transport))
    }

    /// Returns a short stable label for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Driver::Navigation(_) => "navigation",
            Driver::SideChannel(_) => "side_channel",
        }
    }

    /// Issues the request for `location`; does nothing without a location.
    pub(crate) fn issue_request(&self, visit: VisitId, location: Option<&Url>) {
        let Some(location) = location else {
            tracing::debug!(%visit, driver = self.as_label(), "no location; request not issued");
            return;
        };
        match self {
            Driver::Navigation(d) => d.issue_request(visit, location),
            Driver::SideChannel(d) => d.issue_request(visit, location),
        }
    }

    /// Aborts the in-flight request, if the transport supports it.
    pub(crate) fn abort_request(&self) {
        match self {
            Driver::Navigation(d) => d.abort_request(),
            Driver::SideChannel(d) => d.abort_request(),
        }
    }

    /// Translates a collaborator callback into a [`Reaction`].
    pub(crate) fn react(
        &self,
        visit: VisitId,
        callback: Callback,
        cfg: &VisitConfig,
        failed: bool,
    ) -> Reaction {
        match self {
            Driver::Navigation(d) => d.react(visit, callback, cfg, failed),
            Driver::SideChannel(d) => d.react(callback),
        }
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Driver").field(&self.as_label()).finish()
    }
}
