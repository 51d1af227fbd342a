//! # Side-channel driver.
//!
//! Used when requests go over an out-of-band transport, decoupled from the
//! content view's navigation. Transport callbacks may arrive at any time, so
//! both the response and the failure are deferred through the visit's
//! ordering barrier:
//!
//! ```text
//! issue_request ─► RequestTransport::issue_request(visit, location)
//! abort_request ─► RequestTransport::abort_current_request()
//!
//! ResponseReceived{body}  ─► Defer(Response)  ─► [barrier] ─► report + complete_request
//! RequestFailed{status}   ─► Defer(Failure)   ─► [barrier] ─► report + fail
//! ```

use std::sync::Arc;
use url::Url;

use super::{Callback, Deferred, Reaction};
use crate::core::VisitId;

/// Out-of-band request/response transport collaborator.
///
/// Implementations report back to the visit identified by `visit` with
/// [`Callback::ResponseReceived`] or [`Callback::RequestFailed`].
pub trait RequestTransport: Send + Sync + 'static {
    /// Issues the request for `location`; `visit` becomes the response listener.
    fn issue_request(&self, visit: VisitId, location: &Url);

    /// Aborts the request currently in flight, if any.
    fn abort_current_request(&self);
}

/// Driver delegating to a [`RequestTransport`].
pub struct SideChannelDriver {
    transport: Arc<dyn RequestTransport>,
}

impl SideChannelDriver {
    /// Creates a driver over `transport`.
    pub fn new(transport: Arc<dyn RequestTransport>) -> Self {
        Self { transport }
    }

    pub(crate) fn issue_request(&self, visit: VisitId, location: &Url) {
        tracing::debug!(%visit, %location, "issuing side-channel request");
        self.transport.issue_request(visit, location);
    }

    pub(crate) fn abort_request(&self) {
        self.transport.abort_current_request();
    }

    pub(crate) fn react(&self, callback: Callback) -> Reaction {
        match callback {
            Callback::ResponseReceived { body } => Reaction::Defer(Deferred::Response(body.into())),
            Callback::RequestFailed { status } => Reaction::Defer(Deferred::Failure(status)),
            other => Reaction::Misrouted(other.as_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeTransport;

    #[test]
    fn transport_callbacks_are_deferred() {
        let driver = SideChannelDriver::new(Arc::new(FakeTransport::default()));

        let reaction = driver.react(Callback::ResponseReceived { body: "ok".into() });
        assert!(matches!(reaction, Reaction::Defer(Deferred::Response(ref b)) if &**b == "ok"));

        let reaction = driver.react(Callback::RequestFailed { status: None });
        assert!(matches!(reaction, Reaction::Defer(Deferred::Failure(None))));
    }

    #[test]
    fn navigation_callbacks_are_misrouted() {
        let driver = SideChannelDriver::new(Arc::new(FakeTransport::default()));
        let reaction = driver.react(Callback::NavigationFinished);
        assert!(matches!(reaction, Reaction::Misrouted("navigation_finished")));
    }

    #[test]
    fn abort_reaches_transport() {
        let transport = Arc::new(FakeTransport::default());
        let driver = SideChannelDriver::new(transport.clone());
        driver.abort_request();
        assert_eq!(transport.aborts(), 1);
    }
}
