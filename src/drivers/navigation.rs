//! # Navigation-based driver.
//!
//! Used when the content view's own navigation mechanism is the transport.
//! The response is observed indirectly, through navigation lifecycle callbacks:
//!
//! ```text
//! issue_request ─► ContentView::navigate(location)
//!
//! NavigationResponse{status}
//!   ├─ success ─► decide_policy(Allow)
//!   └─ other   ─► decide_policy(Cancel) ─► Fail(StatusCode)
//! NavigationFailed{error}  ─► Fail(Navigation)   (once; ignored after failure)
//! NavigationFinished       ─► release(view) ─► LoadCompleted
//! ```
//!
//! Aborting is a no-op: stopping the navigation elsewhere stops the request.

use std::sync::Arc;
use url::Url;

use super::{Callback, Reaction};
use crate::core::{VisitConfig, VisitId};
use crate::error::VisitError;

/// Answer to a provisional-response policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Let the navigation proceed.
    Allow,
    /// Stop the navigation at the transport level.
    Cancel,
}

/// Content view collaborator (a browser-engine view or equivalent).
///
/// Implementations report navigation callbacks back to the visit identified by
/// `visit` through [`Visit::handle`](crate::Visit::handle) or a
/// [`VisitHandle`](crate::VisitHandle).
pub trait ContentView: Send + Sync + 'static {
    /// Starts navigating to `location` on behalf of `visit`.
    fn navigate(&self, visit: VisitId, location: &Url);

    /// Resolves the pending provisional-response decision for `visit`.
    fn decide_policy(&self, visit: VisitId, decision: PolicyDecision);

    /// Stops reporting navigation callbacks for `visit`.
    fn release(&self, _visit: VisitId) {}
}

/// Driver delegating to a [`ContentView`].
pub struct NavigationDriver {
    view: Arc<dyn ContentView>,
}

impl NavigationDriver {
    /// Creates a driver over `view`.
    pub fn new(view: Arc<dyn ContentView>) -> Self {
        Self { view }
    }

    pub(crate) fn issue_request(&self, visit: VisitId, location: &Url) {
        tracing::debug!(%visit, %location, "navigating content view");
        self.view.navigate(visit, location);
    }

    pub(crate) fn abort_request(&self) {}

    pub(crate) fn react(
        &self,
        visit: VisitId,
        callback: Callback,
        cfg: &VisitConfig,
        failed: bool,
    ) -> Reaction {
        match callback {
            Callback::NavigationResponse { status } => {
                if cfg.is_success(status) {
                    self.view.decide_policy(visit, PolicyDecision::Allow);
                    Reaction::Proceed
                } else {
                    tracing::debug!(%visit, status, "cancelling navigation on status");
                    self.view.decide_policy(visit, PolicyDecision::Cancel);
                    Reaction::Fail(VisitError::StatusCode { code: status })
                }
            }
            Callback::NavigationFailed { error, provisional } => {
                if failed {
                    tracing::trace!(%visit, provisional, "navigation failure after visit failed");
                    return Reaction::Proceed;
                }
                tracing::debug!(%visit, provisional, error = %error, "navigation failed");
                Reaction::Fail(VisitError::Navigation { error })
            }
            Callback::NavigationFinished => {
                self.view.release(visit);
                Reaction::LoadCompleted
            }
            other => Reaction::Misrouted(other.as_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeView;

    fn driver() -> (Arc<FakeView>, NavigationDriver) {
        let view = Arc::new(FakeView::default());
        let driver = NavigationDriver::new(view.clone());
        (view, driver)
    }

    #[test]
    fn success_status_allows_navigation() {
        let (view, driver) = driver();
        let visit = VisitId::next();
        let reaction = driver.react(
            visit,
            Callback::NavigationResponse { status: 200 },
            &VisitConfig::default(),
            false,
        );
        assert!(matches!(reaction, Reaction::Proceed));
        assert_eq!(view.decisions(), vec![PolicyDecision::Allow]);
    }

    #[test]
    fn error_status_cancels_and_fails() {
        let (view, driver) = driver();
        let reaction = driver.react(
            VisitId::next(),
            Callback::NavigationResponse { status: 500 },
            &VisitConfig::default(),
            false,
        );
        assert!(matches!(
            reaction,
            Reaction::Fail(VisitError::StatusCode { code: 500 })
        ));
        assert_eq!(view.decisions(), vec![PolicyDecision::Cancel]);
    }

    #[test]
    fn navigation_failure_is_ignored_once_failed() {
        let (_view, driver) = driver();
        let cb = Callback::NavigationFailed {
            error: "offline".into(),
            provisional: false,
        };
        let reaction = driver.react(VisitId::next(), cb, &VisitConfig::default(), true);
        assert!(matches!(reaction, Reaction::Proceed));
    }

    #[test]
    fn side_channel_callbacks_are_misrouted() {
        let (_view, driver) = driver();
        let reaction = driver.react(
            VisitId::next(),
            Callback::ResponseReceived { body: "<html>".into() },
            &VisitConfig::default(),
            false,
        );
        assert!(matches!(reaction, Reaction::Misrouted("response_received")));
    }
}
