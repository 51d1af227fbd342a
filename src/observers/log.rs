//! # LogWriter: tracing-backed event printer
//!
//! A minimal observer that renders incoming [`Event`]s through `tracing`.
//! Use it for demos or to get a visit timeline in application logs.
//!
//! ## Example output
//! ```text
//! INFO [visit-started] visit=#3 location=https://example.com/ direction=Forward
//! INFO [request-will-issue] visit=#3
//! WARN [request-failed] visit=#3 status=404
//! WARN [visit-failed] visit=#3
//! INFO [request-finished] visit=#3 request=Completed
//! INFO [visit-finished] visit=#3 request=Completed navigation=Completed
//! ```

use crate::events::{Event, EventKind};
use crate::observers::Observe;

/// Event writer observer.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Observe for LogWriter {
    fn on_event(&self, e: &Event) {
        let location = e.location.as_deref().unwrap_or("-");
        match e.kind {
            EventKind::VisitStarted => {
                tracing::info!(visit = %e.visit, location, direction = %e.direction, "[visit-started]");
            }
            EventKind::RequestWillIssue => {
                tracing::info!(visit = %e.visit, location, "[request-will-issue]");
            }
            EventKind::RequestCompleted => {
                let bytes = e.response.as_deref().map_or(0, str::len);
                tracing::info!(visit = %e.visit, bytes, navigation = %e.navigation, "[request-completed]");
            }
            EventKind::WebViewLoadCompleted => {
                tracing::info!(visit = %e.visit, location, "[web-view-load-completed]");
            }
            EventKind::RequestFinished => {
                tracing::info!(visit = %e.visit, request = %e.request, "[request-finished]");
            }
            EventKind::RequestFailedWithStatus => {
                tracing::warn!(visit = %e.visit, status = ?e.status_code, "[request-failed]");
            }
            EventKind::RequestFailedWithError => {
                let err = e.error.as_ref().map(|err| err.as_message());
                tracing::warn!(visit = %e.visit, err = ?err, "[request-failed]");
            }
            EventKind::VisitFailed => {
                tracing::warn!(visit = %e.visit, location, "[visit-failed]");
            }
            EventKind::VisitFinished => {
                tracing::info!(
                    visit = %e.visit,
                    request = %e.request,
                    navigation = %e.navigation,
                    "[visit-finished]"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VisitId;
    use crate::error::VisitError;

    #[test]
    fn renders_every_kind_without_a_subscriber() {
        let writer = LogWriter::new();
        let visit = VisitId::next();
        for kind in [
            EventKind::VisitStarted,
            EventKind::RequestWillIssue,
            EventKind::RequestCompleted,
            EventKind::WebViewLoadCompleted,
            EventKind::RequestFinished,
            EventKind::RequestFailedWithStatus,
            EventKind::RequestFailedWithError,
            EventKind::VisitFailed,
            EventKind::VisitFinished,
        ] {
            let ev = Event::new(kind, visit)
                .with_location("https://example.com/")
                .with_error(VisitError::StatusCode { code: 500 });
            writer.on_event(&ev);
        }
        assert_eq!(writer.name(), "LogWriter");
    }
}
