//! Error types used by visits and the visit runner.
//!
//! This module defines two main error enums:
//!
//! - [`VisitError`]: why a visit failed (reported to the observer, never returned).
//! - [`RuntimeError`]: errors raised by the async [`VisitRunner`](crate::VisitRunner) surface.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use std::sync::Arc;
use thiserror::Error;

use crate::core::VisitId;

/// # Reasons a visit failed.
///
/// All variants are terminal for the visit: nothing is retried internally,
/// the only recourse is to start a new visit.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    /// The transport failed without producing an HTTP status (e.g. connectivity loss).
    #[error("request failed in transport ({domain})")]
    Transport {
        /// Error domain configured in [`VisitConfig::transport_error_domain`](crate::VisitConfig).
        domain: Arc<str>,
    },

    /// A non-success response status was observed.
    #[error("request failed with status code {code}")]
    StatusCode {
        /// The HTTP status code.
        code: u16,
    },

    /// The content view itself failed to load.
    #[error("navigation failed: {error}")]
    Navigation {
        /// The underlying error reported by the content view.
        error: String,
    },
}

impl VisitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use waypoint::VisitError;
    ///
    /// let err = VisitError::StatusCode { code: 404 };
    /// assert_eq!(err.as_label(), "visit_status_code");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            VisitError::Transport { .. } => "visit_transport",
            VisitError::StatusCode { .. } => "visit_status_code",
            VisitError::Navigation { .. } => "visit_navigation",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            VisitError::Transport { domain } => format!("transport error: domain={domain}"),
            VisitError::StatusCode { code } => format!("status code: {code}"),
            VisitError::Navigation { error } => format!("navigation: {error}"),
        }
    }

    /// Returns the HTTP status code for [`VisitError::StatusCode`], `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            VisitError::StatusCode { code } => Some(*code),
            _ => None,
        }
    }
}

/// # Errors produced by the visit runner.
///
/// These represent failures of the execution context hosting a visit,
/// not failures of the visit itself.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The runner already exited; the command was not delivered.
    #[error("visit {visit} mailbox closed")]
    MailboxClosed {
        /// The visit the command was addressed to.
        visit: VisitId,
    },

    /// The runner task panicked before producing an outcome.
    #[error("visit {visit} runner panicked")]
    RunnerPanicked {
        /// The visit hosted by the runner.
        visit: VisitId,
    },

    /// The runner task was aborted before producing an outcome.
    #[error("visit {visit} runner aborted")]
    RunnerAborted {
        /// The visit hosted by the runner.
        visit: VisitId,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use waypoint::{RuntimeError, VisitId};
    ///
    /// let err = RuntimeError::MailboxClosed { visit: VisitId::next() };
    /// assert_eq!(err.as_label(), "runtime_mailbox_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::MailboxClosed { .. } => "runtime_mailbox_closed",
            RuntimeError::RunnerPanicked { .. } => "runtime_runner_panicked",
            RuntimeError::RunnerAborted { .. } => "runtime_runner_aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::MailboxClosed { visit } => format!("mailbox closed: visit={visit}"),
            RuntimeError::RunnerPanicked { visit } => format!("runner panicked: visit={visit}"),
            RuntimeError::RunnerAborted { visit } => format!("runner aborted: visit={visit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_only_for_status_errors() {
        assert_eq!(VisitError::StatusCode { code: 503 }.status_code(), Some(503));
        assert_eq!(
            VisitError::Transport {
                domain: "waypoint.transport".into()
            }
            .status_code(),
            None
        );
        assert_eq!(
            VisitError::Navigation {
                error: "offline".into()
            }
            .status_code(),
            None
        );
    }

    #[test]
    fn display_carries_details() {
        let err = VisitError::Navigation {
            error: "host not found".into(),
        };
        assert_eq!(err.to_string(), "navigation failed: host not found");
        assert_eq!(err.as_message(), "navigation: host not found");
        assert_eq!(err.as_label(), "visit_navigation");
    }
}
