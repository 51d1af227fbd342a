//! # Visit configuration.
//!
//! Provides [`VisitConfig`] centralized settings shared by a visit, its
//! drivers and its runner.
//!
//! Config is used in two ways:
//! 1. **Visit creation**: `Visit::builder(driver).with_config(config)`
//! 2. **Runner creation**: `VisitRunner::spawn` sizes the mailbox from it
//!
//! ## Sentinel values
//! - `mailbox_capacity = 0` → clamped to 1 by [`VisitConfig::mailbox_capacity_clamped`]
//! - empty `success_status` range → every status is treated as a failure

use std::ops::Range;
use std::sync::Arc;

/// Settings for a visit.
///
/// ## Field semantics
/// - `success_status`: status codes the navigation driver lets through (default `200..300`)
/// - `transport_error_domain`: domain attached to [`VisitError::Transport`](crate::VisitError)
/// - `mailbox_capacity`: bounded runner mailbox size (min 1; clamped)
#[derive(Clone, Debug)]
pub struct VisitConfig {
    /// Status codes accepted as a successful response.
    pub success_status: Range<u16>,

    /// Error domain reported when the transport fails without a status code.
    pub transport_error_domain: Arc<str>,

    /// Capacity of the runner mailbox.
    ///
    /// Handles posting to a full mailbox wait until the runner catches up.
    pub mailbox_capacity: usize,
}

impl VisitConfig {
    /// Returns `true` if `code` denotes a successful response.
    #[inline]
    pub fn is_success(&self, code: u16) -> bool {
        self.success_status.contains(&code)
    }

    /// Returns a mailbox capacity clamped to a minimum of 1.
    #[inline]
    pub fn mailbox_capacity_clamped(&self) -> usize {
        self.mailbox_capacity.max(1)
    }
}

impl Default for VisitConfig {
    /// Default configuration:
    ///
    /// - `success_status = 200..300` (2xx)
    /// - `transport_error_domain = "waypoint.transport"`
    /// - `mailbox_capacity = 64`
    fn default() -> Self {
        Self {
            success_status: 200..300,
            transport_error_domain: Arc::from("waypoint.transport"),
            mailbox_capacity: 64,
        }
    }
}
