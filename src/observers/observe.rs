//! # Observe: user-facing notification handler
//!
//! The [`Observe`] trait is the **extension point** through which the owner of a
//! visit learns about its lifecycle. Every [`Event`] a visit emits is handed to
//! its observer synchronously, from within the operation or callback that caused it.
//!
//! ```text
//! Visit ── transition ──► Weak<dyn Observe> ──upgrade──► Observe::on_event(&Event)
//!                                   │
//!                                   └── dropped / unset ─► notification skipped
//! ```
//!
//! ## Contract
//! - The visit holds its observer **weakly**: it never keeps it alive.
//! - Handlers run on the visit's execution context; they must not block.
//! - Handlers receive a borrowed event; clone it to keep it.
//!
//! # Example: custom observer
//! ```
//! use waypoint::{Event, EventKind, Observe};
//!
//! struct Presenter;
//!
//! impl Observe for Presenter {
//!     fn on_event(&self, event: &Event) {
//!         if let EventKind::RequestFailedWithStatus = event.kind {
//!             // show an error page for event.status_code
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "presenter"
//!     }
//! }
//! ```

use crate::events::Event;

/// Contract for visit observers.
pub trait Observe: Send + Sync + 'static {
    /// Handle a single notification.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
