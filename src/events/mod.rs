//! Visit notifications: data model.
//!
//! This module groups the notification **data model** emitted by a
//! [`Visit`](crate::Visit) to its observer at each lifecycle transition.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] notification classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: `Visit` (state transitions and driver reactions).
//! - **Consumer**: the single observer registered on the visit
//!   ([`Observe`](crate::Observe)), held weakly.

mod event;

pub use event::{Event, EventKind};
