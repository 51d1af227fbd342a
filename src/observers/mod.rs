//! # Visit observers.
//!
//! This module provides the [`Observe`] trait and the built-in [`LogWriter`]
//! for handling notifications emitted by a [`Visit`](crate::Visit).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Visit ── emit(Event) ──► Weak<dyn Observe> ──► Observe::on_event(&Event)
//!                                                        │
//!                                               ┌────────┴────────┐
//!                                               ▼                 ▼
//!                                           LogWriter       Presenter / custom
//! ```
//!
//! ## Implementing custom observers
//! See [`Observe`].

#[cfg(feature = "logging")]
mod log;
mod observe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observe::Observe;
