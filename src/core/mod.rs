//! Visit core: state machine, ordering barrier and execution context.
//!
//! This module contains the dual-track visit state machine and everything it
//! owns. The public API from this module is [`Visit`] (with its builder and
//! config) and the [`VisitRunner`] that hosts a visit on a tokio task.
//!
//! Internal modules:
//! - [`state`]: track states, direction and visit identity;
//! - [`barrier`]: single-use ordering latch deferring side-channel reports;
//! - [`visit`]: the state machine and its finish/cancel/fail cascades;
//! - [`builder`]: visit construction;
//! - [`config`]: visit settings;
//! - [`runner`]: single-context async host for a visit.

mod barrier;
mod builder;
mod config;
mod runner;
mod state;
mod visit;

pub use barrier::OrderingBarrier;
pub use builder::VisitBuilder;
pub use config::VisitConfig;
pub use runner::{RunningVisit, VisitHandle, VisitRunner};
pub use state::{Direction, TrackState, VisitId};
pub use visit::{Visit, VisitOutcome};
