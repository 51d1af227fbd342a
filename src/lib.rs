//! # waypoint
//!
//! **Waypoint** coordinates a single *visit*: one navigation from a location
//! to another, made of two independently progressing activities.
//!
//! - the **request track**: issuing and tracking the request for the location;
//! - the **navigation track**: the content view's own navigation.
//!
//! Callbacks from the content view and from the transport arrive in arbitrary
//! relative order. The visit merges them into one lifecycle with well-defined
//! terminal states, delivers observer notifications in a fixed relative order,
//! and propagates cancellation and failure to both tracks.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ContentView callbacks      Transport callbacks        Caller
//!   (response status,          (response received,        (cancel, finish,
//!    load finished/failed)      request failed)            complete_navigation)
//!            │                        │                        │
//!            └────────────┬───────────┘                        │
//!                         ▼                                    │
//!                  Visit::handle(Callback) ◄───────────────────┘
//!                         │
//!                         ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Visit (dual-track state machine)                                 │
//! │  - request track     Initialized → Started → Completed|Canceled   │
//! │  - navigation track  Started → Completed|Canceled                 │
//! │  - Driver            Navigation | SideChannel                     │
//! │  - OrderingBarrier   holds side-channel reports until navigation  │
//! │                      leaves Started                               │
//! └──────┬──────────────────────────────────────────────┬─────────────┘
//!        │ issue / abort request                        │ Event
//!        ▼                                              ▼
//!   ContentView::navigate                        Weak<dyn Observe>
//!   RequestTransport::issue_request              (never kept alive)
//! ```
//!
//! ### Lifecycle
//! ```text
//! success:  VisitStarted → RequestWillIssue → (driver specific) → RequestFinished → VisitFinished
//! failure:  ... → RequestFailedWith{Status,Error} → VisitFailed → ... → VisitFinished
//! cancel:   cancel_navigation → cancel_request (abort) → finish
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **State machine** | Dual-track visit with finish/cancel/fail cascades.            | [`Visit`], [`TrackState`], [`VisitOutcome`] |
//! | **Ordering**      | Defers side-channel reports until navigation settles.         | [`OrderingBarrier`]                         |
//! | **Drivers**       | Adapt the visit to a content view or an out-of-band transport.| [`Driver`], [`ContentView`], [`RequestTransport`] |
//! | **Observer API**  | Lifecycle notifications.                                      | [`Observe`], [`Event`], [`EventKind`]       |
//! | **Runtime**       | Host a visit on one tokio task, cancel with a token.          | [`VisitRunner`], [`VisitHandle`]            |
//! | **Errors**        | Failure classification and runtime errors.                    | [`VisitError`], [`RuntimeError`]            |
//! | **Configuration** | Success statuses, error domain, mailbox size.                 | [`VisitConfig`]                             |
//!
//! ## Optional features
//! - `logging`: exports a built-in [`LogWriter`] observer rendering events through `tracing`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use url::Url;
//! use waypoint::{Callback, Driver, Event, Observe, RequestTransport, Visit, VisitId, VisitRunner};
//!
//! struct Transport;
//!
//! impl RequestTransport for Transport {
//!     fn issue_request(&self, _visit: VisitId, _location: &Url) {}
//!     fn abort_current_request(&self) {}
//! }
//!
//! struct Printer;
//!
//! impl Observe for Printer {
//!     fn on_event(&self, event: &Event) {
//!         println!("{:?}", event.kind);
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let printer = Arc::new(Printer);
//!     let visit = Visit::builder(Driver::side_channel(Arc::new(Transport)))
//!         .with_location(Url::parse("https://example.com/inbox")?)
//!         .with_observer(&printer)
//!         .build();
//!
//!     let running = VisitRunner::spawn(visit, CancellationToken::new());
//!     let handle = running.handle();
//!
//!     // The response may arrive before the content view settles; it is held back.
//!     handle.deliver(Callback::ResponseReceived { body: "<html/>".into() }).await?;
//!     handle.complete_navigation().await?;
//!     handle.finish().await?;
//!
//!     let outcome = running.outcome().await?;
//!     assert!(outcome.succeeded);
//!     Ok(())
//! }
//! ```
mod core;
mod drivers;
mod error;
mod events;
mod observers;

#[cfg(test)]
mod test_support;

// ---- Public re-exports ----

pub use self::core::{
    Direction, OrderingBarrier, RunningVisit, TrackState, Visit, VisitBuilder, VisitConfig,
    VisitHandle, VisitId, VisitOutcome, VisitRunner,
};
pub use drivers::{
    Callback, ContentView, Driver, NavigationDriver, PolicyDecision, RequestTransport,
    SideChannelDriver,
};
pub use error::{RuntimeError, VisitError};
pub use events::{Event, EventKind};
pub use observers::Observe;

// Optional: expose a built-in tracing observer.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
