//! # VisitRunner: hosts one visit on a single execution context.
//!
//! The runner moves a [`Visit`] into a dedicated tokio task and owns it
//! exclusively. Collaborators and the caller talk to it through a cloneable
//! [`VisitHandle`]; commands are processed one at a time, so no two callbacks
//! ever run concurrently with each other or with a visit operation.
//!
//! ## Architecture
//! ```text
//! ContentView ──┐
//! Transport   ──┼── VisitHandle ──► [mailbox (bounded mpsc)] ──► runner task ──► Visit
//! Caller      ──┘                                                   ▲
//!                                       CancellationToken ──────────┘ (cancel())
//! ```
//!
//! ## Lifecycle
//! ```text
//! spawn ──► visit.start()
//! loop until visit.is_finished() {
//!   ├─► token cancelled     ─► visit.cancel()
//!   ├─► Command received    ─► apply to visit
//!   └─► all handles dropped ─► visit.cancel()
//! }
//! return VisitOutcome
//! ```
//!
//! ## Rules
//! - There are no timers: a hung transport leaves the visit running until it is canceled.
//! - Commands posted after the runner exited fail with [`RuntimeError::MailboxClosed`].

use tokio::{select, sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use super::state::VisitId;
use super::visit::{Visit, VisitOutcome};
use crate::drivers::Callback;
use crate::error::RuntimeError;

/// Message processed by the runner.
#[derive(Debug)]
enum Command {
    Callback(Callback),
    CompleteRequest,
    CompleteNavigation,
    CancelNavigation,
    Finish,
    Fail,
    Cancel,
}

/// Cloneable address of a running visit.
#[derive(Clone, Debug)]
pub struct VisitHandle {
    visit: VisitId,
    tx: mpsc::Sender<Command>,
}

impl VisitHandle {
    /// Visit this handle addresses.
    pub fn id(&self) -> VisitId {
        self.visit
    }

    /// Returns `true` once the runner has exited.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Delivers a collaborator callback.
    pub async fn deliver(&self, callback: Callback) -> Result<(), RuntimeError> {
        self.send(Command::Callback(callback)).await
    }

    /// Reports that the request was fully delivered.
    pub async fn complete_request(&self) -> Result<(), RuntimeError> {
        self.send(Command::CompleteRequest).await
    }

    /// Reports that the content view reached a stable navigation state.
    pub async fn complete_navigation(&self) -> Result<(), RuntimeError> {
        self.send(Command::CompleteNavigation).await
    }

    /// Reports that the content view abandoned the navigation.
    pub async fn cancel_navigation(&self) -> Result<(), RuntimeError> {
        self.send(Command::CancelNavigation).await
    }

    /// Finishes the visit.
    pub async fn finish(&self) -> Result<(), RuntimeError> {
        self.send(Command::Finish).await
    }

    /// Fails the visit.
    pub async fn fail(&self) -> Result<(), RuntimeError> {
        self.send(Command::Fail).await
    }

    /// Cancels the visit.
    pub async fn cancel(&self) -> Result<(), RuntimeError> {
        self.send(Command::Cancel).await
    }

    async fn send(&self, cmd: Command) -> Result<(), RuntimeError> {
        self.tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::MailboxClosed { visit: self.visit })
    }
}

/// A visit hosted by a runner task.
pub struct RunningVisit {
    handle: VisitHandle,
    join: JoinHandle<VisitOutcome>,
}

impl RunningVisit {
    /// Returns a handle to post commands to the visit.
    pub fn handle(&self) -> VisitHandle {
        self.handle.clone()
    }

    /// Waits for the visit to finish and returns its outcome.
    pub async fn outcome(self) -> Result<VisitOutcome, RuntimeError> {
        let visit = self.handle.visit;
        drop(self.handle);
        self.join.await.map_err(|e| {
            if e.is_panic() {
                RuntimeError::RunnerPanicked { visit }
            } else {
                RuntimeError::RunnerAborted { visit }
            }
        })
    }
}

/// Spawns visits onto tokio tasks.
pub struct VisitRunner;

impl VisitRunner {
    /// Moves `visit` into a new task, starts it and returns its handle.
    ///
    /// Cancelling `token` cancels the visit. Must be called within a tokio runtime.
    pub fn spawn(visit: Visit, token: CancellationToken) -> RunningVisit {
        let (tx, rx) = mpsc::channel(visit.config().mailbox_capacity_clamped());
        let handle = VisitHandle {
            visit: visit.id(),
            tx,
        };
        let join = tokio::spawn(Self::run(visit, rx, token));
        RunningVisit { handle, join }
    }

    async fn run(
        mut visit: Visit,
        mut rx: mpsc::Receiver<Command>,
        token: CancellationToken,
    ) -> VisitOutcome {
        tracing::debug!(visit = %visit.id(), "runner started");
        visit.start();

        while !visit.is_finished() {
            select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(visit = %visit.id(), "runner token cancelled");
                    visit.cancel();
                }
                cmd = rx.recv() => match cmd {
                    Some(cmd) => Self::apply(&mut visit, cmd),
                    None => {
                        tracing::debug!(visit = %visit.id(), "all handles dropped");
                        visit.cancel();
                    }
                }
            }
        }

        let outcome = visit.outcome();
        tracing::debug!(
            visit = %outcome.visit,
            succeeded = outcome.succeeded,
            failed = outcome.failed,
            canceled = outcome.canceled,
            "runner exited"
        );
        outcome
    }

    fn apply(visit: &mut Visit, cmd: Command) {
        match cmd {
            Command::Callback(cb) => visit.handle(cb),
            Command::CompleteRequest => visit.complete_request(),
            Command::CompleteNavigation => visit.complete_navigation(),
            Command::CancelNavigation => visit.cancel_navigation(),
            Command::Finish => visit.finish(),
            Command::Fail => visit.fail(),
            Command::Cancel => visit.cancel(),
        }
    }
}
