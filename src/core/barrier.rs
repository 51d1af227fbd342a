//! # Ordering barrier (navigation lock).
//!
//! A single-use latch that holds back work until its owner opens it.
//! The visit uses it so that a side-channel response is never reported
//! before the navigation track has left `Started`, even when the response
//! arrives first.
//!
//! ```text
//! closed:  enqueue(a) ─► [a]
//!          enqueue(b) ─► [a, b]
//! open():  ─► returns [a, b] (enqueue order), queue cleared
//! open:    enqueue(c) ─► handed straight back, run immediately
//! ```
//!
//! ## Rules
//! - Items are released **exactly once**, in enqueue order.
//! - `open()` must be called **at most once**; the owner guarantees it through a
//!   monotonic state transition.
//! - The barrier only sequences work; it never runs anything itself and is not
//!   a mutual-exclusion lock.

use std::collections::VecDeque;

/// Single-use latch deferring queued items until opened.
#[derive(Debug)]
pub struct OrderingBarrier<T> {
    open: bool,
    pending: VecDeque<T>,
}

impl<T> OrderingBarrier<T> {
    /// Creates a closed barrier with an empty queue.
    pub fn new() -> Self {
        Self {
            open: false,
            pending: VecDeque::new(),
        }
    }

    /// Queues `item` while closed.
    ///
    /// Returns `Some(item)` when the barrier is already open: the caller must run
    /// it right away, on its own execution context.
    #[must_use]
    pub fn enqueue(&mut self, item: T) -> Option<T> {
        if self.open {
            Some(item)
        } else {
            self.pending.push_back(item);
            None
        }
    }

    /// Opens the barrier and releases every queued item, in enqueue order.
    ///
    /// A second call is a contract violation (debug assertion); in release builds
    /// it releases nothing.
    #[must_use]
    pub fn open(&mut self) -> VecDeque<T> {
        debug_assert!(!self.open, "ordering barrier opened twice");
        self.open = true;
        std::mem::take(&mut self.pending)
    }

    /// Returns `true` once [`open`](Self::open) has been called.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of items waiting for the barrier to open.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<T> Default for OrderingBarrier<T> {
    fn default() -> Self {
        Self::new()
    }
}
