// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancelable delayed tasks.
//!
//! A [`Callout`](crate::callout::Callout) never keeps time itself. It asks a
//! [`Scheduler`] to deliver a [`Task`] after a delay and cancels that request
//! when a conflicting transition happens first. When a task elapses, the host
//! passes its handle back to [`Callout::fire`](crate::callout::Callout::fire).
//!
//! Cancellation is cooperative. A task whose handle was canceled after it
//! already elapsed may still be delivered; the callout ignores handles it no
//! longer owns.
//!
//! [`ManualScheduler`] is a deterministic virtual-clock implementation for
//! tests, demos, and hosts that drive time explicitly.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

/// Kind of delayed transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Task {
    /// Show the callout.
    Show,
    /// Hide the callout.
    Hide,
}

/// Timer service for delayed show/hide.
pub trait Scheduler {
    /// Identifies one scheduled task. Handles are never reused by a scheduler.
    type Handle: Copy + Eq + Debug;

    /// Deliver `task` after `delay`.
    fn schedule(&mut self, delay: Duration, task: Task) -> Self::Handle;

    /// Cancel a pending task. Returns `false` if it already elapsed or is unknown.
    fn cancel(&mut self, handle: Self::Handle) -> bool;
}

/// Handle issued by [`ManualScheduler`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Pending {
    id: TaskId,
    due: Duration,
    task: Task,
}

/// A scheduler driven by an explicit virtual clock.
///
/// ```
/// use core::time::Duration;
/// use understory_callout::schedule::{ManualScheduler, Scheduler, Task};
///
/// let mut s = ManualScheduler::new();
/// let show = s.schedule(Duration::from_millis(200), Task::Show);
/// assert!(s.advance(Duration::from_millis(150)).is_empty());
/// assert_eq!(s.advance(Duration::from_millis(50)), vec![(show, Task::Show)]);
/// assert!(!s.cancel(show));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks that have neither elapsed nor been canceled.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is still pending.
    pub fn is_pending(&self, handle: TaskId) -> bool {
        self.pending.iter().any(|p| p.id == handle)
    }

    /// Move the clock forward and return the tasks that elapsed, earliest
    /// deadline first (ties in scheduling order).
    pub fn advance(&mut self, by: Duration) -> Vec<(TaskId, Task)> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| (p.id, p.task)).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TaskId;

    fn schedule(&mut self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    fn cancel(&mut self, handle: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle);
        self.pending.len() != before
    }
}
