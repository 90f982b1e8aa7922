//! One-shot delayed callbacks on a virtual clock.
//!
//! The clock only moves when the owner advances it, so the same code runs
//! against real time (advance by the wall-clock delta) or in tests (advance by
//! exactly the amount under test). Callbacks run in due-time order; callbacks
//! due at the same instant run in scheduling order.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// A scheduled callback that receives the owner when it fires.
pub type Callback<C> = Box<dyn FnOnce(&mut C)>;

/// Ordering key of a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    due: Duration,
    seq: u64,
}

impl TimerId {
    /// Virtual time at which the callback fires.
    #[must_use]
    pub const fn due(self) -> Duration {
        self.due
    }
}

/// Queue of pending delayed callbacks.
pub struct Timers<C> {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<TimerId, Callback<C>>,
}

impl<C> fmt::Debug for Timers<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timers")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<C> Default for Timers<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Timers<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of callbacks that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// When the next callback is due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|id| id.due)
    }

    /// Run `callback` once, `delay` after now.
    pub fn schedule(&mut self, delay: Duration, callback: Callback<C>) -> TimerId {
        let id = TimerId {
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(id, callback);
        id
    }

    /// Take the earliest callback due at or before `until`, moving the clock
    /// to its due time.
    ///
    /// The caller runs the callback; anything it schedules is considered by
    /// the next call.
    pub fn pop_due(&mut self, until: Duration) -> Option<Callback<C>> {
        let entry = self.pending.first_entry()?;
        if entry.key().due > until {
            return None;
        }
        let due = entry.key().due;
        let callback = entry.remove();
        self.now = self.now.max(due);
        Some(callback)
    }

    /// Move the clock forward to `until` without running anything.
    ///
    /// Never moves backward.
    pub fn settle_at(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

/// Lifecycle of a simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Settled,
}

/// A request/response round trip that is only ever simulated by a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTask {
    started_at: Duration,
    delay: Duration,
    state: TaskState,
}

impl SimulatedTask {
    /// Start a task at `now` that settles after `delay`.
    #[must_use]
    pub const fn start(now: Duration, delay: Duration) -> Self {
        Self {
            started_at: now,
            delay,
            state: TaskState::Pending,
        }
    }

    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == TaskState::Pending
    }

    /// Virtual time at which the task settles.
    #[must_use]
    pub fn settles_at(&self) -> Duration {
        self.started_at.saturating_add(self.delay)
    }

    pub fn settle(&mut self) {
        self.state = TaskState::Settled;
    }
}
