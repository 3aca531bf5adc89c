//! SchedulerPort - interface for cancellable one-shot timers
//!
//! Playback ticks are scheduled one at a time: the next tick is armed only
//! after the previous one has been applied, so two ticks are never pending
//! for the same owner. Cancelling a handle guarantees it is never reported as
//! due afterwards.

use std::time::Duration;

/// Handle to a scheduled tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Port interface for timer scheduling
pub trait SchedulerPort: Send {
    /// Arm a one-shot tick that becomes due after `delay`
    fn schedule(&mut self, delay: Duration) -> TickHandle;

    /// Cancel a pending tick; unknown handles are ignored
    fn cancel(&mut self, handle: TickHandle);

    /// Cancel every pending tick
    fn cancel_all(&mut self);

    /// Check if a tick is still pending
    fn is_pending(&self, handle: TickHandle) -> bool;

    /// Remove and return the ticks that are due, earliest first
    fn take_due(&mut self) -> Vec<TickHandle>;
}

/// A virtual-clock scheduler for tests and headless stepping.
///
/// Time only moves when [`ManualScheduler::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_handle: u64,
    now: Duration,
    pending: Vec<(TickHandle, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the virtual clock forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Current virtual time since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending ticks
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl SchedulerPort for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.next_handle += 1;
        let handle = TickHandle(self.next_handle);
        self.pending.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn is_pending(&self, handle: TickHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }

    fn take_due(&mut self) -> Vec<TickHandle> {
        let now = self.now;
        let mut due: Vec<(TickHandle, Duration)> = self
            .pending
            .iter()
            .copied()
            .filter(|(_, at)| *at <= now)
            .collect();
        self.pending.retain(|(_, at)| *at > now);

        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(h, _)| h).collect()
    }
}
