//! Tick scheduler infrastructure - wall-clock implementation of SchedulerPort

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::application::ports::{SchedulerPort, TickHandle};

/// Scheduler driven by `Instant::now()`; the host loop polls it
pub struct InstantScheduler {
    next_handle: u64,
    deadlines: HashMap<u64, Instant>,
}

impl InstantScheduler {
    /// Create a new scheduler
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            deadlines: HashMap::new(),
        }
    }

    /// Allocate a new handle
    fn next_handle(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Time until the earliest pending tick, zero if one is already due
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = Instant::now();
        self.deadlines
            .values()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn pending_count(&self) -> usize {
        self.deadlines.len()
    }
}

impl Default for InstantScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulerPort for InstantScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        let handle = self.next_handle();
        self.deadlines.insert(handle.0, Instant::now() + delay);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.deadlines.remove(&handle.0);
    }

    fn cancel_all(&mut self) {
        self.deadlines.clear();
    }

    fn is_pending(&self, handle: TickHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    fn take_due(&mut self) -> Vec<TickHandle> {
        let now = Instant::now();

        let mut due: Vec<(u64, Instant)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*id, *deadline))
            .collect();

        for (id, _) in &due {
            self.deadlines.remove(id);
        }

        due.sort_by_key(|(id, deadline)| (*deadline, *id));
        due.into_iter().map(|(id, _)| TickHandle(id)).collect()
    }
}
