//! Single-threaded one-shot timers.
//!
//! Nothing here sleeps or spawns. A driver asks the queue how long until the
//! next deadline, waits however it likes (the terminal loop blocks on
//! keyboard polling), then pops due timers and hands them to the controller.

use std::time::{Duration, Instant};

/// Handle of one scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// What the playback controller needs from its event loop.
pub trait Scheduler {
    fn now_ms(&self) -> u64;

    /// Arms a one-shot timer that becomes due `delay_ms` from now.
    fn schedule(&mut self, delay_ms: u64) -> TimerId;

    /// Disarms a timer. Returns false if it already fired or never existed.
    fn cancel(&mut self, id: TimerId) -> bool;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Virtual time that only moves when told to.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    deadline_ms: u64,
}

pub struct TimerQueue<C: Clock> {
    clock: C,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.earliest().map(|timer| timer.deadline_ms)
    }

    /// Time left before the earliest timer is due, zero if it already is.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline().map(|deadline| {
            Duration::from_millis(deadline.saturating_sub(self.clock.now_ms()))
        })
    }

    /// Removes and returns the earliest timer whose deadline has passed.
    pub fn pop_due(&mut self) -> Option<TimerId> {
        let now = self.clock.now_ms();
        let timer = self.earliest().filter(|timer| timer.deadline_ms <= now)?;
        self.pending.retain(|pending| pending.id != timer.id);
        Some(timer.id)
    }

    fn earliest(&self) -> Option<PendingTimer> {
        self.pending
            .iter()
            .copied()
            .min_by_key(|timer| (timer.deadline_ms, timer.id))
    }
}

impl TimerQueue<ManualClock> {
    /// Jumps virtual time to the earliest deadline and fires that timer.
    pub fn advance_to_next(&mut self) -> Option<TimerId> {
        let deadline = self.next_deadline()?;
        self.clock.set(deadline);
        self.pop_due()
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    fn schedule(&mut self, delay_ms: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(PendingTimer {
            id,
            deadline_ms: self.clock.now_ms() + delay_ms,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != id);
        self.pending.len() != before
    }
}
