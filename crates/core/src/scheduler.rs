//! Tick scheduler - the single repeating timer that drives the simulation.
//!
//! Time is injected as monotonic milliseconds so the scheduler never sleeps
//! and can be driven deterministically from tests. The runner asks
//! [`TickScheduler::time_until_due`] how long it may block on input, then calls
//! [`TickScheduler::begin`] to obtain a permit for at most one tick.
//!
//! Invariants:
//! - At most one live timer handle. [`TickScheduler::start`] always cancels
//!   the previous handle before creating a new one.
//! - The interval of a live handle never changes in place; a new interval
//!   means a new handle.
//! - At most one tick in flight. A permit must be handed back through
//!   [`TickScheduler::complete`] before the next one is issued.

use tracing::debug;

/// Identity of one timer handle. A restart always yields a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct TimerHandle {
    id: TimerId,
    interval_ms: u32,
    next_due_ms: u64,
}

/// Proof that a tick is in progress.
#[derive(Debug)]
#[must_use = "a tick permit must be returned through TickScheduler::complete"]
pub struct TickPermit {
    fired_at_ms: u64,
}

impl TickPermit {
    pub fn fired_at_ms(&self) -> u64 {
        self.fired_at_ms
    }
}

#[derive(Debug)]
pub struct TickScheduler {
    handle: Option<TimerHandle>,
    last_interval_ms: u32,
    last_fired_ms: u64,
    next_id: u64,
    in_tick: bool,
}

impl TickScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            handle: None,
            last_interval_ms: interval_ms,
            last_fired_ms: 0,
            next_id: 0,
            in_tick: false,
        }
    }

    /// Start a repeating timer, replacing any live one.
    pub fn start(&mut self, now_ms: u64, interval_ms: u32) -> TimerId {
        self.cancel();

        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.handle = Some(TimerHandle {
            id,
            interval_ms,
            next_due_ms: now_ms + interval_ms as u64,
        });
        self.last_interval_ms = interval_ms;
        self.last_fired_ms = now_ms;
        debug!(timer = id.0, interval_ms, "tick timer started");
        id
    }

    /// Start again with the last known interval (used on resume).
    pub fn resume(&mut self, now_ms: u64) -> TimerId {
        self.start(now_ms, self.last_interval_ms)
    }

    /// Replace the live timer with one running at `interval_ms`, anchored at
    /// the last tick so the cadence does not hiccup.
    ///
    /// Returns `None` (and only records the interval for the next start) when
    /// no timer is live.
    pub fn restart_with_interval(&mut self, interval_ms: u32) -> Option<TimerId> {
        if self.handle.is_none() {
            self.last_interval_ms = interval_ms;
            return None;
        }
        let anchor = self.last_fired_ms;
        Some(self.start(anchor, interval_ms))
    }

    /// Cancel the live timer, if any.
    pub fn cancel(&mut self) -> Option<TimerId> {
        let handle = self.handle.take()?;
        debug!(timer = handle.id.0, "tick timer cancelled");
        Some(handle.id)
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of live timer handles: always 0 or 1.
    pub fn live_handles(&self) -> usize {
        usize::from(self.handle.is_some())
    }

    /// How many handles have ever been created.
    pub fn handles_created(&self) -> u64 {
        self.next_id
    }

    pub fn timer_id(&self) -> Option<TimerId> {
        self.handle.map(|h| h.id)
    }

    /// Interval of the live timer, or the one a resume would use.
    pub fn interval_ms(&self) -> u32 {
        self.handle
            .map(|h| h.interval_ms)
            .unwrap_or(self.last_interval_ms)
    }

    pub fn in_tick(&self) -> bool {
        self.in_tick
    }

    /// Milliseconds until the next tick is due (0 if overdue), or `None`
    /// when no timer is live.
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.handle
            .map(|h| h.next_due_ms.saturating_sub(now_ms))
    }

    /// Claim the next tick if it is due.
    ///
    /// Fires at most once per call. A runner that fell behind does not get a
    /// burst of catch-up ticks: the next deadline moves to `now + interval`.
    pub fn begin(&mut self, now_ms: u64) -> Option<TickPermit> {
        if self.in_tick {
            return None;
        }
        let handle = self.handle.as_mut()?;
        if now_ms < handle.next_due_ms {
            return None;
        }

        let interval = handle.interval_ms as u64;
        let mut next = handle.next_due_ms + interval;
        if next <= now_ms {
            next = now_ms + interval;
        }
        handle.next_due_ms = next;

        self.in_tick = true;
        self.last_fired_ms = now_ms;
        Some(TickPermit { fired_at_ms: now_ms })
    }

    /// Hand back a permit once the tick has finished.
    ///
    /// The tick may have cancelled or replaced the timer; that is fine.
    pub fn complete(&mut self, permit: TickPermit) {
        debug_assert!(self.in_tick);
        let _ = permit;
        self.in_tick = false;
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
