//! Timer coordination - turns wall-clock time into tick and time-up actions
//!
//! The coordinator is cooperative: the caller feeds it elapsed milliseconds
//! from its event loop and it delivers whole ticks to a [`TimerTarget`].
//!
//! A running schedule is a [`RepeatingTimer`] value owned by the coordinator.
//! It is acquired when the target starts running and dropped (cancelled) as
//! soon as the target stops, so no tick or expiry from one game can leak into
//! the next. Before every delivery the coordinator re-reads the target, which
//! makes a batch of due ticks stop at the first tick after which the game is
//! no longer running.

use tracing::trace;

/// The state a timer drives.
///
/// Implementors answer from their latest state at call time.
pub trait TimerTarget {
    /// True while ticks should be delivered (the game is playing).
    fn timer_should_run(&self) -> bool;
    /// Seconds already counted by the target.
    fn timer_elapsed_seconds(&self) -> u32;
    /// Expiry threshold in seconds; `None` disables expiry.
    fn timer_limit_seconds(&self) -> Option<u16>;
    /// One interval has elapsed.
    fn on_tick(&mut self);
    /// The threshold has been reached.
    fn on_time_up(&mut self);
}

/// One running schedule. Dropping it cancels the schedule.
#[derive(Debug)]
pub struct RepeatingTimer {
    interval_ms: u32,
    carry_ms: u32,
    expiry_fired: bool,
}

impl RepeatingTimer {
    fn start(interval_ms: u32) -> Self {
        trace!(interval_ms, "timer acquired");
        Self {
            interval_ms,
            carry_ms: 0,
            expiry_fired: false,
        }
    }

    /// Add elapsed time and return how many whole intervals are now due.
    fn take_due(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.carry_ms as u64 + elapsed_ms as u64;
        let interval = self.interval_ms as u64;
        self.carry_ms = (total % interval) as u32;
        (total / interval) as u32
    }

    /// Milliseconds accumulated toward the next interval.
    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }

    pub fn expiry_fired(&self) -> bool {
        self.expiry_fired
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        trace!(carry_ms = self.carry_ms, "timer cancelled");
    }
}

/// Owns at most one [`RepeatingTimer`] and drives a [`TimerTarget`] with it.
#[derive(Debug)]
pub struct TimerCoordinator {
    interval_ms: u32,
    running: Option<RepeatingTimer>,
}

impl TimerCoordinator {
    /// Create a stopped coordinator; an interval of 0 is treated as 1 ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            running: None,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// The active schedule, if any.
    pub fn timer(&self) -> Option<&RepeatingTimer> {
        self.running.as_ref()
    }

    /// Acquire a fresh schedule when `should_run` turns true, cancel it when it turns false.
    pub fn sync(&mut self, should_run: bool) {
        match (should_run, self.running.is_some()) {
            (true, false) => self.running = Some(RepeatingTimer::start(self.interval_ms)),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Drop the active schedule.
    pub fn cancel(&mut self) {
        self.running = None;
    }

    /// Feed elapsed wall-clock time; returns the number of ticks delivered.
    pub fn advance<T: TimerTarget + ?Sized>(&mut self, elapsed_ms: u32, target: &mut T) -> u32 {
        if !target.timer_should_run() {
            self.cancel();
            return 0;
        }

        let due = match self.running.as_mut() {
            Some(timer) => timer.take_due(elapsed_ms),
            None => return 0,
        };

        let mut delivered = 0;
        for _ in 0..due {
            if !target.timer_should_run() {
                self.cancel();
                break;
            }
            target.on_tick();
            delivered += 1;

            self.observe(target);
            if self.running.is_none() {
                break;
            }
        }
        delivered
    }

    /// Fire expiry if the target has reached its limit.
    ///
    /// Fires at most once per schedule, and only while running.
    pub fn observe<T: TimerTarget + ?Sized>(&mut self, target: &mut T) {
        if !target.timer_should_run() {
            self.cancel();
            return;
        }
        let Some(limit) = target.timer_limit_seconds() else {
            return;
        };
        let Some(timer) = self.running.as_mut() else {
            return;
        };
        if timer.expiry_fired || target.timer_elapsed_seconds() < limit as u32 {
            return;
        }

        timer.expiry_fired = true;
        target.on_time_up();

        if !target.timer_should_run() {
            self.cancel();
        }
    }
}

/// Format seconds for display: `"45s"` under a minute, otherwise `"1:30"`.
pub fn format_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins == 0 {
        format!("{}s", secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
