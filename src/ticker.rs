use std::time::{Duration, Instant};

/// How often the screen is redrawn when no key is pressed, in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 250;

/// Countdown resolution: one tick per second
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Get the redraw interval
pub fn refresh_duration() -> Duration {
    Duration::from_millis(DEFAULT_REFRESH_MS)
}

/// Schedule of one-second ticks driven by the event loop.
///
/// While armed it remembers when the next tick is due. Disarming drops that
/// deadline, so a tick scheduled before a pause or reset is never delivered.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the first tick one period from `now`. Keeps an existing schedule.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Cancel the pending tick
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks due at `now`; advances the schedule past them
    pub fn due(&mut self, now: Instant) -> u64 {
        let Some(deadline) = self.next_due else {
            return 0;
        };
        if now < deadline {
            return 0;
        }

        let overdue = now.duration_since(deadline).as_nanos() / self.period.as_nanos();
        let count = overdue as u64 + 1;
        self.next_due = Some(deadline + self.period * count as u32);
        count
    }

    /// How long the event loop may wait before the next tick is due
    pub fn wait_time(&self, now: Instant, max: Duration) -> Duration {
        match self.next_due {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
