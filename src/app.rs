use crate::domain::{catalog, Phase, PhaseTimer, Plan, PlanChangePolicy, SessionStats, TimerUpdate};
use crate::notifications;
use crate::persistence::Settings;
use crate::ticker::Ticker;
use anyhow::Result;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info};

/// Main application state: the selected plan, the phase timer and what the screen shows
pub struct AppState {
    /// Plan whose durations the timer is counting with
    pub active_plan: &'static Plan,
    /// Plan last chosen in the list (differs from active_plan while a change is deferred)
    pub selected_plan: &'static Plan,
    /// Highlighted row in the plan list
    pub cursor: usize,
    pub timer: PhaseTimer,
    pub stats: SessionStats,
    pub plan_change: PlanChangePolicy,
    pub notifications: bool,
    pub use_emoji: bool,
    /// One-line feedback shown under the timer
    pub status_message: Option<String>,
    ticker: Ticker,
    snapshot: Rc<Cell<TimerUpdate>>,
}

impl AppState {
    pub fn new(plan: &'static Plan, settings: &Settings) -> Result<Self> {
        let mut timer = PhaseTimer::new(plan.durations()?);

        // Mirror every timer transition into the display snapshot
        let snapshot = Rc::new(Cell::new(timer.snapshot()));
        let sink = Rc::clone(&snapshot);
        timer.subscribe(move |update| sink.set(update));

        let cursor = catalog().iter().position(|p| p.id == plan.id).unwrap_or(0);

        Ok(Self {
            active_plan: plan,
            selected_plan: plan,
            cursor,
            timer,
            stats: settings.stats(),
            plan_change: settings.plan_change,
            notifications: settings.notifications,
            use_emoji: settings.use_emoji,
            status_message: None,
            ticker: Ticker::default(),
            snapshot,
        })
    }

    /// Last state reported by the timer
    pub fn snapshot(&self) -> TimerUpdate {
        self.snapshot.get()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// True while a plan change waits for the next reset
    pub fn has_pending_plan(&self) -> bool {
        self.active_plan.id != self.selected_plan.id
    }

    /// Start or pause depending on the current state
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.timer.start() {
            info!(plan = self.active_plan.id, phase = self.timer.phase().to_tag(), "timer started");
            self.status_message = None;
        }
        self.sync_ticker(now);
    }

    pub fn pause(&mut self, now: Instant) {
        if self.timer.pause() {
            info!(remaining = self.timer.remaining_secs(), "timer paused");
        }
        self.sync_ticker(now);
    }

    /// Back to the start of a fast, picking up any deferred plan change
    pub fn reset(&mut self, now: Instant) {
        if let Some(durations) = self.timer.pending_durations() {
            info!(
                from = self.active_plan.id,
                to = self.selected_plan.id,
                fasting_secs = durations.fasting_secs(),
                eating_secs = durations.eating_secs(),
                "deferred plan applied"
            );
        }
        self.timer.reset();
        self.active_plan = self.selected_plan;
        self.status_message = None;
        info!(plan = self.active_plan.id, "timer reset");
        self.sync_ticker(now);
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < catalog().len() {
            self.cursor += 1;
        }
    }

    /// Select the plan under the cursor.
    ///
    /// With nothing in progress the timer is reset straight away so the new
    /// plan's fast is shown. Otherwise the configured policy decides.
    pub fn select_plan_at_cursor(&mut self, now: Instant) -> Result<()> {
        let Some(plan) = catalog().get(self.cursor) else {
            return Ok(());
        };
        if plan.id == self.selected_plan.id {
            return Ok(());
        }

        let durations = plan.durations()?;
        self.selected_plan = plan;

        if self.timer.is_pristine() {
            self.timer.reconfigure(durations, PlanChangePolicy::OnReset);
            self.reset(now);
            return Ok(());
        }

        self.timer.reconfigure(durations, self.plan_change);
        match self.plan_change {
            PlanChangePolicy::OnReset => {
                self.status_message = if self.has_pending_plan() {
                    Some(format!("{} will apply on next reset", plan.name))
                } else {
                    None
                };
                debug!(plan = plan.id, "plan change deferred until reset");
            }
            PlanChangePolicy::Rescale => {
                self.active_plan = plan;
                self.status_message = Some(format!("Switched to {}", plan.name));
                info!(plan = plan.id, remaining = self.timer.remaining_secs(), "plan rescaled");
            }
        }
        self.sync_ticker(now);
        Ok(())
    }

    /// Deliver every tick that has come due by `now`
    pub fn tick(&mut self, now: Instant) {
        let due = self.ticker.due(now);
        for _ in 0..due {
            if let Some(phase) = self.timer.tick() {
                self.on_phase_switch(phase);
            }
        }
    }

    fn on_phase_switch(&mut self, phase: Phase) {
        info!(
            plan = self.active_plan.id,
            phase = phase.to_tag(),
            remaining = self.timer.remaining_secs(),
            "phase switched"
        );
        self.status_message = Some(notifications::phase_message(phase, self.active_plan.name));
        if self.notifications {
            notifications::notify_phase_change(phase, self.active_plan.name);
        }
    }

    /// Arm the scheduler while the timer runs, cancel it otherwise
    fn sync_ticker(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
        debug!(armed = self.ticker.is_armed(), "tick schedule synced");
    }
}
