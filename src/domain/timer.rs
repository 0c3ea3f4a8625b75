use super::enums::{Phase, PlanChangePolicy};
use super::plan::PhaseDurations;
use chrono::{DateTime, Local};
use std::fmt;

/// State pushed to observers after every transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerUpdate {
    pub remaining_secs: u64,
    pub running: bool,
    pub phase: Phase,
}

/// Callback invoked synchronously with the timer's latest state
pub type TimerObserver = Box<dyn FnMut(TimerUpdate)>;

/// Countdown that alternates between the fasting and eating phases.
///
/// The timer never reads the clock to advance: the caller delivers one
/// `tick()` per elapsed second while it is running. `started_at` is only an
/// anchor telling whether a countdown is active (and since when).
pub struct PhaseTimer {
    durations: PhaseDurations,
    /// Durations waiting for the next reset
    pending: Option<PhaseDurations>,
    phase: Phase,
    remaining_secs: u64,
    started_at: Option<DateTime<Local>>,
    observers: Vec<TimerObserver>,
}

impl PhaseTimer {
    /// Create a paused timer at the start of the fasting phase
    pub fn new(durations: PhaseDurations) -> Self {
        Self {
            durations,
            pending: None,
            phase: Phase::Fasting,
            remaining_secs: durations.fasting_secs(),
            started_at: None,
            observers: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// When the current run was started (None while paused)
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Durations the countdown is currently using
    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    /// Durations queued for the next reset, if a plan change was deferred
    pub fn pending_durations(&self) -> Option<PhaseDurations> {
        self.pending
    }

    /// Full length of the current phase
    pub fn phase_duration(&self) -> u64 {
        self.durations.of(self.phase)
    }

    /// Percentage (0..=100) of the current phase already elapsed
    pub fn progress(&self) -> f64 {
        let total = self.phase_duration();
        let elapsed = total.saturating_sub(self.remaining_secs);
        elapsed as f64 / total as f64 * 100.0
    }

    /// True when nothing is in progress: paused at the very start of a fast
    pub fn is_pristine(&self) -> bool {
        !self.is_running()
            && self.phase == Phase::Fasting
            && self.remaining_secs == self.durations.fasting_secs()
    }

    pub fn snapshot(&self) -> TimerUpdate {
        TimerUpdate {
            remaining_secs: self.remaining_secs,
            running: self.is_running(),
            phase: self.phase,
        }
    }

    /// Register an observer. It immediately receives the current state.
    pub fn subscribe<F>(&mut self, mut observer: F)
    where
        F: FnMut(TimerUpdate) + 'static,
    {
        observer(self.snapshot());
        self.observers.push(Box::new(observer));
    }

    /// Start counting down. Returns false if the timer was already running.
    pub fn start(&mut self) -> bool {
        let changed = !self.is_running();
        if changed {
            self.started_at = Some(Local::now());
        }
        self.notify();
        changed
    }

    /// Stop counting down, keeping the remaining time. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        let changed = self.started_at.take().is_some();
        self.notify();
        changed
    }

    /// Back to a paused fast at full length, applying any deferred plan change
    pub fn reset(&mut self) {
        if let Some(durations) = self.pending.take() {
            self.durations = durations;
        }
        self.started_at = None;
        self.phase = Phase::Fasting;
        self.remaining_secs = self.durations.fasting_secs();
        self.notify();
    }

    /// Advance one second. Returns the new phase when the countdown switched phases.
    ///
    /// The second that would bring the countdown to zero is the switch itself,
    /// so a phase of N seconds lasts exactly N ticks.
    pub fn tick(&mut self) -> Option<Phase> {
        if !self.is_running() {
            return None;
        }

        let switched = if self.remaining_secs <= 1 {
            self.phase = self.phase.next();
            self.remaining_secs = self.durations.of(self.phase);
            Some(self.phase)
        } else {
            self.remaining_secs -= 1;
            None
        };

        self.notify();
        switched
    }

    /// Switch to new phase lengths (a different plan)
    pub fn reconfigure(&mut self, durations: PhaseDurations, policy: PlanChangePolicy) {
        match policy {
            PlanChangePolicy::OnReset => {
                self.pending = if durations == self.durations {
                    None
                } else {
                    Some(durations)
                };
            }
            PlanChangePolicy::Rescale => {
                let old_total = self.phase_duration();
                let new_total = durations.of(self.phase);
                let scaled = u128::from(self.remaining_secs) * u128::from(new_total)
                    / u128::from(old_total);
                self.remaining_secs = (scaled as u64).clamp(1, new_total);
                self.durations = durations;
                self.pending = None;
            }
        }
        self.notify();
    }

    fn notify(&mut self) {
        let update = self.snapshot();
        for observer in self.observers.iter_mut() {
            observer(update);
        }
    }
}

impl fmt::Debug for PhaseTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseTimer")
            .field("durations", &self.durations)
            .field("pending", &self.pending)
            .field("phase", &self.phase)
            .field("remaining_secs", &self.remaining_secs)
            .field("started_at", &self.started_at)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn plan_16_8() -> PhaseDurations {
        PhaseDurations::from_hours(16, 8).unwrap()
    }

    fn recording_timer(durations: PhaseDurations) -> (PhaseTimer, Rc<RefCell<Vec<TimerUpdate>>>) {
        let mut timer = PhaseTimer::new(durations);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        timer.subscribe(move |update| sink.borrow_mut().push(update));
        (timer, log)
    }

    #[test]
    fn test_initial_state() {
        let timer = PhaseTimer::new(plan_16_8());
        assert_eq!(timer.phase(), Phase::Fasting);
        assert_eq!(timer.remaining_secs(), 57_600);
        assert!(!timer.is_running());
        assert_eq!(timer.progress(), 0.0);
        assert!(timer.is_pristine());
    }

    #[test]
    fn test_start_does_not_reset_progress() {
        let mut timer = PhaseTimer::new(plan_16_8());
        assert!(timer.start());
        for _ in 0..30 {
            timer.tick();
        }
        let anchor = timer.started_at();
        assert!(!timer.start());
        assert_eq!(timer.remaining_secs(), 57_600 - 30);
        assert_eq!(timer.started_at(), anchor);
    }

    #[test]
    fn test_pause_then_start_has_no_drift() {
        let mut timer = PhaseTimer::new(plan_16_8());
        timer.start();
        for _ in 0..42 {
            timer.tick();
        }
        let before = (timer.remaining_secs(), timer.phase());
        assert!(timer.pause());
        assert!(timer.start());
        assert_eq!((timer.remaining_secs(), timer.phase()), before);
    }

    #[test]
    fn test_pause_when_paused_is_noop() {
        let mut timer = PhaseTimer::new(plan_16_8());
        assert!(!timer.pause());
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 57_600);
    }

    #[test]
    fn test_ticks_while_paused_do_nothing() {
        let (mut timer, log) = recording_timer(plan_16_8());
        let delivered = log.borrow().len();
        for _ in 0..100 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.remaining_secs(), 57_600);
        assert_eq!(log.borrow().len(), delivered);
    }

    #[test]
    fn test_phase_switch_after_exact_fasting_duration() {
        let mut timer = PhaseTimer::new(plan_16_8());
        timer.start();

        let mut switches = Vec::new();
        for _ in 0..57_600 {
            if let Some(phase) = timer.tick() {
                switches.push(phase);
            }
        }

        assert_eq!(switches, vec![Phase::Eating]);
        assert_eq!(timer.phase(), Phase::Eating);
        assert_eq!(timer.remaining_secs(), 28_800);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_full_cycle_returns_to_fasting() {
        let durations = PhaseDurations::from_secs(5, 3).unwrap();
        let mut timer = PhaseTimer::new(durations);
        timer.start();

        let phases: Vec<(Phase, u64)> = (0..8)
            .map(|_| {
                timer.tick();
                (timer.phase(), timer.remaining_secs())
            })
            .collect();

        assert_eq!(
            phases,
            vec![
                (Phase::Fasting, 4),
                (Phase::Fasting, 3),
                (Phase::Fasting, 2),
                (Phase::Fasting, 1),
                (Phase::Eating, 3),
                (Phase::Eating, 2),
                (Phase::Eating, 1),
                (Phase::Fasting, 5),
            ]
        );
    }

    #[test]
    fn test_pause_resume_scenario_counts_exactly() {
        let mut timer = PhaseTimer::new(plan_16_8());
        let initial = timer.remaining_secs();

        timer.start();
        for _ in 0..10 {
            timer.tick();
        }
        timer.pause();
        for _ in 0..20 {
            timer.tick();
        }
        timer.start();
        for _ in 0..5 {
            timer.tick();
        }

        assert_eq!(initial - timer.remaining_secs(), 15);
    }

    #[test]
    fn test_reset_from_any_state() {
        let durations = PhaseDurations::from_secs(4, 2).unwrap();
        let mut timer = PhaseTimer::new(durations);
        timer.start();
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(timer.phase(), Phase::Eating);

        timer.reset();
        assert_eq!(
            timer.snapshot(),
            TimerUpdate {
                remaining_secs: 4,
                running: false,
                phase: Phase::Fasting,
            }
        );
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_progress_is_fraction_of_current_phase() {
        let durations = PhaseDurations::from_secs(200, 100).unwrap();
        let mut timer = PhaseTimer::new(durations);
        timer.start();
        for _ in 0..50 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 25.0);

        for _ in 0..150 {
            timer.tick();
        }
        assert_eq!(timer.phase(), Phase::Eating);
        for _ in 0..25 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 25.0);
    }

    #[test]
    fn test_observer_sees_every_transition() {
        let (mut timer, log) = recording_timer(PhaseDurations::from_secs(2, 1).unwrap());

        timer.start();
        timer.tick();
        timer.tick();
        timer.pause();
        timer.reset();

        let running: Vec<bool> = log.borrow().iter().map(|u| u.running).collect();
        assert_eq!(running, vec![false, true, true, true, false, false]);

        let last = *log.borrow().last().unwrap();
        assert_eq!(last, timer.snapshot());
        assert_eq!(log.borrow()[3].phase, Phase::Eating);
    }

    #[test]
    fn test_deferred_plan_change_applies_on_reset() {
        let mut timer = PhaseTimer::new(plan_16_8());
        timer.start();
        timer.tick();

        let next = PhaseDurations::from_hours(20, 4).unwrap();
        timer.reconfigure(next, PlanChangePolicy::OnReset);
        assert_eq!(timer.remaining_secs(), 57_599);
        assert_eq!(timer.durations(), plan_16_8());
        assert_eq!(timer.pending_durations(), Some(next));

        timer.reset();
        assert_eq!(timer.remaining_secs(), 72_000);
        assert_eq!(timer.durations(), next);
        assert_eq!(timer.pending_durations(), None);
    }

    #[test]
    fn test_reselecting_active_plan_clears_pending() {
        let mut timer = PhaseTimer::new(plan_16_8());
        timer.reconfigure(PhaseDurations::from_hours(18, 6).unwrap(), PlanChangePolicy::OnReset);
        timer.reconfigure(plan_16_8(), PlanChangePolicy::OnReset);
        assert_eq!(timer.pending_durations(), None);
    }

    #[test]
    fn test_rescale_keeps_progress_fraction() {
        let mut timer = PhaseTimer::new(PhaseDurations::from_secs(100, 50).unwrap());
        timer.start();
        for _ in 0..40 {
            timer.tick();
        }

        timer.reconfigure(PhaseDurations::from_secs(200, 50).unwrap(), PlanChangePolicy::Rescale);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_secs(), 120);
        assert_eq!(timer.progress(), 40.0);
    }

    #[test]
    fn test_rescale_never_hits_zero() {
        let mut timer = PhaseTimer::new(PhaseDurations::from_secs(100, 50).unwrap());
        timer.start();
        for _ in 0..99 {
            timer.tick();
        }
        assert_eq!(timer.remaining_secs(), 1);

        timer.reconfigure(PhaseDurations::from_secs(10, 50).unwrap(), PlanChangePolicy::Rescale);
        assert_eq!(timer.remaining_secs(), 1);
    }
}
