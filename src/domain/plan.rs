use super::enums::{Difficulty, Phase};
use thiserror::Error;

pub const SECS_PER_HOUR: u64 = 3600;

/// Errors raised when resolving or building a plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("unknown plan '{0}' (run `fastclock plans` to list them)")]
    UnknownPlan(String),
    #[error("{0} phase must last at least one hour")]
    EmptyPhase(&'static str),
}

/// A named fasting/eating schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub fasting_hours: u32,
    pub eating_hours: u32,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

impl Plan {
    /// Phase lengths in seconds for the timer
    pub fn durations(&self) -> Result<PhaseDurations, PlanError> {
        PhaseDurations::from_hours(self.fasting_hours, self.eating_hours)
    }
}

static PLANS: [Plan; 3] = [
    Plan {
        id: "16-8",
        name: "16:8",
        fasting_hours: 16,
        eating_hours: 8,
        description: "Fast for 16 hours, eat in 8-hour window",
        difficulty: Difficulty::Beginner,
    },
    Plan {
        id: "18-6",
        name: "18:6",
        fasting_hours: 18,
        eating_hours: 6,
        description: "Fast for 18 hours, eat in 6-hour window",
        difficulty: Difficulty::Intermediate,
    },
    Plan {
        id: "20-4",
        name: "20:4",
        fasting_hours: 20,
        eating_hours: 4,
        description: "Fast for 20 hours, eat in 4-hour window",
        difficulty: Difficulty::Advanced,
    },
];

/// All built-in plans, in display order
pub fn catalog() -> &'static [Plan] {
    &PLANS
}

/// The plan selected when nothing else is configured
pub fn default_plan() -> &'static Plan {
    &PLANS[0]
}

/// Look up a plan by id ("16-8") or display name ("16:8")
pub fn find_plan(key: &str) -> Result<&'static Plan, PlanError> {
    let key = key.trim();
    catalog()
        .iter()
        .find(|plan| plan.id.eq_ignore_ascii_case(key) || plan.name == key)
        .ok_or_else(|| PlanError::UnknownPlan(key.to_string()))
}

/// Fasting and eating phase lengths, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    fasting_secs: u64,
    eating_secs: u64,
}

impl PhaseDurations {
    pub fn from_hours(fasting_hours: u32, eating_hours: u32) -> Result<Self, PlanError> {
        Self::from_secs(
            u64::from(fasting_hours) * SECS_PER_HOUR,
            u64::from(eating_hours) * SECS_PER_HOUR,
        )
    }

    pub fn from_secs(fasting_secs: u64, eating_secs: u64) -> Result<Self, PlanError> {
        if fasting_secs == 0 {
            return Err(PlanError::EmptyPhase("fasting"));
        }
        if eating_secs == 0 {
            return Err(PlanError::EmptyPhase("eating"));
        }
        Ok(Self {
            fasting_secs,
            eating_secs,
        })
    }

    pub fn fasting_secs(&self) -> u64 {
        self.fasting_secs
    }

    pub fn eating_secs(&self) -> u64 {
        self.eating_secs
    }

    /// Length of the given phase
    pub fn of(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Fasting => self.fasting_secs,
            Phase::Eating => self.eating_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_content() {
        let names: Vec<&str> = catalog().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["16:8", "18:6", "20:4"]);
        assert_eq!(default_plan().id, "16-8");
        assert_eq!(catalog()[2].difficulty, Difficulty::Advanced);
    }

    #[test]
    fn test_every_plan_has_valid_durations() {
        for plan in catalog() {
            let durations = plan.durations().unwrap();
            assert_eq!(durations.fasting_secs(), u64::from(plan.fasting_hours) * 3600);
            assert_eq!(durations.eating_secs(), u64::from(plan.eating_hours) * 3600);
            assert_eq!(plan.fasting_hours + plan.eating_hours, 24);
        }
    }

    #[test]
    fn test_find_plan() {
        assert_eq!(find_plan("18-6").unwrap().name, "18:6");
        assert_eq!(find_plan("20:4").unwrap().id, "20-4");
        assert_eq!(find_plan(" 16-8 ").unwrap().id, "16-8");
        assert_eq!(
            find_plan("5-2"),
            Err(PlanError::UnknownPlan("5-2".to_string()))
        );
    }

    #[test]
    fn test_durations_reject_empty_phase() {
        assert_eq!(
            PhaseDurations::from_hours(0, 8),
            Err(PlanError::EmptyPhase("fasting"))
        );
        assert_eq!(
            PhaseDurations::from_hours(16, 0),
            Err(PlanError::EmptyPhase("eating"))
        );
    }

    #[test]
    fn test_durations_of_phase() {
        let durations = PhaseDurations::from_hours(16, 8).unwrap();
        assert_eq!(durations.of(Phase::Fasting), 57_600);
        assert_eq!(durations.of(Phase::Eating), 28_800);
    }
}
