use serde::{Deserialize, Serialize};

/// Which half of the fasting cycle the timer is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Fasting,
    Eating,
}

impl Phase {
    /// The phase that follows this one when its countdown runs out
    pub fn next(&self) -> Self {
        match self {
            Self::Fasting => Self::Eating,
            Self::Eating => Self::Fasting,
        }
    }

    /// Lowercase tag used in logs
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Fasting => "fasting",
            Self::Eating => "eating",
        }
    }

    /// Short display name ("Fasting", "Eating")
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fasting => "Fasting",
            Self::Eating => "Eating",
        }
    }

    /// Badge text shown above the countdown
    pub fn badge(&self, use_emoji: bool) -> String {
        let label = match self {
            Self::Fasting => "Fasting Period",
            Self::Eating => "Eating Window",
        };
        if !use_emoji {
            return label.to_string();
        }
        let symbol = match self {
            Self::Fasting => "\u{1F550}",
            Self::Eating => "\u{1F37D}\u{FE0F}",
        };
        format!("{} {}", symbol, label)
    }
}

/// Difficulty tier of a fasting plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// What happens to a running countdown when a different plan is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChangePolicy {
    /// Keep counting with the old durations; the new plan applies on the next reset
    #[default]
    OnReset,
    /// Apply the new durations immediately, keeping the phase's progress fraction
    Rescale,
}
