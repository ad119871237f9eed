use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

mod engine;
mod keywords;
mod playbook;
mod stage;


pub use engine::{
    AdviceInput, Decision, MEAL_INTERVAL_HOURS, OVERTIRED_RECENT_ACTIVITY_MINUTES,
    POTTY_INTERVAL_HOURS, POTTY_MAX_AGE_WEEKS, decide, evaluate_scenario, matching_scenarios,
    select_plan,
};
pub use playbook::{AdviceBundle, SAFETY_DISCLAIMER, advice_for};
pub use stage::{
    ADOLESCENT_MAX_WEEKS, EARLY_PUPPY_MAX_WEEKS, GROWING_PUPPY_MAX_WEEKS, LifeStage,
    stage_from_age,
};

/// The single situational category a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    OwnerOverwhelmed,
    HealthConcern,
    Overtired,
    Potty,
    CrateDistress,
    Biting,
    Barking,
    MealTime,
    SleepTime,
    PlayTime,
}

impl Scenario {
    pub const ALL: [Scenario; 10] = [
        Scenario::OwnerOverwhelmed,
        Scenario::HealthConcern,
        Scenario::Overtired,
        Scenario::Potty,
        Scenario::CrateDistress,
        Scenario::Biting,
        Scenario::Barking,
        Scenario::MealTime,
        Scenario::SleepTime,
        Scenario::PlayTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OwnerOverwhelmed => "owner_overwhelmed",
            Self::HealthConcern => "health_concern",
            Self::Overtired => "overtired",
            Self::Potty => "potty",
            Self::CrateDistress => "crate_distress",
            Self::Biting => "biting",
            Self::Barking => "barking",
            Self::MealTime => "meal_time",
            Self::SleepTime => "sleep_time",
            Self::PlayTime => "play_time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanVariant {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaregiverMood {
    Calm,
    Tired,
    Stressed,
    Overwhelmed,
}

/// Discretized time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    #[serde(alias = "day")]
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    /// Night is 22:00 through 05:59, decided by the clock hour alone.
    pub fn from_time(time: NaiveTime) -> Self {
        match time.hour() {
            22..=23 | 0..=5 => Self::Night,
            6..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn is_night(self) -> bool {
        self == Self::Night
    }

    pub fn is_late(self) -> bool {
        matches!(self, Self::Evening | Self::Night)
    }
}
