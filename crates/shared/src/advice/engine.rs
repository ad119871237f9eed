use chrono::{DateTime, Duration, Utc};

use super::keywords::{self, KeywordSet};
use super::playbook::{AdviceBundle, advice_for};
use super::stage::GROWING_PUPPY_MAX_WEEKS;
use super::{CaregiverMood, DayPart, PlanVariant, Scenario};
use crate::session_memo::SessionMemo;

pub const POTTY_MAX_AGE_WEEKS: u32 = 16;
pub const POTTY_INTERVAL_HOURS: f64 = 1.0;
pub const OVERTIRED_RECENT_ACTIVITY_MINUTES: f64 = 45.0;
pub const MEAL_INTERVAL_HOURS: f64 = 5.0;

/// A request that already passed validation. All numeric fields are finite
/// and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceInput {
    pub age_weeks: u32,
    pub day_part: DayPart,
    pub hours_since_last_potty: f64,
    pub hours_since_last_meal: f64,
    pub minutes_since_last_activity: f64,
    pub notes: String,
    pub mood: Option<CaregiverMood>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub scenario: Scenario,
    pub plan: PlanVariant,
    pub advice: &'static AdviceBundle,
}

struct RuleContext<'a> {
    input: &'a AdviceInput,
    lowered_notes: String,
}

impl RuleContext<'_> {
    fn notes_match(&self, set: &KeywordSet) -> bool {
        set.matches(&self.lowered_notes)
    }

    fn is_young(&self) -> bool {
        self.input.age_weeks <= GROWING_PUPPY_MAX_WEEKS
    }
}

struct ScenarioRule {
    scenario: Scenario,
    applies: fn(&RuleContext<'_>) -> bool,
}

// Evaluated top to bottom; the first rule that applies wins. PlayTime is the
// fallback and has no rule.
const SCENARIO_RULES: &[ScenarioRule] = &[
    ScenarioRule {
        scenario: Scenario::OwnerOverwhelmed,
        applies: |ctx| {
            ctx.input.mood == Some(CaregiverMood::Overwhelmed) || ctx.notes_match(&keywords::OVERWHELM)
        },
    },
    ScenarioRule {
        scenario: Scenario::HealthConcern,
        applies: |ctx| ctx.notes_match(&keywords::HEALTH),
    },
    ScenarioRule {
        scenario: Scenario::Overtired,
        applies: |ctx| {
            ctx.is_young()
                && ctx.input.day_part.is_late()
                && ctx.input.minutes_since_last_activity < OVERTIRED_RECENT_ACTIVITY_MINUTES
        },
    },
    ScenarioRule {
        scenario: Scenario::Potty,
        applies: |ctx| {
            ctx.input.age_weeks <= POTTY_MAX_AGE_WEEKS
                && ctx.input.hours_since_last_potty >= POTTY_INTERVAL_HOURS
        },
    },
    ScenarioRule {
        scenario: Scenario::CrateDistress,
        applies: |ctx| ctx.notes_match(&keywords::CRATE),
    },
    ScenarioRule {
        scenario: Scenario::Biting,
        applies: |ctx| ctx.is_young() && ctx.notes_match(&keywords::BITING),
    },
    ScenarioRule {
        scenario: Scenario::Barking,
        applies: |ctx| ctx.notes_match(&keywords::BARKING),
    },
    ScenarioRule {
        scenario: Scenario::MealTime,
        applies: |ctx| {
            ctx.input.hours_since_last_meal >= MEAL_INTERVAL_HOURS && !ctx.input.day_part.is_night()
        },
    },
    ScenarioRule {
        scenario: Scenario::SleepTime,
        applies: |ctx| ctx.input.day_part.is_night(),
    },
];

fn rule_context(input: &AdviceInput) -> RuleContext<'_> {
    RuleContext {
        input,
        lowered_notes: input.notes.to_lowercase(),
    }
}

pub fn evaluate_scenario(input: &AdviceInput) -> Scenario {
    let ctx = rule_context(input);
    SCENARIO_RULES
        .iter()
        .find(|rule| (rule.applies)(&ctx))
        .map(|rule| rule.scenario)
        .unwrap_or(Scenario::PlayTime)
}

/// Every scenario whose predicate holds, in priority order. The first entry is
/// what `evaluate_scenario` picks; the list always ends with `PlayTime`.
pub fn matching_scenarios(input: &AdviceInput) -> Vec<Scenario> {
    let ctx = rule_context(input);
    SCENARIO_RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| rule.scenario)
        .chain(std::iter::once(Scenario::PlayTime))
        .collect()
}

/// Plan B only when the prior memo is fresh and recorded the same scenario.
pub fn select_plan(
    prior: Option<&SessionMemo>,
    scenario: Scenario,
    now: DateTime<Utc>,
    ttl: Duration,
) -> PlanVariant {
    match prior {
        Some(memo) if !memo.is_stale(now, ttl) && memo.scenario == scenario => PlanVariant::B,
        _ => PlanVariant::A,
    }
}

pub fn decide(
    input: &AdviceInput,
    prior: Option<&SessionMemo>,
    now: DateTime<Utc>,
    ttl: Duration,
) -> Decision {
    let scenario = evaluate_scenario(input);
    let plan = select_plan(prior, scenario, now, ttl);

    Decision {
        scenario,
        plan,
        advice: advice_for(scenario, plan),
    }
}
