use serde::{Deserialize, Serialize};

use crate::advice::{CaregiverMood, DayPart, LifeStage, PlanVariant, Scenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextActionRequest {
    pub puppy_age_weeks: i64,
    pub hours_since_last_potty: f64,
    pub hours_since_last_meal: f64,
    #[serde(default)]
    pub local_time: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<DayPart>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub minutes_since_last_activity: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub caregiver_mood: Option<CaregiverMood>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextActionResponse {
    pub scenario: Scenario,
    pub action: String,
    pub reason: String,
    pub what_to_avoid: String,
    pub reassurance: String,
    pub next_check_in_minutes: u32,
    pub stage: LifeStage,
    pub disclaimer: String,
    pub plan: PlanVariant,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
