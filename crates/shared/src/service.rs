use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::advice::{Decision, LifeStage, SAFETY_DISCLAIMER, decide, stage_from_age};
use crate::clock::Clock;
use crate::models::{NextActionRequest, NextActionResponse};
use crate::session_memo::{SessionMemo, SessionMemoStore};
use crate::validation::{ValidatedRequest, ValidationError, validate_next_action};

/// Validates a request, runs the decision engine against the prior session
/// memo and records the new memo.
#[derive(Clone)]
pub struct AdviceService {
    memo_store: Arc<dyn SessionMemoStore>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl AdviceService {
    pub fn new(
        memo_store: Arc<dyn SessionMemoStore>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            memo_store,
            clock,
            session_ttl,
        }
    }

    pub async fn next_action(
        &self,
        req: &NextActionRequest,
    ) -> Result<NextActionResponse, ValidationError> {
        let now = self.clock.now();
        let validated = validate_next_action(req, now)?;
        Ok(self.advise(validated, now).await)
    }

    /// Memo store failures are logged and otherwise ignored: a failed load
    /// means Plan A, a failed save means the next request sees no memo.
    pub async fn advise(&self, validated: ValidatedRequest, now: DateTime<Utc>) -> NextActionResponse {
        let ValidatedRequest { input, session_id } = validated;
        let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let prior = match self.memo_store.load(&session_id, now).await {
            Ok(prior) => prior,
            Err(err) => {
                warn!("session memo lookup failed, using primary plan: {err}");
                None
            }
        };

        let decision = decide(&input, prior.as_ref(), now, self.session_ttl);
        let stage = stage_from_age(input.age_weeks);

        if let Err(err) = self
            .memo_store
            .save(&session_id, SessionMemo::new(decision.scenario, now))
            .await
        {
            warn!("session memo write failed: {err}");
        }

        debug!(
            scenario = decision.scenario.as_str(),
            plan = ?decision.plan,
            stage = stage.label(),
            repeated = prior.as_ref().is_some_and(|memo| memo.scenario == decision.scenario),
            "advice selected"
        );

        assemble_response(decision, stage, session_id)
    }
}

fn assemble_response(decision: Decision, stage: LifeStage, session_id: String) -> NextActionResponse {
    let advice = decision.advice;
    NextActionResponse {
        scenario: decision.scenario,
        action: advice.action.to_string(),
        reason: advice.reason.to_string(),
        what_to_avoid: advice.what_to_avoid.to_string(),
        reassurance: advice.reassurance.to_string(),
        next_check_in_minutes: advice.next_check_in_minutes,
        stage,
        disclaimer: SAFETY_DISCLAIMER.to_string(),
        plan: decision.plan,
        session_id,
    }
}
