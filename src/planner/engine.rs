use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::models::{PartyPlan, PartyRequest, PartyRequestBody};
use crate::planner::constants::{
    DEFAULT_BIG_BUDGET_THRESHOLD, DEFAULT_BIG_PARTY_GUESTS, DEFAULT_INTIMATE_PARTY_GUESTS,
    cents_to_dollars,
};
use crate::planner::cost::aggregate;
use crate::planner::extras::calculate_extras;
use crate::planner::message::{compose_message, compose_message_with};
use crate::planner::mixers::calculate_mixers;
use crate::planner::quantities::calculate_drinks;

/// Tunable thresholds for message selection.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Totals (dollars) at or above this get the big-budget message.
    pub big_budget_threshold: f64,
    pub big_party_guests: u32,
    pub intimate_party_guests: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            big_budget_threshold: DEFAULT_BIG_BUDGET_THRESHOLD,
            big_party_guests: DEFAULT_BIG_PARTY_GUESTS,
            intimate_party_guests: DEFAULT_INTIMATE_PARTY_GUESTS,
        }
    }
}

/// Build a plan, leaving the message to `message_for`.
fn build_plan(
    request: &PartyRequest,
    message_for: impl FnOnce(u64) -> String,
) -> PartyPlan {
    let drinks = calculate_drinks(request);
    let mixers = calculate_mixers(request, &drinks);
    let extras = calculate_extras(request);
    let total_cents = aggregate(&drinks, &mixers, &extras);
    let fun_message = message_for(total_cents);

    info!(
        guests = request.guests(),
        intensity = %request.intensity(),
        hours = request.duration_hours(),
        total_cents,
        "generated party plan"
    );

    PartyPlan {
        drinks,
        mixers,
        extras,
        total_cost_estimate: cents_to_dollars(total_cents),
        fun_message,
        total_cents,
    }
}

/// Estimate drinks, mixers, extras and cost for a validated request.
///
/// Pure and deterministic: identical requests give identical plans.
pub fn generate_plan(request: &PartyRequest, config: &PlanConfig) -> PartyPlan {
    build_plan(request, |total| compose_message(request, total, config))
}

/// Same as [`generate_plan`], but the message is drawn from `rng`.
/// Quantities and cost do not depend on the random source.
pub fn generate_plan_with<R: Rng + ?Sized>(
    request: &PartyRequest,
    config: &PlanConfig,
    rng: &mut R,
) -> PartyPlan {
    build_plan(request, |total| {
        compose_message_with(request, total, config, rng)
    })
}

/// Validate a wire body and estimate it. No plan is returned on failure.
pub fn plan_from_body(body: &PartyRequestBody, config: &PlanConfig) -> Result<PartyPlan> {
    let request = PartyRequest::from_body(body)?;
    Ok(generate_plan(&request, config))
}
