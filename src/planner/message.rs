use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Intensity, PartyRequest};
use crate::planner::constants::{cents_to_dollars, dollars_to_cents};
use crate::planner::engine::PlanConfig;

/// Whether the shopping bill is modest or big.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostBracket {
    Modest,
    Big,
}

impl CostBracket {
    pub fn classify(total_cents: u64, config: &PlanConfig) -> Self {
        if total_cents >= dollars_to_cents(config.big_budget_threshold) {
            CostBracket::Big
        } else {
            CostBracket::Modest
        }
    }
}

/// Extra lines mixed in when a message is picked at random.
const FLAVOR_LINES: [&str; 4] = [
    "🥂 This {intensity}-drinking crew is going to have a blast!",
    "🍻 {drinks} different drinks = one epic party!",
    "🎈 Time to get this party started - you're all set!",
    "🎊 Your party is going to be legendary with this setup!",
];

const BIG_PARTY_LINE: &str = "🏠 That's a BIG party - hope your neighbors are cool!";
const INTIMATE_PARTY_LINE: &str = "🍸 Intimate gathering = more quality time with friends!";

fn fill(template: &str, request: &PartyRequest, total_cents: u64) -> String {
    template
        .replace("{guests}", &request.guests().to_string())
        .replace("{intensity}", request.intensity().name())
        .replace("{drinks}", &request.drink_types().len().to_string())
        .replace("{cost}", &format!("{:.2}", cents_to_dollars(total_cents)))
}

/// Message template for an intensity and cost bracket.
///
/// Placeholders: `{guests}`, `{intensity}`, `{drinks}`, `{cost}`.
fn rule_template(intensity: Intensity, bracket: CostBracket) -> &'static str {
    match (intensity, bracket) {
        (Intensity::Light, CostBracket::Modest) => {
            "🌱 {guests} light sippers and {drinks} drink types for ${cost}. Longer conversations and better memories!"
        }
        (Intensity::Light, CostBracket::Big) => {
            "🥂 A classy spread for {guests} light drinkers. ${cost} well spent on good times!"
        }
        (Intensity::Medium, CostBracket::Modest) => {
            "🎉 Ready to party with {guests} friends! ${cost} gets this {intensity}-drinking crew going."
        }
        (Intensity::Medium, CostBracket::Big) => {
            "🎊 {drinks} drink types, {guests} guests, ${cost} of fun. This party is going to be legendary!"
        }
        (Intensity::Heavy, CostBracket::Modest) => {
            "💪 Heavy drinkers detected, and you came prepared for ${cost}. Cheers to {guests} friends!"
        }
        (Intensity::Heavy, CostBracket::Big) => {
            "🍻 Go big or go home: ${cost} to keep {guests} heavy hitters happy!"
        }
    }
}

/// Deterministic message: the rule-table entry for this party.
pub fn compose_message(request: &PartyRequest, total_cents: u64, config: &PlanConfig) -> String {
    let bracket = CostBracket::classify(total_cents, config);
    fill(rule_template(request.intensity(), bracket), request, total_cents)
}

/// Every message that suits this party. The rule-table entry comes first.
pub fn message_candidates(
    request: &PartyRequest,
    total_cents: u64,
    config: &PlanConfig,
) -> Vec<String> {
    let bracket = CostBracket::classify(total_cents, config);
    let mut templates = vec![rule_template(request.intensity(), bracket)];
    templates.extend(FLAVOR_LINES);

    if request.guests() > config.big_party_guests {
        templates.push(BIG_PARTY_LINE);
    } else if request.guests() < config.intimate_party_guests {
        templates.push(INTIMATE_PARTY_LINE);
    }

    templates
        .into_iter()
        .map(|t| fill(t, request, total_cents))
        .collect()
}

/// Pick one of the suitable messages using the given random source.
pub fn compose_message_with<R: Rng + ?Sized>(
    request: &PartyRequest,
    total_cents: u64,
    config: &PlanConfig,
    rng: &mut R,
) -> String {
    let candidates = message_candidates(request, total_cents, config);
    match candidates.choose(rng) {
        Some(message) => message.clone(),
        None => compose_message(request, total_cents, config),
    }
}
