use tracing::{debug, warn};

use crate::models::{DrinkType, Item, LineItem, PartyRequest};
use crate::planner::constants::{
    MIXER_UNIT, MIXER_UNIT_ML, SHOTS_PER_BOTTLE, SHOT_ML, mixer_ratio,
};
use crate::planner::quantities::to_amount;

/// Bottles bought for a drink, read back from the drink line items.
fn bottles_of(drinks: &[LineItem], drink: DrinkType) -> u64 {
    drinks
        .iter()
        .find(|l| l.item == Item::Drink(drink))
        .map(|l| l.amount as u64)
        .unwrap_or(0)
}

/// Mixer volume (ml) needed for the purchased spirits.
///
/// Each bottle holds SHOTS_PER_BOTTLE shots; every shot is topped with
/// `ratio` parts mixer.
pub fn mixer_volume_ml(spirits: &[DrinkType], drinks: &[LineItem]) -> u64 {
    spirits
        .iter()
        .map(|&spirit| {
            bottles_of(drinks, spirit)
                .saturating_mul(SHOTS_PER_BOTTLE as u64)
                .saturating_mul(SHOT_ML as u64)
                .saturating_mul(mixer_ratio(spirit) as u64)
        })
        .fold(0, u64::saturating_add)
}

/// One line item per requested mixer, or none when no spirit is on the list.
///
/// The total mixer volume is split evenly across flavors, then each share is
/// rounded up to whole liters.
pub fn calculate_mixers(request: &PartyRequest, drinks: &[LineItem]) -> Vec<LineItem> {
    if request.mixers().is_empty() {
        return Vec::new();
    }

    let spirits = request.spirits();
    if spirits.is_empty() {
        warn!(
            mixers = request.mixers().len(),
            "mixers requested without any spirit; ignoring"
        );
        return Vec::new();
    }

    let total_ml = mixer_volume_ml(&spirits, drinks);
    let per_flavor_ml = total_ml.div_ceil(request.mixers().len() as u64);
    let liters = per_flavor_ml.div_ceil(MIXER_UNIT_ML).max(1);

    debug!(total_ml, per_flavor_ml, liters, "computed mixer volume");

    let spirit_names: Vec<&str> = spirits.iter().map(|s| s.name()).collect();
    request
        .mixers()
        .iter()
        .map(|&mixer| {
            LineItem::new(
                Item::Mixer(mixer),
                to_amount(liters),
                MIXER_UNIT,
                format!("Mixer for {}", spirit_names.join(", ")),
            )
        })
        .collect()
}
