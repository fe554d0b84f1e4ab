use tracing::debug;

use crate::models::{DrinkType, Item, LineItem, PartyRequest};
use crate::planner::constants::{drink_profile, drinks_per_hour};

/// Clamp a computed count into a line-item amount.
pub(crate) fn to_amount(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Total standard drinks the whole party will get through.
///
/// Formula: guests * rate(intensity) * duration_hours, saturating at `u64::MAX`.
pub fn total_standard_drinks(request: &PartyRequest) -> u64 {
    (request.guests() as u64)
        .saturating_mul(drinks_per_hour(request.intensity()) as u64)
        .saturating_mul(request.duration_hours() as u64)
}

/// Standard drinks allotted to each selected type.
///
/// Every type gets the ceiling of the equal share, so the sum may exceed
/// `total` by at most `types - 1` but never falls short.
pub fn share_per_type(total: u64, types: usize) -> u64 {
    if types == 0 {
        return 0;
    }
    total.div_ceil(types as u64)
}

/// Whole purchase units needed to serve `servings` of a drink. At least one.
pub fn units_for(drink: DrinkType, servings: u64) -> u64 {
    let profile = drink_profile(drink);
    servings.div_ceil(profile.servings_per_unit as u64).max(1)
}

/// One line item per selected drink type, in submitted order.
pub fn calculate_drinks(request: &PartyRequest) -> Vec<LineItem> {
    let total = total_standard_drinks(request);
    let types = request.drink_types().len();
    let share = share_per_type(total, types);
    let rate = drinks_per_hour(request.intensity());

    debug!(total, types, share, "allocated standard drinks");

    request
        .drink_types()
        .iter()
        .map(|&drink| {
            let profile = drink_profile(drink);
            let units = units_for(drink, share);

            let split = if types > 1 {
                format!(", split across {} drink types", types)
            } else {
                String::new()
            };
            let description = format!(
                "Enough for about {} {} ({} drinks per guest per hour{})",
                share, profile.serving_name, rate, split
            );

            LineItem::new(Item::Drink(drink), to_amount(units), profile.unit, description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intensity;

    fn request(guests: i64, intensity: Intensity, hours: i64, drinks: &[DrinkType]) -> PartyRequest {
        PartyRequest::new(guests, intensity, hours, drinks, &[]).unwrap()
    }

    #[test]
    fn test_total_standard_drinks() {
        let req = request(10, Intensity::Medium, 4, &[DrinkType::Beer]);
        assert_eq!(total_standard_drinks(&req), 80);
    }

    #[test]
    fn test_share_rounds_up() {
        assert_eq!(share_per_type(80, 2), 40);
        assert_eq!(share_per_type(7, 3), 3);
        assert_eq!(share_per_type(1, 4), 1);
        assert_eq!(share_per_type(5, 0), 0);
    }

    #[test]
    fn test_units_per_drink_type() {
        // Beer: one bottle per drink
        assert_eq!(units_for(DrinkType::Beer, 40), 40);
        // Wine: 5 glasses per bottle
        assert_eq!(units_for(DrinkType::Wine, 11), 3);
        // Spirits: 18 shots per bottle
        assert_eq!(units_for(DrinkType::Rum, 18), 1);
        assert_eq!(units_for(DrinkType::Rum, 19), 2);
        // Never zero
        assert_eq!(units_for(DrinkType::Gin, 0), 1);
    }

    #[test]
    fn test_calculate_drinks_preserves_order() {
        let req = request(
            10,
            Intensity::Medium,
            4,
            &[DrinkType::Vodka, DrinkType::Beer, DrinkType::Wine],
        );
        let drinks = calculate_drinks(&req);
        let order: Vec<Item> = drinks.iter().map(|d| d.item).collect();
        assert_eq!(
            order,
            vec![
                Item::Drink(DrinkType::Vodka),
                Item::Drink(DrinkType::Beer),
                Item::Drink(DrinkType::Wine)
            ]
        );
        // 80 drinks / 3 types -> 27 each
        assert_eq!(drinks[0].amount, 2);
        assert_eq!(drinks[1].amount, 27);
        assert_eq!(drinks[2].amount, 6);
        assert!(drinks[1].description.contains("split across 3 drink types"));
    }

    #[test]
    fn test_total_saturates_for_huge_parties() {
        let req = request(u32::MAX as i64, Intensity::Heavy, u32::MAX as i64, &[DrinkType::Beer]);
        assert_eq!(total_standard_drinks(&req), u64::MAX);
        assert_eq!(calculate_drinks(&req)[0].amount, u32::MAX);
    }

    #[test]
    fn test_minimum_one_unit_per_type() {
        let req = request(1, Intensity::Light, 1, &DrinkType::ALL);
        for item in calculate_drinks(&req) {
            assert!(item.amount >= 1, "{:?}", item);
        }
    }
}
