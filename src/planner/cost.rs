use crate::models::LineItem;
use crate::planner::constants::unit_price_cents;

/// Price of one line item: whole units times the reference unit price.
#[inline]
pub fn line_total_cents(item: &LineItem) -> u64 {
    (item.amount as u64).saturating_mul(unit_price_cents(item.item))
}

/// Sum of every line item across the three sections, in cents.
pub fn aggregate(drinks: &[LineItem], mixers: &[LineItem], extras: &[LineItem]) -> u64 {
    drinks
        .iter()
        .chain(mixers)
        .chain(extras)
        .map(line_total_cents)
        .fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrinkType, ExtraKind, Item, MixerType};

    fn item(item: Item, amount: u32) -> LineItem {
        LineItem::new(item, amount, "units", String::new())
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total_cents(&item(Item::Drink(DrinkType::Beer), 40)), 10000);
        assert_eq!(line_total_cents(&item(Item::Mixer(MixerType::Soda), 3)), 450);
    }

    #[test]
    fn test_aggregate_all_sections() {
        let drinks = vec![
            item(Item::Drink(DrinkType::Beer), 40),
            item(Item::Drink(DrinkType::Vodka), 3),
        ];
        let mixers = vec![item(Item::Mixer(MixerType::Tonic), 9)];
        let extras = vec![
            item(Item::Extra(ExtraKind::Ice), 5),
            item(Item::Extra(ExtraKind::Cups), 2),
            item(Item::Extra(ExtraKind::Napkins), 1),
        ];
        assert_eq!(aggregate(&drinks, &mixers, &extras), 21750);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[], &[], &[]), 0);
    }
}
