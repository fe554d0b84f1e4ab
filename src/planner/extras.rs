use crate::models::{ExtraKind, Item, LineItem, PartyRequest};
use crate::planner::constants::extra_profile;
use crate::planner::quantities::to_amount;

/// Packages of an extra for the given guest-hours. At least one.
pub fn packages_for(extra: ExtraKind, guest_hours: u64) -> u64 {
    let profile = extra_profile(extra);
    guest_hours
        .saturating_mul(profile.per_guest_hour)
        .div_ceil(profile.per_package)
        .max(1)
}

fn describe(extra: ExtraKind, base_quantity: u64) -> String {
    match extra {
        ExtraKind::Ice => format!(
            "About {:.1} kg of ice for drinks and cooling",
            base_quantity as f64 / 1000.0
        ),
        ExtraKind::Cups => format!(
            "{} disposable cups (one per guest per hour, accounting for replacements)",
            base_quantity
        ),
        ExtraKind::Napkins => format!("{} napkins for spills and snacks", base_quantity),
    }
}

/// Ice, cups and napkins, in that order.
pub fn calculate_extras(request: &PartyRequest) -> Vec<LineItem> {
    let guest_hours = request.guest_hours();

    ExtraKind::ALL
        .into_iter()
        .map(|extra| {
            let profile = extra_profile(extra);
            let packages = packages_for(extra, guest_hours);
            LineItem::new(
                Item::Extra(extra),
                to_amount(packages),
                profile.unit,
                describe(extra, guest_hours.saturating_mul(profile.per_guest_hour)),
            )
        })
        .collect()
}
