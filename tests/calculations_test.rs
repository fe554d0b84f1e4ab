use party_drink_calc_rs::models::{DrinkType, ExtraKind, Intensity, Item, MixerType, PartyRequest};
use party_drink_calc_rs::planner::{
    calculate_drinks, calculate_extras, calculate_mixers, drinks_per_hour, share_per_type,
    total_standard_drinks, units_for, SHOTS_PER_BOTTLE,
};

fn request(
    guests: i64,
    intensity: Intensity,
    hours: i64,
    drinks: &[DrinkType],
    mixers: &[MixerType],
) -> PartyRequest {
    PartyRequest::new(guests, intensity, hours, drinks, mixers).unwrap()
}

#[test]
fn test_total_scales_with_intensity() {
    let light = request(10, Intensity::Light, 4, &[DrinkType::Beer], &[]);
    let heavy = request(10, Intensity::Heavy, 4, &[DrinkType::Beer], &[]);

    assert_eq!(
        total_standard_drinks(&light),
        10 * 4 * drinks_per_hour(Intensity::Light) as u64
    );
    assert!(total_standard_drinks(&heavy) > total_standard_drinks(&light));
}

#[test]
fn test_equal_share_never_under_provisions() {
    for total in 1..50u64 {
        for types in 1..=6usize {
            let share = share_per_type(total, types);
            assert!(share * types as u64 >= total);
            assert!(share * (types as u64) < total + types as u64);
        }
    }
}

#[test]
fn test_single_spirit_gets_whole_share() {
    // 20 guests * 3 drinks * 5 hours = 300 shots -> 17 bottles
    let req = request(20, Intensity::Heavy, 5, &[DrinkType::Whiskey], &[]);
    let drinks = calculate_drinks(&req);
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].amount as u64, 300u64.div_ceil(SHOTS_PER_BOTTLE as u64));
    assert_eq!(drinks[0].unit, "bottles (750ml)");
}

#[test]
fn test_wine_uses_five_glasses_per_bottle() {
    assert_eq!(units_for(DrinkType::Wine, 5), 1);
    assert_eq!(units_for(DrinkType::Wine, 6), 2);
}

#[test]
fn test_mixer_gating_without_spirits() {
    let req = request(
        10,
        Intensity::Medium,
        4,
        &[DrinkType::Beer, DrinkType::Wine],
        &[MixerType::Soda, MixerType::Tonic],
    );
    let drinks = calculate_drinks(&req);
    assert!(calculate_mixers(&req, &drinks).is_empty());
}

#[test]
fn test_one_mixer_line_per_flavor() {
    let req = request(
        6,
        Intensity::Light,
        3,
        &[DrinkType::Gin, DrinkType::Rum],
        &[MixerType::Tonic, MixerType::Juice],
    );
    let drinks = calculate_drinks(&req);
    let mixers = calculate_mixers(&req, &drinks);

    assert_eq!(mixers.len(), 2);
    assert_eq!(mixers[0].item, Item::Mixer(MixerType::Tonic));
    assert_eq!(mixers[1].item, Item::Mixer(MixerType::Juice));
    assert_eq!(mixers[0].description, "Mixer for gin, rum");
    assert!(mixers.iter().all(|m| m.amount >= 1));
}

#[test]
fn test_extras_always_include_ice() {
    let req = request(1, Intensity::Light, 1, &[DrinkType::Beer], &[]);
    let extras = calculate_extras(&req);
    assert!(extras.iter().any(|e| e.item == Item::Extra(ExtraKind::Ice)));
    assert!(extras.iter().all(|e| e.amount >= 1));
}

#[test]
fn test_billion_guest_party_does_not_overflow() {
    use party_drink_calc_rs::planner::{generate_plan, PlanConfig};

    let huge = request(
        1_000_000_000,
        Intensity::Heavy,
        1_000_000_000,
        &[DrinkType::Beer, DrinkType::Vodka],
        &[MixerType::Tonic],
    );
    let smaller = request(
        1_000_000,
        Intensity::Heavy,
        1_000_000,
        &[DrinkType::Beer, DrinkType::Vodka],
        &[MixerType::Tonic],
    );

    let big_plan = generate_plan(&huge, &PlanConfig::default());
    let small_plan = generate_plan(&smaller, &PlanConfig::default());

    assert_eq!(big_plan.drinks[0].amount, u32::MAX);
    assert!(big_plan.line_items().all(|l| l.amount >= 1));
    for (a, b) in small_plan.line_items().zip(big_plan.line_items()) {
        assert!(a.amount <= b.amount, "{:?} > {:?}", a, b);
    }
    assert!(small_plan.total_cents <= big_plan.total_cents);

    let ice = calculate_extras(&huge);
    assert_eq!(ice[0].item, Item::Extra(ExtraKind::Ice));
    assert_eq!(ice[0].amount, u32::MAX);
}
