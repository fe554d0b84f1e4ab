use crate::models::{DrinkType, ExtraKind, Intensity, Item, MixerType};

// ─────────────────────────────────────────────────────────────────────────────
// Consumption
// ─────────────────────────────────────────────────────────────────────────────

/// Standard drinks per guest per hour, by intensity tier.
pub fn drinks_per_hour(intensity: Intensity) -> u32 {
    match intensity {
        Intensity::Light => 1,
        Intensity::Medium => 2,
        Intensity::Heavy => 3,
    }
}

/// Volume of one spirit shot (ml).
pub const SHOT_ML: u32 = 40;

/// Servings in a 750ml wine bottle (150ml glasses).
pub const WINE_GLASSES_PER_BOTTLE: u32 = 5;

/// Shots in a 750ml spirit bottle, rounded down.
pub const SHOTS_PER_BOTTLE: u32 = 18;

/// How a drink type is bought and priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkProfile {
    pub unit: &'static str,
    pub servings_per_unit: u32,
    /// What one standard drink of this type is called.
    pub serving_name: &'static str,
    pub price_cents: u64,
}

/// Purchase profile for a drink type.
pub fn drink_profile(drink: DrinkType) -> DrinkProfile {
    match drink {
        DrinkType::Beer => DrinkProfile {
            unit: "bottles (350ml)",
            servings_per_unit: 1,
            serving_name: "bottles",
            price_cents: 250,
        },
        DrinkType::Wine => DrinkProfile {
            unit: "bottles (750ml)",
            servings_per_unit: WINE_GLASSES_PER_BOTTLE,
            serving_name: "glasses",
            price_cents: 1200,
        },
        DrinkType::Vodka => spirit_profile(2500),
        DrinkType::Whiskey => spirit_profile(3000),
        DrinkType::Rum => spirit_profile(2200),
        DrinkType::Gin => spirit_profile(2800),
    }
}

fn spirit_profile(price_cents: u64) -> DrinkProfile {
    DrinkProfile {
        unit: "bottles (750ml)",
        servings_per_unit: SHOTS_PER_BOTTLE,
        serving_name: "shots",
        price_cents,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mixers
// ─────────────────────────────────────────────────────────────────────────────

/// Parts mixer per part spirit. Non-spirits take no mixer.
pub fn mixer_ratio(drink: DrinkType) -> u32 {
    match drink {
        DrinkType::Vodka | DrinkType::Gin => 4,
        DrinkType::Rum => 3,
        DrinkType::Whiskey => 2,
        DrinkType::Beer | DrinkType::Wine => 0,
    }
}

/// Mixers are bought by the liter.
pub const MIXER_UNIT: &str = "liters";
pub const MIXER_UNIT_ML: u64 = 1000;

pub fn mixer_price_cents(mixer: MixerType) -> u64 {
    match mixer {
        MixerType::Soda => 150,
        MixerType::Juice => 300,
        MixerType::Tonic => 200,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Extras
// ─────────────────────────────────────────────────────────────────────────────

/// Packaging for a supporting supply scaled by guest-hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraProfile {
    /// Base quantity (grams or pieces) consumed per guest-hour.
    pub per_guest_hour: u64,
    /// Base quantity in one package.
    pub per_package: u64,
    pub unit: &'static str,
    pub price_cents: u64,
}

pub fn extra_profile(extra: ExtraKind) -> ExtraProfile {
    match extra {
        // 250 g per guest-hour, 2 kg bags
        ExtraKind::Ice => ExtraProfile {
            per_guest_hour: 250,
            per_package: 2000,
            unit: "bags (2kg)",
            price_cents: 400,
        },
        ExtraKind::Cups => ExtraProfile {
            per_guest_hour: 1,
            per_package: 20,
            unit: "packs (20 cups)",
            price_cents: 100,
        },
        ExtraKind::Napkins => ExtraProfile {
            per_guest_hour: 1,
            per_package: 50,
            unit: "packs (50 napkins)",
            price_cents: 250,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pricing and messages
// ─────────────────────────────────────────────────────────────────────────────

/// Unit price of any line item.
pub fn unit_price_cents(item: Item) -> u64 {
    match item {
        Item::Drink(d) => drink_profile(d).price_cents,
        Item::Mixer(m) => mixer_price_cents(m),
        Item::Extra(e) => extra_profile(e).price_cents,
    }
}

/// Totals at or above this (dollars) get the big-budget message.
pub const DEFAULT_BIG_BUDGET_THRESHOLD: f64 = 150.0;

/// Guest counts above this are a big party.
pub const DEFAULT_BIG_PARTY_GUESTS: u32 = 20;

/// Guest counts below this are an intimate gathering.
pub const DEFAULT_INTIMATE_PARTY_GUESTS: u32 = 5;

/// Liveness acknowledgement.
pub const READY_MESSAGE: &str = "Party Drink Calculator API Ready! 🎉";

/// Format cents as dollars.
pub fn cents_to_dollars(cents: u64) -> f64 {
    cents as f64 / 100.0
}

/// Convert a dollar amount to whole cents.
pub fn dollars_to_cents(dollars: f64) -> u64 {
    if dollars <= 0.0 {
        return 0;
    }
    (dollars * 100.0).round() as u64
}
