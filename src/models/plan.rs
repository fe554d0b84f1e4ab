use serde::{Serialize, Serializer};

use crate::models::{DrinkType, MixerType};

/// Non-alcoholic supplies that every party needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraKind {
    Ice,
    Cups,
    Napkins,
}

impl ExtraKind {
    pub const ALL: [ExtraKind; 3] = [ExtraKind::Ice, ExtraKind::Cups, ExtraKind::Napkins];

    pub fn name(&self) -> &'static str {
        match self {
            ExtraKind::Ice => "ice",
            ExtraKind::Cups => "cups",
            ExtraKind::Napkins => "napkins",
        }
    }
}

/// What a line item is for. Serializes as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Drink(DrinkType),
    Mixer(MixerType),
    Extra(ExtraKind),
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::Drink(d) => d.name(),
            Item::Mixer(m) => m.name(),
            Item::Extra(e) => e.name(),
        }
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    #[serde(rename = "drink_type")]
    pub item: Item,

    /// Whole purchase units to buy.
    pub amount: u32,

    pub unit: String,

    pub description: String,
}

impl LineItem {
    pub fn new(item: Item, amount: u32, unit: impl Into<String>, description: String) -> Self {
        Self {
            item,
            amount,
            unit: unit.into(),
            description,
        }
    }
}

/// Full estimate for one party.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyPlan {
    pub drinks: Vec<LineItem>,
    pub mixers: Vec<LineItem>,
    pub extras: Vec<LineItem>,

    /// Total in dollars, two decimal places.
    pub total_cost_estimate: f64,

    pub fun_message: String,

    /// Exact total in cents.
    #[serde(skip)]
    pub total_cents: u64,
}

impl PartyPlan {
    /// All line items: drinks, then mixers, then extras.
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.drinks
            .iter()
            .chain(self.mixers.iter())
            .chain(self.extras.iter())
    }

    pub fn find(&self, item: Item) -> Option<&LineItem> {
        self.line_items().find(|l| l.item == item)
    }
}
