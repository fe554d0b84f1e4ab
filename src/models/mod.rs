mod plan;
mod request;

pub use plan::{ExtraKind, Item, LineItem, PartyPlan};
pub use request::{
    closest_match, DrinkCategory, DrinkType, Intensity, MixerType, PartyRequest, PartyRequestBody,
};
