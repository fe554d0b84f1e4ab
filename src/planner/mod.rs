pub mod constants;
pub mod cost;
pub mod engine;
pub mod extras;
pub mod message;
pub mod mixers;
pub mod quantities;

pub use constants::*;
pub use cost::{aggregate, line_total_cents};
pub use engine::{generate_plan, generate_plan_with, plan_from_body, PlanConfig};
pub use extras::{calculate_extras, packages_for};
pub use message::{compose_message, compose_message_with, message_candidates, CostBracket};
pub use mixers::{calculate_mixers, mixer_volume_ml};
pub use quantities::{calculate_drinks, share_per_type, total_standard_drinks, units_for};
