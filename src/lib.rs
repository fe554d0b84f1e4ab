pub mod catalog;
pub mod cli;
pub mod error;
pub mod health;
pub mod interface;
pub mod models;
pub mod planner;
pub mod telemetry;

pub use error::{PartyError, Result};
pub use models::{LineItem, PartyPlan, PartyRequest, PartyRequestBody};
pub use planner::{generate_plan, PlanConfig};
