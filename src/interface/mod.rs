pub mod input;
pub mod output;
pub mod prompts;
pub mod render;

pub use input::load_request;
pub use output::{write_plan_csv, write_plan_json};
pub use prompts::{
    collect_party_request, prompt_drinks, prompt_duration, prompt_guests, prompt_intensity,
    prompt_mixers, prompt_yes_no,
};
pub use render::{display_catalog, display_party_plan, share_text};
