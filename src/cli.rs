use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::planner::constants::DEFAULT_BIG_BUDGET_THRESHOLD;
use crate::planner::PlanConfig;

/// Party Drink Calculator — estimate drinks, mixers, extras, and cost for a party.
#[derive(Parser, Debug)]
#[command(name = "party_drink_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Totals at or above this many dollars get the big-budget message.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_BIG_BUDGET_THRESHOLD,
        value_parser = parse_threshold
    )]
    pub budget_threshold: f64,

    /// Log filter directive (e.g. "debug"). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// Dollar threshold: a finite, non-negative amount.
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("`{}` is not a finite, non-negative dollar amount", s));
    }
    Ok(value)
}

impl Cli {
    pub fn plan_config(&self) -> PlanConfig {
        PlanConfig {
            big_budget_threshold: self.budget_threshold,
            ..Default::default()
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned shopping list.
    #[default]
    Text,
    /// Response JSON.
    Json,
    /// CSV shopping list.
    Csv,
    /// Text for sharing with friends.
    Share,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// How to print the plan.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Seed for picking a random party message instead of the fixed one.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Step-by-step interactive planner.
    Wizard {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Estimate from command-line flags.
    Calculate {
        /// Number of guests.
        #[arg(long, allow_negative_numbers = true)]
        guests: i64,

        /// light, medium, or heavy.
        #[arg(long, default_value = "medium")]
        drinker_type: String,

        /// Party length in hours.
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,

        /// Comma-separated drink types (beer, wine, vodka, whiskey, rum, gin).
        #[arg(long, value_delimiter = ',')]
        drinks: Vec<String>,

        /// Comma-separated mixers (soda, juice, tonic).
        #[arg(long, value_delimiter = ',')]
        mixers: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Estimate from a JSON request file.
    FromFile {
        /// Path to the request JSON.
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List available drinks, mixers, and drinker types.
    Options {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the readiness message.
    Ping,
}

impl Default for Command {
    fn default() -> Self {
        Command::Wizard {
            output: OutputArgs::default(),
        }
    }
}
