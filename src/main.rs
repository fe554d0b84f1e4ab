use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use party_drink_calc_rs::catalog::Catalog;
use party_drink_calc_rs::cli::{Cli, Command, OutputArgs, OutputFormat};
use party_drink_calc_rs::error::Result;
use party_drink_calc_rs::health::health_check;
use party_drink_calc_rs::interface::{
    collect_party_request, display_catalog, display_party_plan, load_request, prompt_yes_no,
    share_text, write_plan_csv, write_plan_json,
};
use party_drink_calc_rs::models::{PartyPlan, PartyRequest, PartyRequestBody};
use party_drink_calc_rs::planner::{generate_plan, generate_plan_with, PlanConfig};
use party_drink_calc_rs::telemetry::init_tracing;

/// Exit code for requests that fail validation.
const EXIT_INVALID_REQUEST: i32 = 2;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        let code = if e.is_validation() { EXIT_INVALID_REQUEST } else { 1 };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = cli.plan_config();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Wizard { output } => cmd_wizard(&config, &output),
        Command::Calculate {
            guests,
            drinker_type,
            duration,
            drinks,
            mixers,
            output,
        } => {
            let body = PartyRequestBody {
                guests,
                drinker_type,
                duration,
                drink_types: drinks,
                mixers,
            };
            let request = PartyRequest::from_body(&body)?;
            print_plan(&request, &config, &output).map(|_| ())
        }
        Command::FromFile { path, output } => {
            let request = load_request(&path)?;
            print_plan(&request, &config, &output).map(|_| ())
        }
        Command::Options { json } => cmd_options(json),
        Command::Ping => {
            println!("{}", serde_json::to_string(&health_check())?);
            Ok(())
        }
    }
}

/// Walk the user through the planner, then print the plan.
fn cmd_wizard(config: &PlanConfig, output: &OutputArgs) -> Result<()> {
    println!("🎉 Party Drink Calculator");
    println!();

    let request = collect_party_request()?;
    let plan = print_plan(&request, config, output)?;

    if output.format == OutputFormat::Text && prompt_yes_no("Show text for sharing?", false)? {
        println!();
        println!("{}", share_text(&request, &plan));
    }

    Ok(())
}

/// List drink options.
fn cmd_options(json: bool) -> Result<()> {
    let catalog = Catalog::new();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        display_catalog(&catalog);
    }
    Ok(())
}

/// Estimate and print in the requested format.
fn print_plan(
    request: &PartyRequest,
    config: &PlanConfig,
    output: &OutputArgs,
) -> Result<PartyPlan> {
    let plan = match output.seed {
        Some(seed) => generate_plan_with(request, config, &mut StdRng::seed_from_u64(seed)),
        None => generate_plan(request, config),
    };

    match output.format {
        OutputFormat::Text => display_party_plan(request, &plan),
        OutputFormat::Json => write_plan_json(&plan, io::stdout().lock())?,
        OutputFormat::Csv => write_plan_csv(&plan, io::stdout().lock())?,
        OutputFormat::Share => println!("{}", share_text(request, &plan)),
    }

    Ok(plan)
}
