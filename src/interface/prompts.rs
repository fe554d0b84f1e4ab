use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::Result;
use crate::models::{DrinkType, Intensity, MixerType, PartyRequest};

fn at_least_one(value: &i64) -> std::result::Result<(), &'static str> {
    if *value >= 1 {
        Ok(())
    } else {
        Err("Please enter at least 1")
    }
}

/// Prompt for the number of guests.
pub fn prompt_guests() -> Result<i64> {
    Ok(Input::<i64>::new()
        .with_prompt("How many guests are coming?")
        .default(8)
        .validate_with(at_least_one)
        .interact_text()?)
}

/// Prompt for the drinker type.
pub fn prompt_intensity() -> Result<Intensity> {
    let options: Vec<String> = Intensity::ALL
        .iter()
        .map(|i| format!("{} ({})", i.display_name(), i.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("What kind of drinkers are they?")
        .items(&options)
        .default(1) // medium
        .interact()?;

    Ok(Intensity::ALL[selection.min(Intensity::ALL.len() - 1)])
}

/// Prompt for the party length in hours.
pub fn prompt_duration() -> Result<i64> {
    Ok(Input::<i64>::new()
        .with_prompt("How many hours will the party last?")
        .default(4)
        .validate_with(at_least_one)
        .interact_text()?)
}

/// Prompt for drink types until at least one is picked.
pub fn prompt_drinks() -> Result<Vec<DrinkType>> {
    let names: Vec<&str> = DrinkType::ALL.iter().map(|d| d.display_name()).collect();
    // beer and wine preselected
    let defaults: Vec<bool> = DrinkType::ALL.iter().map(|d| !d.is_spirit()).collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt("Which drinks? (space to toggle, enter to confirm)")
            .items(&names)
            .defaults(&defaults)
            .interact()?;

        if picked.is_empty() {
            println!("Pick at least one drink.");
            continue;
        }

        return Ok(picked.into_iter().map(|i| DrinkType::ALL[i]).collect());
    }
}

/// Prompt for mixers. Only asked when a spirit was picked.
pub fn prompt_mixers(drinks: &[DrinkType]) -> Result<Vec<MixerType>> {
    if !drinks.iter().any(DrinkType::is_spirit) {
        return Ok(Vec::new());
    }

    if !prompt_yes_no("Add mixers for the spirits?", false)? {
        return Ok(Vec::new());
    }

    let names: Vec<&str> = MixerType::ALL.iter().map(|m| m.display_name()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Which mixers?")
        .items(&names)
        .interact()?;

    Ok(picked.into_iter().map(|i| MixerType::ALL[i]).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every step and build a validated request.
pub fn collect_party_request() -> Result<PartyRequest> {
    let guests = prompt_guests()?;
    let intensity = prompt_intensity()?;
    let duration = prompt_duration()?;
    let drinks = prompt_drinks()?;
    let mixers = prompt_mixers(&drinks)?;

    PartyRequest::new(guests, intensity, duration, &drinks, &mixers)
}
