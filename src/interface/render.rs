use crate::catalog::Catalog;
use crate::models::{LineItem, PartyPlan, PartyRequest};
use crate::planner::line_total_cents;
use crate::planner::constants::cents_to_dollars;

fn print_section(title: &str, items: &[LineItem], name_width: usize) {
    if items.is_empty() {
        return;
    }

    println!("--- {} ---", title);
    for item in items {
        println!(
            "  {:<width$} {:>5} {:<18} ${:>8.2}  {}",
            item.item.name(),
            item.amount,
            item.unit,
            cents_to_dollars(line_total_cents(item)),
            item.description,
            width = name_width
        );
    }
    println!();
}

/// Display a plan as an aligned shopping list.
pub fn display_party_plan(request: &PartyRequest, plan: &PartyPlan) {
    println!();
    println!(
        "=== Party Plan: {} {} drinkers, {}h ===",
        request.guests(),
        request.intensity(),
        request.duration_hours()
    );
    println!();

    let name_width = plan
        .line_items()
        .map(|l| l.item.name().len())
        .max()
        .unwrap_or(8);

    print_section("Drinks", &plan.drinks, name_width);
    print_section("Mixers", &plan.mixers, name_width);
    print_section("Extras", &plan.extras, name_width);

    if !request.mixers().is_empty() && plan.mixers.is_empty() {
        println!("(Mixers skipped: no spirits selected.)");
        println!();
    }

    println!("--- Summary ---");
    println!("Total items: {}", plan.line_items().count());
    println!("Estimated cost: ${:.2}", plan.total_cost_estimate);
    println!();
    println!("{}", plan.fun_message);
    println!();
}

/// Plain-text summary suitable for pasting into a group chat.
pub fn share_text(request: &PartyRequest, plan: &PartyPlan) -> String {
    let bullets = |items: &[LineItem], joiner: &str| -> String {
        items
            .iter()
            .map(|l| format!("• {} {}{}{}", l.amount, l.unit, joiner, l.item.name()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut text = String::from("🎉 Party Planning Results!\n\n");
    text.push_str(&format!(
        "For {} {} drinkers ({}h party):\n\n",
        request.guests(),
        request.intensity(),
        request.duration_hours()
    ));
    text.push_str(&format!("Drinks needed:\n{}\n\n", bullets(&plan.drinks, " of ")));
    if !plan.mixers.is_empty() {
        text.push_str(&format!("Mixers:\n{}\n\n", bullets(&plan.mixers, " of ")));
    }
    text.push_str(&format!("Extras:\n{}\n\n", bullets(&plan.extras, " ")));
    text.push_str(&format!("Estimated cost: ${:.2}\n\n", plan.total_cost_estimate));
    text.push_str(&plan.fun_message);
    text
}

/// Display available drinks, mixers and intensities.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Drink Types ({} items) ===", catalog.drink_types.len());
    for d in &catalog.drink_types {
        println!("  {:<8} {:<12} ({:?})", d.id, d.name, d.category);
    }

    println!();
    println!("=== Mixers ({} items) ===", catalog.mixers.len());
    for m in &catalog.mixers {
        println!("  {:<8} {}", m.id, m.name);
    }

    println!();
    println!("=== Drinker Types ===");
    for i in &catalog.intensities {
        println!("  {:<8} {:<16} {}", i.id, i.name, i.description);
    }
    println!();
}
