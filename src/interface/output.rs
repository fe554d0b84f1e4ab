use std::io::Write;

use crate::error::Result;
use crate::models::{LineItem, PartyPlan};
use crate::planner::constants::{cents_to_dollars, unit_price_cents};
use crate::planner::line_total_cents;

/// Write the plan as a CSV shopping list.
pub fn write_plan_csv<W: Write>(plan: &PartyPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "section",
        "item",
        "amount",
        "unit",
        "unit_price",
        "line_total",
    ])?;

    let sections: [(&str, &[LineItem]); 3] = [
        ("drinks", &plan.drinks),
        ("mixers", &plan.mixers),
        ("extras", &plan.extras),
    ];

    for (section, items) in sections {
        for item in items {
            wtr.write_record([
                section.to_string(),
                item.item.name().to_string(),
                item.amount.to_string(),
                item.unit.clone(),
                format!("{:.2}", cents_to_dollars(unit_price_cents(item.item))),
                format!("{:.2}", cents_to_dollars(line_total_cents(item))),
            ])?;
        }
    }

    let total = format!("{:.2}", plan.total_cost_estimate);
    wtr.write_record(["total", "", "", "", "", total.as_str()])?;
    wtr.flush()?;
    Ok(())
}

/// Write the plan in the response shape as pretty JSON.
pub fn write_plan_json<W: Write>(plan: &PartyPlan, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writeln!(writer)?;
    Ok(())
}
