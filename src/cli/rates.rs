use super::ui;
use crate::core::format::symbol_for;
use crate::core::rates::RateProvider;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use console::style;

/// Fetches the full table for `base` and renders it. With `targets`
/// only those codes are shown; unknown targets render as N/A.
pub async fn run(provider: &dyn RateProvider, base: &str, targets: &[String]) -> Result<()> {
    let pb = ui::new_spinner("Fetching rates...");
    let result = provider.fetch_table(base).await;
    pb.finish_and_clear();
    let table_data = result?;

    let mut codes: Vec<String> = if targets.is_empty() {
        table_data.rates.keys().cloned().collect()
    } else {
        targets.iter().map(|t| t.to_lowercase()).collect()
    };
    codes.sort();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate (1 {})", base.to_uppercase())),
    ]);

    for code in &codes {
        let label = match symbol_for(code) {
            Some(symbol) => format!("{} {}", code.to_uppercase(), symbol),
            None => code.to_uppercase(),
        };
        let rate_cell = match table_data.rate_to(code) {
            Some(rate) => Cell::new(format!("{rate:.4}")).set_alignment(CellAlignment::Right),
            None => Cell::new("N/A").set_alignment(CellAlignment::Right),
        };
        table.add_row(vec![Cell::new(label), rate_cell]);
    }

    println!(
        "Rates from {}",
        style(base.to_uppercase()).bold().underlined()
    );
    if let Some(date) = table_data.date {
        println!("{}", ui::style_text(&format!("As of {date}"), ui::StyleType::Subtle));
    }
    println!("{table}");

    Ok(())
}
