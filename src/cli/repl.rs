use super::ui::{self, StyleType};
use super::view::TermView;
use crate::core::Converter;
use crate::core::view::ConverterView;
use anyhow::Result;
use console::{Term, style};

const HELP: &str = "\
Enter an amount to convert it, or one of:
  from <CODE>   change the source currency
  to <CODE>     change the target currency
  swap          exchange source and target
  help          show this message
  quit          exit";

/// Interactive conversion loop. Every accepted line is one event that
/// triggers exactly one conversion, mirroring the input/change/swap
/// triggers of a form-based converter.
pub async fn run(converter: &Converter, view: &TermView) -> Result<()> {
    let term = Term::stdout();

    // Initial load: restore persisted selections, then convert once.
    let pb = ui::new_spinner("Fetching rates...");
    converter.init(view).await;
    pb.finish_and_clear();
    view.render();

    // Without a terminal there are no further input events; read_line
    // would report EOF as an empty line and loop forever.
    if !term.is_term() {
        return Ok(());
    }
    println!("{}", ui::style_text("Type 'help' for commands.", StyleType::Subtle));

    loop {
        term.write_str(&format!("{} > ", style(view.prompt()).cyan()))?;
        let line = match term.read_line() {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "swap" => {
                let pb = ui::new_spinner("Fetching rates...");
                converter.swap(view).await;
                pb.finish_and_clear();
            }
            _ => {
                if let Some(code) = input.strip_prefix("from ") {
                    view.set_from_currency(code.trim());
                } else if let Some(code) = input.strip_prefix("to ") {
                    view.set_to_currency(code.trim());
                } else {
                    // Anything else is an amount edit; invalid input
                    // renders the zero sentinel like an empty field.
                    view.set_amount(input);
                }
                let pb = ui::new_spinner("Fetching rates...");
                converter.convert(view).await;
                pb.finish_and_clear();
            }
        }

        view.render();
    }

    Ok(())
}
