use super::ui;
use super::view::TermView;
use crate::core::Converter;
use anyhow::Result;

/// One-shot conversion: seed the view from the CLI arguments, run a
/// single conversion and print the rendered lines. `swapped` converts
/// the reverse direction through the swap operation.
pub async fn run(
    converter: &Converter,
    amount: &str,
    from: &str,
    to: &str,
    swapped: bool,
) -> Result<()> {
    let view = TermView::new(amount, from, to);

    let pb = ui::new_spinner("Fetching rates...");
    if swapped {
        converter.swap(&view).await;
    } else {
        converter.convert(&view).await;
    }
    pb.finish_and_clear();

    view.render();
    Ok(())
}
