use super::ui::{self, StyleType};
use crate::core::format::ERROR_RESULT;
use crate::core::view::ConverterView;
use std::sync::Mutex;

/// Terminal-backed view. Form state lives here; the converter reads
/// and writes it through the `ConverterView` trait. Rendered text is
/// buffered so callers can run a spinner around the conversion and
/// print afterwards.
pub struct TermView {
    state: Mutex<FormState>,
}

#[derive(Default)]
struct FormState {
    amount: String,
    from: String,
    to: String,
    result: String,
    rate_info: String,
}

impl TermView {
    pub fn new(amount: &str, from: &str, to: &str) -> Self {
        Self {
            state: Mutex::new(FormState {
                amount: amount.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                ..Default::default()
            }),
        }
    }

    /// One-line summary of the current form, used as the REPL prompt.
    pub fn prompt(&self) -> String {
        let state = self.state.lock().unwrap();
        format!(
            "{} {} -> {}",
            state.amount,
            state.from.to_uppercase(),
            state.to.to_uppercase()
        )
    }

    /// Prints the buffered result and rate-info lines.
    pub fn render(&self) {
        let state = self.state.lock().unwrap();
        if state.result.is_empty() {
            return;
        }
        let result_style = if state.result == ERROR_RESULT {
            StyleType::Error
        } else {
            StyleType::Result
        };
        println!("{}", ui::style_text(&state.result, result_style));
        if !state.rate_info.is_empty() {
            println!("{}", ui::style_text(&state.rate_info, StyleType::RateInfo));
        }
    }
}

impl ConverterView for TermView {
    fn amount(&self) -> String {
        self.state.lock().unwrap().amount.clone()
    }

    fn from_currency(&self) -> String {
        self.state.lock().unwrap().from.clone()
    }

    fn to_currency(&self) -> String {
        self.state.lock().unwrap().to.clone()
    }

    fn set_amount(&self, value: &str) {
        self.state.lock().unwrap().amount = value.to_string();
    }

    fn set_from_currency(&self, code: &str) {
        self.state.lock().unwrap().from = code.to_string();
    }

    fn set_to_currency(&self, code: &str) {
        self.state.lock().unwrap().to = code.to_string();
    }

    fn set_result(&self, text: &str) {
        self.state.lock().unwrap().result = text.to_string();
    }

    fn set_rate_info(&self, text: &str) {
        self.state.lock().unwrap().rate_info = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_fields_round_trip() {
        let view = TermView::new("100", "USD", "NGN");
        assert_eq!(view.amount(), "100");
        assert_eq!(view.from_currency(), "USD");
        assert_eq!(view.to_currency(), "NGN");

        view.set_amount("25");
        view.set_from_currency("EUR");
        view.set_to_currency("JPY");
        assert_eq!(view.prompt(), "25 EUR -> JPY");
    }

    #[test]
    fn test_result_and_rate_info_are_buffered() {
        let view = TermView::new("100", "USD", "NGN");
        view.set_result("1,530.25 NGN");
        view.set_rate_info("1 USD = 1530.2500 NGN");

        let state = view.state.lock().unwrap();
        assert_eq!(state.result, "1,530.25 NGN");
        assert_eq!(state.rate_info, "1 USD = 1530.2500 NGN");
    }
}
