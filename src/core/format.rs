//! Display formatting for conversion output

/// Rendered when the amount is empty or not a positive number.
pub const ZERO_SENTINEL: &str = "0.00";

/// Rendered in the result field on any caught failure.
pub const ERROR_RESULT: &str = "Error";

/// Rendered in the rate-info field on any caught failure.
pub const ERROR_HINT: &str = "Check your connection or currency codes.";

// Fixed symbol table; codes without an entry fall back to no prefix.
const SYMBOLS: &[(&str, &str)] = &[
    ("usd", "$"),
    ("eur", "€"),
    ("gbp", "£"),
    ("jpy", "¥"),
    ("cny", "¥"),
    ("inr", "₹"),
    ("ngn", "₦"),
    ("krw", "₩"),
    ("rub", "₽"),
    ("try", "₺"),
    ("php", "₱"),
    ("vnd", "₫"),
    ("brl", "R$"),
];

pub fn symbol_for(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, symbol)| *symbol)
}

/// Formats the converted amount with two fraction digits, comma
/// grouping and the uppercase target code, e.g. `1,530.25 NGN`. With
/// `symbols` the prefix comes from the symbol table: `₦ 1,530.25 NGN`.
pub fn format_result(converted: f64, to: &str, symbols: bool) -> String {
    let code = to.to_uppercase();
    let grouped = group_thousands(converted);
    match symbols.then(|| symbol_for(to)).flatten() {
        Some(symbol) => format!("{symbol} {grouped} {code}"),
        None => format!("{grouped} {code}"),
    }
}

/// The unit-rate line, e.g. `1 USD = 1530.2500 NGN`.
pub fn format_rate_line(from: &str, rate: f64, to: &str) -> String {
    format!(
        "1 {} = {rate:.4} {}",
        from.to_uppercase(),
        to.to_uppercase()
    )
}

/// Two fraction digits with comma separators every three integer
/// digits: `1530.25` -> `1,530.25`.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.5), "0.50");
        assert_eq!(group_thousands(100.0), "100.00");
        assert_eq!(group_thousands(1530.25), "1,530.25");
        assert_eq!(group_thousands(999.999), "1,000.00");
        assert_eq!(group_thousands(1234567.891), "1,234,567.89");
        assert_eq!(group_thousands(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_result_without_symbols() {
        assert_eq!(format_result(1530.25, "ngn", false), "1,530.25 NGN");
        assert_eq!(format_result(92.0, "eur", false), "92.00 EUR");
    }

    #[test]
    fn test_format_result_with_symbols() {
        assert_eq!(format_result(1530.25, "ngn", true), "₦ 1,530.25 NGN");
        assert_eq!(format_result(42.0, "usd", true), "$ 42.00 USD");
    }

    #[test]
    fn test_format_result_symbol_fallback() {
        // No table entry: code suffix only, no prefix
        assert_eq!(format_result(10.0, "chf", true), "10.00 CHF");
    }

    #[test]
    fn test_format_rate_line() {
        assert_eq!(
            format_rate_line("usd", 1530.25, "ngn"),
            "1 USD = 1530.2500 NGN"
        );
        assert_eq!(format_rate_line("eur", 0.92, "usd"), "1 EUR = 0.9200 USD");
    }
}
