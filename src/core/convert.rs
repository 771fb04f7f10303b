//! Conversion request parsing and arithmetic

/// A validated conversion. Currency codes are held lowercase for the
/// provider lookup; display labels are uppercased at format time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub converted: f64,
    pub rate: f64,
}

impl ConversionRequest {
    /// Builds a request from raw form values. Returns `None` when the
    /// amount is empty, non-numeric, non-finite or <= 0; callers render
    /// the zero sentinel for that case and skip the fetch entirely.
    pub fn parse(amount: &str, from: &str, to: &str) -> Option<Self> {
        let amount = parse_amount(amount)?;
        Some(Self {
            amount,
            from: from.trim().to_lowercase(),
            to: to.trim().to_lowercase(),
        })
    }

    /// Native floating point only; the display convention rounds to
    /// two decimals, nothing here guarantees more.
    pub fn apply_rate(&self, rate: f64) -> ConversionResult {
        ConversionResult {
            converted: self.amount * rate,
            rate,
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}
