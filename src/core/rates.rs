//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Rates from one base currency to all targets the provider knows,
/// as returned by a single fetch. Never cached between conversions.
#[derive(Debug, Clone)]
pub struct RateTable {
    pub base: String,
    pub date: Option<NaiveDate>,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    /// Exact lookup of the rate to `target`. No cross-rate derivation,
    /// no inversion fallback.
    pub fn rate_to(&self, target: &str) -> Option<f64> {
        self.rates.get(&target.to_lowercase()).copied()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the full rate table for `base` (lowercase currency code).
    async fn fetch_table(&self, base: &str) -> Result<RateTable>;
}
