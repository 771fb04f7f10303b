//! The conversion flow: read inputs, validate, fetch, compute, format,
//! render, persist.

use crate::core::convert::{ConversionRequest, ConversionResult};
use crate::core::format::{ERROR_HINT, ERROR_RESULT, ZERO_SENTINEL, format_rate_line, format_result};
use crate::core::prefs::{PreferenceStore, Preferences};
use crate::core::rates::RateProvider;
use crate::core::view::ConverterView;
use anyhow::{Result, anyhow};
use std::sync::Arc;
use tracing::{debug, error};

pub struct Converter {
    provider: Arc<dyn RateProvider>,
    store: Option<Arc<dyn PreferenceStore>>,
    symbols: bool,
}

impl Converter {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        store: Option<Arc<dyn PreferenceStore>>,
        symbols: bool,
    ) -> Self {
        Self {
            provider,
            store,
            symbols,
        }
    }

    /// Runs one conversion against the view. Never fails: an invalid
    /// amount renders the zero sentinel without touching the network,
    /// and every fetch/decode/lookup failure collapses into the same
    /// two error strings.
    pub async fn convert(&self, view: &dyn ConverterView) {
        let amount = view.amount();
        let from = view.from_currency();
        let to = view.to_currency();

        let Some(request) = ConversionRequest::parse(&amount, &from, &to) else {
            view.set_result(ZERO_SENTINEL);
            return;
        };

        match self.fetch_and_convert(&request).await {
            Ok(result) => {
                view.set_result(&format_result(result.converted, &request.to, self.symbols));
                view.set_rate_info(&format_rate_line(&request.from, result.rate, &request.to));

                // Last-used values are only worth keeping once they
                // produced a result.
                if let Some(store) = &self.store {
                    let prefs = Preferences {
                        from: Some(from),
                        to: Some(to),
                        amount: Some(amount),
                    };
                    if let Err(e) = store.set(&prefs).await {
                        debug!(error = %e, "Failed to persist preferences");
                    }
                }
            }
            Err(e) => {
                error!(error = %e, from = %request.from, to = %request.to, "Conversion failed");
                view.set_result(ERROR_RESULT);
                view.set_rate_info(ERROR_HINT);
            }
        }
    }

    /// Exchanges the from/to selectors, then converts once with the
    /// swapped values.
    pub async fn swap(&self, view: &dyn ConverterView) {
        let from = view.from_currency();
        let to = view.to_currency();
        view.set_from_currency(&to);
        view.set_to_currency(&from);
        self.convert(view).await;
    }

    /// Restores persisted preferences into the view (each present
    /// field), then runs the first conversion. Without a store this is
    /// just a conversion with whatever defaults the view holds.
    pub async fn init(&self, view: &dyn ConverterView) {
        if let Some(store) = &self.store {
            match store.get().await {
                Ok(prefs) => {
                    if let Some(from) = &prefs.from {
                        view.set_from_currency(from);
                    }
                    if let Some(to) = &prefs.to {
                        view.set_to_currency(to);
                    }
                    if let Some(amount) = &prefs.amount {
                        view.set_amount(amount);
                    }
                }
                Err(e) => debug!(error = %e, "Failed to restore preferences"),
            }
        }
        self.convert(view).await;
    }

    async fn fetch_and_convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        let table = self.provider.fetch_table(&request.from).await?;
        let rate = table.rate_to(&request.to).ok_or_else(|| {
            anyhow!("No rate from {} to {} in provider table", request.from, request.to)
        })?;
        Ok(request.apply_rate(rate))
    }
}
