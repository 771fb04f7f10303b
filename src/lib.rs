pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::prefs::PreferenceStore;
use crate::core::{Converter, RateProvider};
use crate::providers::CurrencyApiProvider;
use crate::store::DiskStore;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: Option<String>,
        from: Option<String>,
        to: Option<String>,
        swapped: bool,
    },
    Rates {
        base: String,
        targets: Vec<String>,
    },
    Interactive,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider: Arc<dyn RateProvider> = Arc::new(CurrencyApiProvider::new(config.base_url()));
    let store = open_store(&config);
    let converter = Converter::new(Arc::clone(&provider), store, config.symbols);

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            swapped,
        } => {
            let amount = amount.unwrap_or_else(|| config.defaults.amount.clone());
            let from = from.unwrap_or_else(|| config.defaults.from.clone());
            let to = to.unwrap_or_else(|| config.defaults.to.clone());
            cli::convert::run(&converter, &amount, &from, &to, swapped).await
        }
        AppCommand::Rates { base, targets } => {
            cli::rates::run(provider.as_ref(), &base, &targets).await
        }
        AppCommand::Interactive => {
            let view = cli::view::TermView::new(
                &config.defaults.amount,
                &config.defaults.from,
                &config.defaults.to,
            );
            cli::repl::run(&converter, &view).await
        }
    }
}

/// The preference store is an optional capability: disabled in config
/// or unopenable means the converter simply runs without persistence.
fn open_store(config: &AppConfig) -> Option<Arc<dyn PreferenceStore>> {
    if !config.preferences {
        return None;
    }
    let path = match config.default_data_path() {
        Ok(path) => path,
        Err(e) => {
            debug!(error = %e, "No data path available, preferences disabled");
            return None;
        }
    };
    match DiskStore::open(&path) {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            debug!(error = %e, "Failed to open preference store, preferences disabled");
            None
        }
    }
}
