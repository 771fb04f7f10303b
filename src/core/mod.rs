//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod converter;
pub mod format;
pub mod log;
pub mod prefs;
pub mod rates;
pub mod view;

// Re-export main types for cleaner imports
pub use convert::{ConversionRequest, ConversionResult};
pub use converter::Converter;
pub use prefs::{PreferenceStore, Preferences};
pub use rates::{RateProvider, RateTable};
pub use view::ConverterView;
