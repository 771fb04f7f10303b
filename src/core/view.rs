//! View abstraction for the converter

/// The form the converter reads from and renders into. Implementations
/// own the field state (terminal session, test fake); the converter
/// only ever goes through this trait.
pub trait ConverterView: Send + Sync {
    fn amount(&self) -> String;
    fn from_currency(&self) -> String;
    fn to_currency(&self) -> String;

    fn set_amount(&self, value: &str);
    fn set_from_currency(&self, code: &str);
    fn set_to_currency(&self, code: &str);

    fn set_result(&self, text: &str);
    fn set_rate_info(&self, text: &str);
}
