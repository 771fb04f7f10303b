pub mod convert;
pub mod rates;
pub mod repl;
pub mod setup;
pub mod ui;
pub mod view;
