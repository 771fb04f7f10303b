//! Preference persistence abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Last-used form values. Fields are independent; a store may hold any
/// subset. No schema versioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self) -> Result<Preferences>;
    async fn set(&self, prefs: &Preferences) -> Result<()>;
}
