use crate::core::prefs::{PreferenceStore, Preferences};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory preference store. Used in tests and as a session-local
/// fallback when the disk store cannot be opened.
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self) -> Result<Preferences> {
        let map = self.inner.lock().await;
        Ok(Preferences {
            from: map.get("from").cloned(),
            to: map.get("to").cloned(),
            amount: map.get("amount").cloned(),
        })
    }

    async fn set(&self, prefs: &Preferences) -> Result<()> {
        let mut map = self.inner.lock().await;
        for (key, value) in [
            ("from", &prefs.from),
            ("to", &prefs.to),
            ("amount", &prefs.amount),
        ] {
            if let Some(value) = value {
                map.insert(key.to_string(), value.clone());
            }
        }
        Ok(())
    }
}
