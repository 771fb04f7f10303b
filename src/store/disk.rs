use crate::core::prefs::{PreferenceStore, Preferences};
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;

/// Preference store backed by a fjall keyspace under the data dir.
/// Keys are `from`, `to` and `amount`, values are the raw form strings.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open keyspace at {}", path.display()))?;
        let partition = keyspace
            .open_partition("preferences", PartitionCreateOptions::default())
            .context("Failed to open preferences partition")?;

        Ok(Self {
            keyspace,
            partition,
        })
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .partition
            .get(key)?
            .map(|slice| String::from_utf8_lossy(&slice).into_owned()))
    }
}

#[async_trait]
impl PreferenceStore for DiskStore {
    async fn get(&self) -> Result<Preferences> {
        Ok(Preferences {
            from: self.read_key("from")?,
            to: self.read_key("to")?,
            amount: self.read_key("amount")?,
        })
    }

    async fn set(&self, prefs: &Preferences) -> Result<()> {
        for (key, value) in [
            ("from", &prefs.from),
            ("to", &prefs.to),
            ("amount", &prefs.amount),
        ] {
            if let Some(value) = value {
                self.partition.insert(key, value.as_bytes())?;
            }
        }
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
