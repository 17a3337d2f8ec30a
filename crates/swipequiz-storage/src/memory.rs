//! In-memory namespace
//!
//! Backs the session namespace. An optional byte quota mimics the limits a
//! browser puts on its storage areas.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::error::StorageError;
use crate::Result;

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryState {
    fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn check_available(&self) -> Result<()> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }

    /// Fails if writing `entries` would push usage past the quota
    fn check_quota(&self, entries: &[(&str, String)]) -> Result<()> {
        let Some(quota) = self.quota else {
            return Ok(());
        };

        let mut needed = self.used_bytes();
        for (key, value) in entries {
            if let Some(existing) = self.entries.get(*key) {
                needed = needed.saturating_sub(key.len() + existing.len());
            }
            needed += key.len() + value.len();
        }

        if needed > quota {
            return Err(StorageError::QuotaExceeded { needed, quota });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that rejects writes once `quota` bytes are stored
    pub fn with_quota(quota: usize) -> Self {
        let backend = Self::new();
        backend.state.lock().quota = Some(quota);
        backend
    }

    pub fn set_quota(&self, quota: Option<usize>) {
        self.state.lock().quota = quota;
    }

    /// Disabled storage fails every operation with `Unavailable`
    pub fn set_enabled(&self, enabled: bool) {
        self.state.lock().disabled = !enabled;
    }

    pub fn used_bytes(&self) -> usize {
        self.state.lock().used_bytes()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.lock();
        state.check_available()?;
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value.to_string())])
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.check_available()?;
        state.entries.remove(key);
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut state = self.state.lock();
        state.check_available()?;
        state.check_quota(entries)?;

        for (key, value) in entries {
            state.entries.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}

impl Clone for MemoryBackend {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
