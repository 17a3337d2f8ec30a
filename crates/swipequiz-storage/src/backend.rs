//! Key-value backend abstraction

use crate::Result;

/// Raw string key-value storage.
///
/// Implementations must leave existing contents untouched when a write fails.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Write several keys at once. Either every entry is stored or none is.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<()>;
}
