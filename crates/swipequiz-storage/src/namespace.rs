//! JSON namespaces over a key-value backend

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::memory::MemoryBackend;
use crate::Result;

/// A named storage area holding JSON values by key.
///
/// Clones share the same backend.
#[derive(Clone)]
pub struct Namespace {
    name: &'static str,
    backend: Arc<dyn KeyValueBackend>,
}

impl Namespace {
    pub fn new(name: &'static str, backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { name, backend }
    }

    /// Raw stored text, if any
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        self.backend.get(key)
    }

    /// Read and decode a value.
    ///
    /// A value that no longer parses is reported as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    namespace = self.name,
                    key = %key,
                    error = %e,
                    "Ignoring unreadable stored value"
                );
                Ok(None)
            }
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// Encode every value first, then write them in one atomic batch
    pub fn set_many_json(&self, entries: &[(&str, &dyn JsonValue)]) -> Result<()> {
        let mut encoded = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            encoded.push((*key, value.to_json()?));
        }
        self.backend.set_many(&encoded)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namespace").field("name", &self.name).finish()
    }
}

/// Object-safe view of a serializable value
pub trait JsonValue {
    fn to_json(&self) -> Result<String>;
}

impl<T: Serialize> JsonValue for T {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The durable and session namespaces used by the app
#[derive(Debug, Clone)]
pub struct Storage {
    pub durable: Namespace,
    pub session: Namespace,
}

impl Storage {
    pub fn new(durable: Arc<dyn KeyValueBackend>, session: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            durable: Namespace::new("durable", durable),
            session: Namespace::new("session", session),
        }
    }

    /// Both namespaces in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), Arc::new(MemoryBackend::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_json_round_trip() {
        let ns = Namespace::new("durable", Arc::new(MemoryBackend::new()));
        let items = vec![Item {
            name: "one".to_string(),
        }];

        ns.set_json("items", &items).unwrap();
        assert_eq!(ns.get_raw("items").unwrap().as_deref(), Some(r#"[{"name":"one"}]"#));

        let loaded: Vec<Item> = ns.get_json("items").unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let backend = MemoryBackend::new();
        backend.set("items", "{not json").unwrap();

        let ns = Namespace::new("durable", Arc::new(backend));
        let loaded: Option<Vec<Item>> = ns.get_json("items").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_set_many_json_on_database() {
        let db = Database::open_in_memory().unwrap();
        let ns = Namespace::new("durable", Arc::new(db.clone()));

        let names = vec!["a".to_string()];
        let counts = vec![1u32, 2];
        ns.set_many_json(&[("names", &names), ("counts", &counts)])
            .unwrap();

        assert_eq!(db.get("names").unwrap().as_deref(), Some(r#"["a"]"#));
        assert_eq!(db.get("counts").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_storage_namespaces_are_independent() {
        let storage = Storage::in_memory();
        storage.session.set_json("k", &1).unwrap();

        assert_eq!(storage.durable.get_raw("k").unwrap(), None);
        assert_eq!(storage.session.get_json::<i32>("k").unwrap(), Some(1));
    }
}
