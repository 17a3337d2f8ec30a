//! Store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] swipequiz_storage::StorageError),
}

/// Required text fields left blank, reported before anything is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("required fields are empty: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }
}
