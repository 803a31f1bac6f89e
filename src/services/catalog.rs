use crate::models::Festival;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading the festival catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),
}

/// Immutable festival catalog
///
/// Loaded once at start-up and shared read-only between workers.
/// Cloning is cheap (the festival list sits behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Catalog {
    festivals: Arc<[Festival]>,
    skipped: usize,
}

impl Catalog {
    /// Load the catalog from a JSON file containing an array of festivals
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;

        tracing::info!(
            "Loaded {} festivals from {} ({} skipped)",
            catalog.len(),
            path.display(),
            catalog.skipped()
        );

        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Array(records) => Ok(Self::from_records(records)),
            other => Err(CatalogError::InvalidFormat(format!(
                "expected a JSON array of festivals, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build a catalog from raw JSON records
    ///
    /// Each record is parsed and validated on its own. Malformed records and
    /// duplicate ids are skipped with a warning; the first occurrence of an
    /// id wins. Catalog order is preserved.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut festivals = Vec::with_capacity(records.len());
        let mut seen_ids = HashSet::new();
        let mut skipped = 0;

        for (index, record) in records.into_iter().enumerate() {
            let festival = match serde_json::from_value::<Festival>(record) {
                Ok(festival) => festival,
                Err(e) => {
                    tracing::warn!("Skipping catalog record {}: {}", index, e);
                    skipped += 1;
                    continue;
                }
            };

            if let Err(errors) = festival.validate() {
                tracing::warn!(
                    "Skipping catalog record {} ('{}'): {}",
                    index,
                    festival.id,
                    errors
                );
                skipped += 1;
                continue;
            }

            if !seen_ids.insert(festival.id.clone()) {
                tracing::warn!(
                    "Skipping catalog record {}: duplicate id '{}'",
                    index,
                    festival.id
                );
                skipped += 1;
                continue;
            }

            festivals.push(festival);
        }

        if festivals.is_empty() {
            tracing::warn!("Festival catalog is empty, every match request will return no results");
        }

        Self {
            festivals: festivals.into(),
            skipped,
        }
    }

    pub fn festivals(&self) -> &[Festival] {
        &self.festivals
    }

    pub fn len(&self) -> usize {
        self.festivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.festivals.is_empty()
    }

    /// Records dropped during loading
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
