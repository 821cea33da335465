//! # Persistence Collaborators
//!
//! The builder treats storage and media upload as external
//! collaborators behind traits. Production backends live with the host
//! application; the in-memory implementations here serve tests and
//! previews.
//!
//! Load runs the lenient coercion boundary, so a corrupt save degrades
//! to safe defaults instead of failing the whole page.

use bloq_model::{config_from_json, CompositionConfig};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Transient failures the user can retry; a missing page is not
    /// one of them.
    pub fn retryable(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}

/// Storage collaborator for composition configs.
pub trait PageStore {
    fn load(&self, page_id: &str) -> Result<CompositionConfig, StoreError>;
    fn save(&mut self, page_id: &str, config: &CompositionConfig) -> Result<(), StoreError>;
}

/// Media upload collaborator. The model only ever stores the returned
/// URL string, never binary data.
pub trait MediaStore {
    fn upload(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError>;
}

/// In-memory page store. Saves go through the JSON wire shape, so a
/// load observes exactly what a real backend would hand back.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a page with raw JSON, valid or not.
    pub fn with_page(mut self, page_id: impl Into<String>, value: Value) -> Self {
        self.pages.insert(page_id.into(), value);
        self
    }

    pub fn raw(&self, page_id: &str) -> Option<&Value> {
        self.pages.get(page_id)
    }
}

impl PageStore for MemoryStore {
    fn load(&self, page_id: &str) -> Result<CompositionConfig, StoreError> {
        let value = self
            .pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(page_id.to_string()))?;
        Ok(config_from_json(value))
    }

    fn save(&mut self, page_id: &str, config: &CompositionConfig) -> Result<(), StoreError> {
        self.pages.insert(page_id.to_string(), config.to_json());
        Ok(())
    }
}

/// In-memory media store returning deterministic public URLs.
#[derive(Debug)]
pub struct MemoryMediaStore {
    base_url: String,
    counter: u64,
}

impl MemoryMediaStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryMediaStore {
            base_url: base_url.into(),
            counter: 0,
        }
    }
}

impl MediaStore for MemoryMediaStore {
    fn upload(&mut self, file_name: &str, _bytes: &[u8]) -> Result<String, StoreError> {
        self.counter += 1;
        let safe_name: String = file_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '-' })
            .collect();
        Ok(format!("{}/{}-{}", self.base_url, self.counter, safe_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloq_model::{Block, BlockKind, LayoutMode};
    use serde_json::json;

    #[test]
    fn test_save_load_round_trip() {
        let mut store = MemoryStore::new();
        let mut config = CompositionConfig::new(LayoutMode::Freeform);
        config.blocks.push(Block::new(BlockKind::Header));
        config.blocks.push(Block::new(BlockKind::Button));

        store.save("landing", &config).unwrap();
        let loaded = store.load("landing").unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_page_is_not_retryable() {
        let store = MemoryStore::new();
        let error = store.load("nope").unwrap_err();
        assert!(matches!(error, StoreError::NotFound(_)));
        assert!(!error.retryable());
    }

    #[test]
    fn test_corrupt_page_loads_with_repairs() {
        let store = MemoryStore::new().with_page(
            "broken",
            json!({"mode": "freeform", "blocks": "not-an-array"}),
        );
        let loaded = store.load("broken").unwrap();
        assert_eq!(loaded.mode, LayoutMode::Freeform);
        assert!(loaded.blocks.is_empty());
    }

    #[test]
    fn test_media_upload_returns_stable_urls() {
        let mut media = MemoryMediaStore::new("https://cdn.example/media");
        let url = media.upload("hero image.jpg", &[1, 2, 3]).unwrap();
        assert_eq!(url, "https://cdn.example/media/1-hero-image.jpg");
    }
}
