//! JSON file store backing the serve-mode API.
//!
//! Operates on loosely-typed `serde_json::Value`: the document is externally
//! shaped, and the API must round-trip fields it does not model.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct ResumeStore {
    path: PathBuf,
}

impl ResumeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Value, StoreError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn save(&self, data: &Value) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}
