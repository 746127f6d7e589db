//! Chat rules lookup

use std::path::PathBuf;

use async_trait::async_trait;

use crate::utils::errors::{ChatWardenError, Result};

/// Read-only source of the chat rules document.
#[async_trait]
pub trait RulesProvider: Send + Sync {
    async fn rules_text(&self) -> Result<String>;
}

/// Serves the rules from a UTF-8 text file.
pub struct FileRulesProvider {
    path: PathBuf,
}

impl FileRulesProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RulesProvider for FileRulesProvider {
    async fn rules_text(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ChatWardenError::NotFound("rules document".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
