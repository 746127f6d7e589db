//! Durable storage for the ordinary-admin set
//!
//! The registry persists the runtime-managed admin list through this port;
//! the production implementation keeps a single JSON array on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use crate::utils::errors::Result;

/// Durable backing store for the runtime-managed admin list.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Load the persisted admin ids, in insertion order.
    async fn load(&self) -> Result<Vec<i64>>;

    /// Persist the full admin list, replacing the previous contents.
    async fn save(&self, admins: &[i64]) -> Result<()>;
}

/// JSON-file-backed [`AdminStore`]: one array of user ids.
pub struct JsonAdminStore {
    path: PathBuf,
}

impl JsonAdminStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AdminStore for JsonAdminStore {
    async fn load(&self) -> Result<Vec<i64>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(admins) => Ok(admins),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err,
                      "Admin file is corrupt, starting with an empty list");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, admins: &[i64]) -> Result<()> {
        let raw = serde_json::to_string_pretty(admins)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}
