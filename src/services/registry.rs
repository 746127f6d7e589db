//! Two-tier admin registry
//!
//! Technical admins come from configuration and never change at runtime.
//! Ordinary admins are managed through bot commands and persisted through
//! the injected [`AdminStore`]. Mutations run under a single write lock
//! spanning read-mutate-persist-publish, so concurrent admin-management
//! commands cannot lose updates; a failed save leaves the in-memory set
//! unchanged.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::storage::AdminStore;
use crate::utils::errors::{ChatWardenError, Result};

pub struct AdminRegistry {
    technical: Vec<i64>,
    technical_lookup: HashSet<i64>,
    ordinary: RwLock<Vec<i64>>,
    store: Arc<dyn AdminStore>,
}

impl AdminRegistry {
    /// Load the registry, reading the persisted ordinary-admin set once.
    pub async fn load(technical: Vec<i64>, store: Arc<dyn AdminStore>) -> Result<Self> {
        let ordinary = store.load().await?;
        info!(
            technical = technical.len(),
            ordinary = ordinary.len(),
            "Admin registry loaded"
        );

        let technical_lookup = technical.iter().copied().collect();
        Ok(Self {
            technical,
            technical_lookup,
            ordinary: RwLock::new(ordinary),
            store,
        })
    }

    /// Whether the user is any kind of admin.
    pub async fn is_admin(&self, user_id: i64) -> bool {
        self.technical_lookup.contains(&user_id) || self.ordinary.read().await.contains(&user_id)
    }

    /// Whether the user is a configuration-time technical admin.
    pub fn is_technical_admin(&self, user_id: i64) -> bool {
        self.technical_lookup.contains(&user_id)
    }

    /// Grant ordinary-admin status.
    ///
    /// The new set is persisted before the in-memory copy is updated, so a
    /// failed save changes nothing.
    pub async fn add_ordinary(&self, user_id: i64) -> Result<()> {
        let mut ordinary = self.ordinary.write().await;
        if self.technical_lookup.contains(&user_id) || ordinary.contains(&user_id) {
            return Err(ChatWardenError::AlreadyExists(format!(
                "user {user_id} is already an admin"
            )));
        }

        let mut next = ordinary.clone();
        next.push(user_id);
        self.store.save(&next).await?;
        *ordinary = next;

        info!(user_id = user_id, "Ordinary admin added");
        Ok(())
    }

    /// Revoke ordinary-admin status.
    ///
    /// Technical admins are immune regardless of membership history.
    pub async fn remove_ordinary(&self, user_id: i64) -> Result<()> {
        if self.technical_lookup.contains(&user_id) {
            return Err(ChatWardenError::TechnicalAdminImmutable { user_id });
        }

        let mut ordinary = self.ordinary.write().await;
        if !ordinary.contains(&user_id) {
            return Err(ChatWardenError::NotFound(format!(
                "user {user_id} is not an admin"
            )));
        }

        let next: Vec<i64> = ordinary
            .iter()
            .copied()
            .filter(|id| *id != user_id)
            .collect();
        self.store.save(&next).await?;
        *ordinary = next;

        info!(user_id = user_id, "Ordinary admin removed");
        Ok(())
    }

    /// Both tiers in stable order: technical in configuration order,
    /// ordinary in insertion order.
    pub async fn list_all(&self) -> (Vec<i64>, Vec<i64>) {
        (self.technical.clone(), self.ordinary.read().await.clone())
    }

    /// Every admin id, technical tier first, without duplicates. Used for
    /// the /report fan-out.
    pub async fn all_admin_ids(&self) -> Vec<i64> {
        let ordinary = self.ordinary.read().await;
        let mut ids = self.technical.clone();
        for id in ordinary.iter() {
            if !self.technical_lookup.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}
