//! Outbound ports

use async_trait::async_trait;
use thiserror::Error;

use crate::application::NotificationMessage;
use crate::domain::{Lead, LeadId};

/// Delivers one notification message
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError>;
}

/// Keeps leads whose delivery did not go through, for manual follow-up
#[async_trait]
pub trait LeadBackupStore: Send + Sync {
    /// Save lead (insert or replace)
    async fn retain(&self, lead: &Lead) -> Result<(), StoreError>;

    async fn get(&self, id: &LeadId) -> Result<Option<Lead>, StoreError>;

    /// All retained leads, oldest first
    async fn list(&self) -> Result<Vec<Lead>, StoreError>;
}

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("sender not configured: {0}")]
    NotConfigured(String),
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
