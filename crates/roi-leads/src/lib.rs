//! SupportROI Lead Capture
//!
//! Turns a calculator result into a qualified lead and delivers the quote.
//!
//! ## Architecture
//!
//! - **Domain Layer**: `Lead` aggregate, `QuoteSnapshot`, `Email` value object
//! - **Ports Layer**: notification sender and backup store interfaces
//! - **Application Layer**: `LeadCaptureService` orchestrating delivery
//! - **Infrastructure Layer**: EmailJS adapter, in-memory store, log sender
//!
//! Delivery failures never reach the prospect: the lead is acknowledged,
//! logged and retained for manual follow-up.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;

use thiserror::Error;

pub use application::{Acknowledgement, AckStatus, LeadCaptureService, NotificationMessage, MessageTemplate};
pub use config::{EmailJsConfig, LeadCaptureConfig};
pub use domain::{Email, EmailError, Lead, LeadId, QuoteSnapshot, SubmitLeadCommand};
pub use infrastructure::{EmailJsSender, InMemoryLeadStore, LoggingSender};
pub use ports::{LeadBackupStore, NotificationError, NotificationSender, StoreError};

/// Lead capture error types
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("backup store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LeadError>;
