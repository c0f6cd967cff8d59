//! Ports (Hexagonal Architecture)
//!
//! Interfaces the infrastructure layer implements.

pub mod outbound;

pub use outbound::{LeadBackupStore, NotificationError, NotificationSender, StoreError};
