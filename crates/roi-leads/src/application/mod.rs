//! Application layer

pub mod capture;
pub mod messages;

pub use capture::{Acknowledgement, AckStatus, LeadCaptureService};
pub use messages::{MessageTemplate, NotificationMessage};
