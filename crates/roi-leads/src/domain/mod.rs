//! Domain layer

pub mod lead;
pub mod value_objects;

pub use lead::{Lead, QuoteSnapshot, SubmitLeadCommand};
pub use value_objects::{Email, EmailError, LeadId};
