//! Infrastructure adapters

pub mod emailjs;
pub mod logging;
pub mod memory;

pub use emailjs::EmailJsSender;
pub use logging::LoggingSender;
pub use memory::InMemoryLeadStore;
