//! CLI Commands

pub mod config;
pub mod estimate;
pub mod plans;
pub mod quote;
