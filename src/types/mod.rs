// Linkboard shared type definitions
// Each submodule defines types used across the application.

pub mod category;
pub mod config;
pub mod errors;
pub mod link;
pub mod listing;
