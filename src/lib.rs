//! Linkboard — a self-hosted bookmark manager with categories.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod request_handler;
pub mod services;
pub mod types;

#[cfg(feature = "server")]
pub mod http;
