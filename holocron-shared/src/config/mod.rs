//! # Configuration
//!
//! Client endpoints and logging settings shared by the web app and the CLI.

pub mod client;

pub use client::{ClientConfig, ConfigError};
