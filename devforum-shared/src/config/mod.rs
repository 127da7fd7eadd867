//! # Configuration
//!
//! Client configuration shared by the web and CLI front ends.

pub mod client;

pub use client::{ClientConfig, ConfigError};
