//! Configuration module for receipt-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Application preferences

pub mod paths;
pub mod settings;

pub use paths::ReceiptPaths;
pub use settings::Settings;
