//! receipt-cli - Terminal-based grocery receipt entry
//!
//! This library provides the core functionality for the receipt-cli entry
//! tool. Receipts are entered through a two-step wizard: purchase details
//! first (date, store, optional photo), then the item list. A photo is read
//! by an external OCR command in the background, and whatever it recognizes
//! fills in fields the user left blank.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (steps, items, prices, parsed photo data)
//! - `recognition`: OCR invocation and field extraction
//! - `session`: Session log entries and the JSONL logger
//! - `submit`: Where finished receipts are dispatched
//! - `wizard`: The two-step entry state machine
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use receipt_cli::config::{paths::ReceiptPaths, settings::Settings};
//!
//! let paths = ReceiptPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod recognition;
pub mod session;
pub mod submit;
pub mod tui;
pub mod wizard;

pub use error::ReceiptError;
