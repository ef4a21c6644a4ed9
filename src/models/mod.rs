//! Core data models for receipt-cli
//!
//! This module contains the data structures that represent the receipt
//! entry domain: prices, step captures, recognized overlays, and the
//! assembled receipt record.

pub mod price;
pub mod receipt;

pub use price::{Price, PriceParseError};
pub use receipt::{ItemRecord, ParsedData, ReceiptRecord, StepOneData, StepTwoData};
