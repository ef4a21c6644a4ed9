//! Terminal User Interface module
//!
//! The interactive two-step receipt entry wizard, built on ratatui. Step
//! one collects the purchase details and optionally kicks off photo
//! recognition; step two is the item editor and final submission.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
