//! Dialog modules for the TUI
//!
//! Contains modal dialogs layered over the wizard

pub mod confirm_quit;
pub mod help;
pub mod parsing_error;
