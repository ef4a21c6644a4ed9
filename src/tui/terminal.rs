//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::paths::ReceiptPaths;
use crate::config::settings::Settings;
use crate::session::SessionLogger;
use crate::submit::CollectingSink;
use crate::wizard::ReceiptWizard;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the receipt entry TUI
///
/// Receipts submitted during the session are collected and printed as JSON
/// after the terminal is restored, so they can be piped onward.
pub fn run_tui(settings: &Settings, paths: &ReceiptPaths) -> Result<()> {
    let sink = CollectingSink::new();
    let logger = SessionLogger::new(paths.session_log());
    let wizard = ReceiptWizard::with_logger(Box::new(sink.clone()), logger);

    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create event handler
    let events = EventHandler::default();

    // Create app state
    let mut app = App::new(wizard, settings, events.sender());

    // Main event loop
    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        // Handle events
        handle_event(&mut app, events.next()?)?;

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    restore_terminal()?;

    // Print dispatched receipts now that the screen is back
    let records = sink.drain();
    if !records.is_empty() {
        let noun = if records.len() == 1 {
            "receipt"
        } else {
            "receipts"
        };
        println!("Submitted {} {} this session:", records.len(), noun);
        for record in records {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
