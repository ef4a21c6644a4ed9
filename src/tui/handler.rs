//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or wizard step, and folds
//! finished recognition jobs back into the wizard.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::views::{step_one, step_two};
use crate::error::ReceiptResult;
use crate::models::ParsedData;
use crate::wizard::WizardStep;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Recognition(result) => {
            handle_recognition_result(app, result);
            Ok(())
        }
        Event::Mouse(_mouse) => {
            // Mouse handling can be added later
            Ok(())
        }
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Help works from both steps. F1 rather than a character key because
    // every printable character belongs to the focused text field.
    if key.code == KeyCode::F(1) {
        app.open_dialog(ActiveDialog::Help);
        return Ok(());
    }

    match app.wizard.step() {
        WizardStep::StepOne => {
            step_one::handle_key(app, key);
        }
        WizardStep::StepTwo => {
            step_two::handle_key(app, key);
        }
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.quit();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::ParsingError => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Esc => {
                app.wizard.retry_parsing();
                app.close_dialog();
                app.clear_status();
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Fold a finished recognition job back into the wizard
fn handle_recognition_result(app: &mut App, result: ReceiptResult<ParsedData>) {
    let was_recognizing = app.wizard.is_recognizing();
    let succeeded = result.is_ok();

    app.wizard.complete_recognition(result);

    // A result the wizard did not ask for changes nothing
    if !was_recognizing {
        return;
    }

    if succeeded && app.wizard.step() == WizardStep::StepTwo {
        app.enter_step_two();
        app.set_status("Receipt photo read");
    } else if app.wizard.parsing_error() {
        app.clear_status();
        app.open_dialog(ActiveDialog::ParsingError);
    }
}
