//! TUI Views module
//!
//! Contains the two wizard steps and the status bar, plus the shared
//! form-field renderer both steps use.

pub mod status_bar;
pub mod step_one;
pub mod step_two;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::wizard::WizardStep;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render the active wizard step
    match app.wizard.step() {
        WizardStep::StepOne => {
            step_one::render(frame, app, layout.main);
        }
        WizardStep::StepTwo => {
            step_two::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::ParsingError => {
            dialogs::parsing_error::render(frame);
        }
        ActiveDialog::ConfirmQuit => {
            dialogs::confirm_quit::render(frame);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}

/// Render a single form field: right-aligned label, value, and a block
/// cursor when focused. The cursor is a character index into the value.
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    cursor: usize,
    placeholder: &str,
) {
    // Label
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let label_span = Span::styled(format!("{:>10}: ", label), label_style);

    // Value with cursor if focused
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let display_value = if value.is_empty() && !focused {
        placeholder.to_string()
    } else {
        value.to_string()
    };

    let mut spans = vec![label_span];

    if focused {
        // Show value with cursor, splitting on character positions
        let cursor_pos = cursor.min(display_value.chars().count());
        let before: String = display_value.chars().take(cursor_pos).collect();
        let cursor_char = display_value.chars().nth(cursor_pos).unwrap_or(' ');
        let after: String = display_value.chars().skip(cursor_pos + 1).collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
