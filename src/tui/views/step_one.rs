//! Step one of the receipt wizard
//!
//! Collects the purchase date, store location, and an optional path to a
//! photo of the receipt. Submitting with a photo kicks off background
//! recognition; submitting without one advances straight to the item editor.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::settings::Settings;
use crate::models::StepOneData;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::widgets::input::TextInput;
use crate::wizard::StepOneOutcome;

use super::render_field;

/// Which field is currently focused in the step one form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepOneField {
    #[default]
    Date,
    Location,
    Image,
}

impl StepOneField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Location,
            Self::Location => Self::Image,
            Self::Image => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Image,
            Self::Location => Self::Date,
            Self::Image => Self::Location,
        }
    }
}

/// State for the step one form
#[derive(Debug, Clone)]
pub struct StepOneFormState {
    /// Currently focused field
    pub focused_field: StepOneField,

    /// Purchase date input
    pub date_input: TextInput,

    /// Store location input
    pub location_input: TextInput,

    /// Receipt photo path input
    pub image_input: TextInput,
}

impl StepOneFormState {
    /// Create a new form state with placeholders derived from settings
    pub fn new(settings: &Settings) -> Self {
        // Show the configured strftime pattern as a YYYY-MM-DD style hint
        let date_hint = settings
            .date_format
            .replace("%Y", "YYYY")
            .replace("%m", "MM")
            .replace("%d", "DD");

        Self {
            focused_field: StepOneField::Date,
            date_input: TextInput::new().placeholder(date_hint),
            location_input: TextInput::new().placeholder("Store name or address"),
            image_input: TextInput::new().placeholder("Path to receipt photo (optional)"),
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            StepOneField::Date => &mut self.date_input,
            StepOneField::Location => &mut self.location_input,
            StepOneField::Image => &mut self.image_input,
        }
    }

    /// Collect the entered values
    pub fn data(&self) -> StepOneData {
        StepOneData::new(
            self.date_input.value().trim(),
            self.location_input.value().trim(),
        )
    }

    /// The receipt photo path, if one was entered
    pub fn image(&self) -> Option<PathBuf> {
        let raw = self.image_input.value().trim();
        if raw.is_empty() {
            None
        } else {
            Some(PathBuf::from(raw))
        }
    }
}

/// Render the step one form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Receipt Details (Step 1 of 2) ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Date
            Constraint::Length(1), // Location
            Constraint::Length(1), // Image
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Recognition progress
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    // Extract values we need from form (to avoid borrow conflicts)
    let date_value = app.step_one_form.date_input.value().to_string();
    let date_focused = app.step_one_form.focused_field == StepOneField::Date;
    let date_cursor = app.step_one_form.date_input.cursor;
    let date_placeholder = app.step_one_form.date_input.placeholder.clone();

    let location_value = app.step_one_form.location_input.value().to_string();
    let location_focused = app.step_one_form.focused_field == StepOneField::Location;
    let location_cursor = app.step_one_form.location_input.cursor;
    let location_placeholder = app.step_one_form.location_input.placeholder.clone();

    let image_value = app.step_one_form.image_input.value().to_string();
    let image_focused = app.step_one_form.focused_field == StepOneField::Image;
    let image_cursor = app.step_one_form.image_input.cursor;
    let image_placeholder = app.step_one_form.image_input.placeholder.clone();

    let intro = Line::from(Span::styled(
        "Where and when was this receipt from?",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(intro), chunks[0]);

    render_field(
        frame,
        chunks[2],
        "Date",
        &date_value,
        date_focused,
        date_cursor,
        &date_placeholder,
    );

    render_field(
        frame,
        chunks[3],
        "Location",
        &location_value,
        location_focused,
        location_cursor,
        &location_placeholder,
    );

    render_field(
        frame,
        chunks[4],
        "Photo",
        &image_value,
        image_focused,
        image_cursor,
        &image_placeholder,
    );

    // Progress line while a recognition job is running
    if app.wizard.is_recognizing() {
        let busy = Line::from(Span::styled(
            "Reading the receipt photo...",
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(Paragraph::new(busy), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Continue  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Handle key input for step one
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.step_one_form;

    match key.code {
        KeyCode::Esc => {
            app.open_dialog(ActiveDialog::ConfirmQuit);
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            submit(app);
            return true;
        }

        KeyCode::Backspace => {
            form.focused_input().backspace();
            return true;
        }

        KeyCode::Delete => {
            form.focused_input().delete();
            return true;
        }

        KeyCode::Left => {
            form.focused_input().move_left();
            return true;
        }

        KeyCode::Right => {
            form.focused_input().move_right();
            return true;
        }

        KeyCode::Home => {
            form.focused_input().move_start();
            return true;
        }

        KeyCode::End => {
            form.focused_input().move_end();
            return true;
        }

        KeyCode::Char(c) => {
            form.focused_input().insert(c);
            return true;
        }

        _ => {}
    }

    false
}

/// Submit step one through the wizard
fn submit(app: &mut App) {
    let data = app.step_one_form.data();
    let image = app.step_one_form.image();

    match app.wizard.submit_step_one(data, image) {
        StepOneOutcome::Advanced => {
            app.enter_step_two();
            app.set_status("Details captured, now add the items");
        }
        StepOneOutcome::RecognitionStarted(image) => {
            app.set_status("Reading the receipt photo...");
            app.spawn_recognition(image);
        }
        StepOneOutcome::Rejected => {
            app.set_status("Still reading the receipt photo");
        }
    }
}
