//! Status bar view
//!
//! Shows the wizard step, session id, recognition progress, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::WizardStep;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    // Build status line
    let mut spans = vec![];

    // Current step
    let step_label = match app.wizard.step() {
        WizardStep::StepOne => " Step 1 of 2 ",
        WizardStep::StepTwo => " Step 2 of 2 ",
    };
    spans.push(Span::styled(
        step_label,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    // Separator
    spans.push(Span::raw("│ "));

    // Session id
    spans.push(Span::styled(
        app.wizard.session_id().to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    // Recognition progress
    if app.wizard.is_recognizing() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Recognizing...",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " Esc:Quit  F1:Help ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
