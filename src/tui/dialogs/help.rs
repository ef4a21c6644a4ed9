//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::wizard::WizardStep;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Build help text based on current step
    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current step
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("Esc", "Quit (asks first)"),
        key_line("F1", "Show/hide help"),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
        key_line("Left/Right", "Move cursor"),
        key_line("Home/End", "Jump to start/end of field"),
        Line::from(""),
    ];

    // Step-specific help
    match app.wizard.step() {
        WizardStep::StepOne => {
            lines.push(Line::from(vec![Span::styled(
                "Receipt Details",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Continue to the item editor"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "The photo path is optional. With one, the photo is read in",
            ));
            lines.push(Line::from(
                "the background and fills in blank fields when it succeeds.",
            ));
            lines.push(Line::from("Anything you typed always wins."));
        }
        WizardStep::StepTwo => {
            lines.push(Line::from(vec![Span::styled(
                "Item Editor",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Add the current row to the list"));
            lines.push(key_line("Ctrl+S", "Submit the whole receipt"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Quantity must be a whole number of at least 1 and price a",
            ));
            lines.push(Line::from(
                "plain amount like 3.50. Rows that do not parse are ignored.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Format a key binding line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
