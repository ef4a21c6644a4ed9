//! Recognition failure dialog
//!
//! Shown when the receipt photo could not be read. The only way forward is
//! an explicit retry, which clears the failure and returns to step one with
//! everything the user typed still in place.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the recognition failure dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(54, 8, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Recognition Failed ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The receipt photo could not be read.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Check the path or try a clearer photo.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Try again"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
