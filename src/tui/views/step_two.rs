//! Step two of the receipt wizard
//!
//! The item editor: one row of name/quantity/price inputs that appends to
//! the running item list on Enter. Rows that do not parse are dropped
//! without comment, matching paper-receipt entry where you just keep going.
//! Ctrl+S submits the whole receipt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{ItemRecord, Price, StepTwoData};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::widgets::input::TextInput;

use super::render_field;

/// Which field is currently focused in the item editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemField {
    #[default]
    Name,
    Quantity,
    Price,
}

impl ItemField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Price,
            Self::Price => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Quantity => Self::Name,
            Self::Price => Self::Quantity,
        }
    }
}

/// State for the step two item editor
#[derive(Debug, Clone)]
pub struct StepTwoFormState {
    /// Currently focused field
    pub focused_field: ItemField,

    /// Item name input
    pub name_input: TextInput,

    /// Quantity input, starts at 1
    pub quantity_input: TextInput,

    /// Price input
    pub price_input: TextInput,

    /// Items added so far
    pub items: Vec<ItemRecord>,
}

impl Default for StepTwoFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl StepTwoFormState {
    /// Create a new item editor with an empty list
    pub fn new() -> Self {
        Self {
            focused_field: ItemField::Name,
            name_input: TextInput::new().placeholder("Item name"),
            quantity_input: TextInput::new().content("1"),
            price_input: TextInput::new().placeholder("0.00"),
            items: Vec::new(),
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
            ItemField::Name => &mut self.name_input,
            ItemField::Quantity => &mut self.quantity_input,
            ItemField::Price => &mut self.price_input,
        }
    }

    /// Parse the editor row into an item, if it is valid
    ///
    /// Quantity must be a whole number of at least 1 and price must be a
    /// non-negative amount. The name is free-form.
    pub fn parse_item(&self) -> Option<ItemRecord> {
        let quantity: u32 = self.quantity_input.value().trim().parse().ok()?;
        if quantity == 0 {
            return None;
        }
        let price = Price::parse(self.price_input.value()).ok()?;
        Some(ItemRecord::new(
            self.name_input.value().trim(),
            quantity,
            price,
        ))
    }

    /// Append the editor row to the item list and reset the editor.
    ///
    /// Returns false and leaves every field untouched when the row does
    /// not parse.
    pub fn add_item(&mut self) -> bool {
        match self.parse_item() {
            Some(item) => {
                self.items.push(item);
                self.name_input.clear();
                self.quantity_input = TextInput::new().content("1");
                self.price_input.clear();
                self.focused_field = ItemField::Name;
                true
            }
            None => false,
        }
    }

    /// Collect the item list
    pub fn data(&self) -> StepTwoData {
        StepTwoData::new(self.items.clone())
    }

    /// Running total of all added items
    pub fn total(&self) -> Price {
        self.data().total()
    }
}

/// Render the step two view: item editor on top, item list below
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Item editor
            Constraint::Min(4),    // Item list
        ])
        .split(area);

    render_editor(frame, app, chunks[0]);

    // Show recognized receipt content next to the list when there is any
    if app.wizard.parsed().is_empty() {
        render_item_list(frame, app, chunks[1]);
    } else {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_item_list(frame, app, halves[0]);
        render_recognized(frame, app, halves[1]);
    }
}

/// Render the item editor block
fn render_editor(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Add Items (Step 2 of 2) ")
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
            Constraint::Length(1), // Name
            Constraint::Length(1), // Quantity
            Constraint::Length(1), // Price
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    // Extract values we need from form (to avoid borrow conflicts)
    let name_value = app.step_two_form.name_input.value().to_string();
    let name_focused = app.step_two_form.focused_field == ItemField::Name;
    let name_cursor = app.step_two_form.name_input.cursor;
    let name_placeholder = app.step_two_form.name_input.placeholder.clone();

    let quantity_value = app.step_two_form.quantity_input.value().to_string();
    let quantity_focused = app.step_two_form.focused_field == ItemField::Quantity;
    let quantity_cursor = app.step_two_form.quantity_input.cursor;
    let quantity_placeholder = app.step_two_form.quantity_input.placeholder.clone();

    let price_value = app.step_two_form.price_input.value().to_string();
    let price_focused = app.step_two_form.focused_field == ItemField::Price;
    let price_cursor = app.step_two_form.price_input.cursor;
    let price_placeholder = app.step_two_form.price_input.placeholder.clone();

    render_field(
        frame,
        chunks[0],
        "Name",
        &name_value,
        name_focused,
        name_cursor,
        &name_placeholder,
    );

    render_field(
        frame,
        chunks[1],
        "Quantity",
        &quantity_value,
        quantity_focused,
        quantity_cursor,
        &quantity_placeholder,
    );

    render_field(
        frame,
        chunks[2],
        "Price",
        &price_value,
        price_focused,
        price_cursor,
        &price_placeholder,
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add item  "),
        Span::styled("[Ctrl+S]", Style::default().fg(Color::Green)),
        Span::raw(" Submit receipt  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Render the list of items added so far, with a running total
fn render_item_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = app.settings.currency_symbol.clone();

    let block = Block::default()
        .title(" Items ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Items
            Constraint::Length(1), // Total
        ])
        .split(inner);

    if app.step_two_form.items.is_empty() {
        let empty = Line::from(Span::styled(
            "No items yet. Fill the row above and press Enter.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(empty), chunks[0]);
    } else {
        let rows: Vec<ListItem> = app
            .step_two_form
            .items
            .iter()
            .map(|item| {
                let line = Line::from(vec![
                    Span::styled(item.name.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" x{}", item.quantity),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        item.line_total().format_with_symbol(&symbol),
                        Style::default().fg(Color::Yellow),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        frame.render_widget(List::new(rows), chunks[0]);
    }

    let total = Line::from(vec![
        Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            app.step_two_form.total().format_with_symbol(&symbol),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total), chunks[1]);
}

/// Render what recognition pulled off the receipt photo, for reference
/// while typing. Nothing here is added to the receipt automatically.
fn render_recognized(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = app.settings.currency_symbol.clone();
    let parsed = app.wizard.parsed();

    let block = Block::default()
        .title(" From the photo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::new();

    if let Some(date) = &parsed.date {
        lines.push(Line::from(Span::styled(format!("Date: {}", date), dim)));
    }
    if let Some(location) = &parsed.location {
        lines.push(Line::from(Span::styled(
            format!("Location: {}", location),
            dim,
        )));
    }
    if let Some(items) = &parsed.items {
        for item in items {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} x{}  {}",
                    item.name,
                    item.quantity,
                    item.price.format_with_symbol(&symbol)
                ),
                dim,
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Handle key input for step two
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.step_two_form;

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
            // Silently ignores rows that do not parse
            form.add_item();
            return true;
        }

        // Submit the whole receipt
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            submit_receipt(app);
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

/// Dispatch the assembled receipt through the wizard
fn submit_receipt(app: &mut App) {
    let data = app.step_two_form.data();
    let count = data.items.len();

    if app.wizard.submit_step_two(data) {
        let noun = if count == 1 { "item" } else { "items" };
        app.set_status(format!("Receipt submitted ({} {})", count, noun));
    }
}
