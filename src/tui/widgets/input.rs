//! Text input widget
//!
//! Editable single-line text state for the wizard forms. Rendering lives in
//! the panels so labels and focus styling stay in one place; this type only
//! tracks content, cursor, and placeholder.
//!
//! The cursor is a character index, not a byte offset, so editing works on
//! non-ASCII content (store names, currency symbols).

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position as a character index
    pub cursor: usize,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Byte offset of the cursor into the content
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('4');
        input.insert('2');
        assert_eq!(input.value(), "42");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new().content("a");
        input.move_start();
        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().content("13");
        input.move_left();
        input.insert('2');
        assert_eq!(input.value(), "123");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("Café");
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.insert('é');
        input.insert('s');
        assert_eq!(input.value(), "Cafés");
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("abc");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor, 0);
    }
}
