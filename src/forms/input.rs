//! Editable text buffer with a cursor
//!
//! The cursor counts characters, not bytes, so amounts typed with a
//! currency symbol ("₹12") edit correctly.

/// Text being typed into a form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field pre-filled with `content`, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.content.chars().count());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn set(&mut self, content: impl Into<String>) {
        *self = Self::with_content(content);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::new();
        for c in "12.5".chars() {
            field.insert(c);
        }
        assert_eq!(field.value(), "12.5");
        field.backspace();
        assert_eq!(field.value(), "12.");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::with_content("₹10");
        assert_eq!(field.cursor(), 3);

        field.move_start();
        field.move_right();
        field.insert('5');
        assert_eq!(field.value(), "₹510");

        field.move_start();
        field.delete();
        assert_eq!(field.value(), "510");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = TextField::with_content("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.move_start();
        field.move_left();
        assert_eq!(field.cursor(), 0);
        field.backspace();
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_set_and_clear() {
        let mut field = TextField::new();
        assert!(field.is_blank());
        field.set("  ");
        assert!(field.is_blank());
        field.set("Rent");
        field.clear();
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }
}
