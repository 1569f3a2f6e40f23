//! Single-line text control backing the query, with a char-indexed cursor.

use ropey::Rope;

/// Cursor movements the control performs on its own when a key's default
/// action is not suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Start,
    End,
}

#[derive(Debug, Clone, Default)]
pub struct InputField {
    text: Rope,
    cursor: usize,
}

impl InputField {
    pub fn value(&self) -> String {
        self.text.to_string()
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole value; the cursor lands at the end like a
    /// programmatic assignment to a text control.
    pub fn set_value(&mut self, value: &str) {
        self.text = Rope::from_str(&single_line(value));
        self.cursor = self.text.len_chars();
    }

    pub fn insert(&mut self, text: &str) {
        let text = single_line(text);
        self.text.insert(self.cursor, &text);
        self.cursor += text.chars().count();
    }

    /// Delete the char before the cursor. Returns false when nothing changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.text.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        true
    }

    /// Delete the char under the cursor. Returns false when nothing changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len_chars() {
            return false;
        }
        self.text.remove(self.cursor..self.cursor + 1);
        true
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(self.text.len_chars()),
            CursorMove::Start => 0,
            CursorMove::End => self.text.len_chars(),
        };
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
