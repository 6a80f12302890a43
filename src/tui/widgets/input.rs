/// Single-line text input with a character-indexed cursor.
///
/// The add-task and go-to-date fields are all single-line and short, so
/// this carries no wrapping or scrolling state.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub value: String,
    pub cursor: usize, // character index, 0..=len
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_string(value: String) -> Self {
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Remove the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    /// Remove the character under the cursor, if any.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = Input::new();
        input.insert_char('a');
        input.insert_char('b');
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.value(), "axb");
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = Input::from_string("ab".to_string());
        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut input = Input::from_string("abc".to_string());
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn cursor_handles_multibyte_chars() {
        let mut input = Input::new();
        input.insert_char('é');
        input.insert_char('t');
        input.move_left();
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.value(), "bét");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn from_string_places_cursor_at_end() {
        let input = Input::from_string("2024-06-01".to_string());
        assert_eq!(input.cursor, 10);
    }
}
