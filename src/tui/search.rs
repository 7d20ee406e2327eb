/// Search input state for the TUI
pub struct SearchBox {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
    pub needs_search: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
            needs_search: false,
        }
    }
}

impl SearchBox {
    /// Insert a character at the cursor. `cursor_pos` is a byte offset and
    /// stays on a char boundary.
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        self.needs_search = true;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.prev_boundary();
            self.query.remove(prev);
            self.cursor_pos = prev;
            self.needs_search = true;
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.query.remove(self.cursor_pos);
            self.needs_search = true;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
        self.needs_search = true;
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.query[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.query.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_stay_on_char_boundaries() {
        let mut sb = SearchBox::default();
        sb.insert('雞');
        sb.insert('肉');
        assert_eq!(sb.query, "雞肉");
        assert_eq!(sb.cursor_pos, "雞肉".len());

        sb.backspace();
        assert_eq!(sb.query, "雞");
        assert_eq!(sb.cursor_pos, "雞".len());
        assert!(sb.needs_search);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut sb = SearchBox::default();
        for c in "a雞b".chars() {
            sb.insert(c);
        }

        sb.move_left();
        sb.move_left();
        assert_eq!(sb.cursor_pos, 1);
        sb.move_right();
        assert_eq!(sb.cursor_pos, 1 + "雞".len());

        sb.move_home();
        assert_eq!(sb.cursor_pos, 0);
        sb.move_end();
        assert_eq!(sb.cursor_pos, sb.query.len());
    }

    #[test]
    fn insert_mid_query() {
        let mut sb = SearchBox::default();
        sb.insert('炒');
        sb.insert('蛋');
        sb.move_left();
        sb.move_left();
        sb.insert('番');
        assert_eq!(sb.query, "番炒蛋");
    }

    #[test]
    fn delete_under_cursor() {
        let mut sb = SearchBox::default();
        sb.insert('a');
        sb.insert('b');
        sb.move_home();
        sb.delete();
        assert_eq!(sb.query, "b");
        assert_eq!(sb.cursor_pos, 0);
    }

    #[test]
    fn clear_resets_and_requests_search() {
        let mut sb = SearchBox::default();
        sb.insert('x');
        sb.needs_search = false;
        sb.clear();
        assert!(sb.query.is_empty());
        assert_eq!(sb.cursor_pos, 0);
        assert!(sb.needs_search);
    }
}
