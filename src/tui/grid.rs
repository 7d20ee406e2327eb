//! Selection and scrolling state for the card grid
//!
//! Cards flow left-to-right, top-to-bottom over the visible set; the grid
//! scrolls by whole rows. `columns` and `visible_rows` are recomputed from
//! the terminal size on every draw.

/// Card grid display state
pub struct GridState {
    pub selected: Option<usize>,
    pub scroll_row: usize,
    pub columns: usize,
    pub visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_row: 0,
            columns: 2,
            visible_rows: 4,
        }
    }
}

impl GridState {
    /// Reset after the visible set changed
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_row = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.scroll_to_selected(total);
    }

    pub fn select_prev(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(i);
        self.scroll_to_selected(total);
    }

    pub fn select_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + self.columns).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.scroll_to_selected(total);
    }

    pub fn select_up(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => i.saturating_sub(self.columns),
            None => 0,
        };
        self.selected = Some(i);
        self.scroll_to_selected(total);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let step = self.columns * self.visible_rows.max(1);
        let i = match self.selected {
            Some(i) => (i + step).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.scroll_to_selected(total);
    }

    pub fn page_up(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let step = self.columns * self.visible_rows.max(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(step),
            None => 0,
        };
        self.selected = Some(i);
        self.scroll_to_selected(total);
    }

    pub fn select_first(&mut self, total: usize) {
        if total > 0 {
            self.selected = Some(0);
            self.scroll_row = 0;
        }
    }

    pub fn select_last(&mut self, total: usize) {
        if total > 0 {
            self.selected = Some(total - 1);
            self.scroll_to_selected(total);
        }
    }

    /// Total number of card rows for `total` cards
    pub fn row_count(&self, total: usize) -> usize {
        total.div_ceil(self.columns.max(1))
    }

    /// Keep the selected card's row inside the viewport
    fn scroll_to_selected(&mut self, total: usize) {
        let Some(selected) = self.selected else {
            return;
        };
        let row = selected / self.columns.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if self.visible_rows > 0 && row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }
        let max_scroll = self.row_count(total).saturating_sub(self.visible_rows.max(1));
        self.scroll_row = self.scroll_row.min(max_scroll);
    }
}
