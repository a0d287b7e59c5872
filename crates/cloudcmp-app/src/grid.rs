//! Card grid view state - cursor, scroll offset, and layout bounds.
//!
//! Used by the handler layer for navigation and by the TUI layer, which
//! reports the column count and visible rows while rendering.

/// Grid navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridNav {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

#[derive(Debug, Clone)]
pub struct GridViewState {
    /// Index of the focused card in the displayed list
    pub cursor: usize,
    /// First visible row
    pub row_offset: usize,
    /// Cards per row (set during render)
    pub columns: usize,
    /// Rows that fit on screen (set during render)
    pub visible_rows: usize,
}

impl Default for GridViewState {
    fn default() -> Self {
        Self {
            cursor: 0,
            row_offset: 0,
            columns: 1,
            visible_rows: 1,
        }
    }
}

impl GridViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor over a grid of `len` cards
    pub fn navigate(&mut self, nav: GridNav, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.row_offset = 0;
            return;
        }
        let last = len - 1;
        let cols = self.columns.max(1);
        let page = cols * self.visible_rows.max(1);

        self.cursor = match nav {
            GridNav::Left => self.cursor.saturating_sub(1),
            GridNav::Right => (self.cursor + 1).min(last),
            GridNav::Up => self.cursor.checked_sub(cols).unwrap_or(self.cursor),
            GridNav::Down => {
                let next = self.cursor + cols;
                if next <= last {
                    next
                } else {
                    self.cursor
                }
            }
            GridNav::PageUp => self.cursor.saturating_sub(page),
            GridNav::PageDown => (self.cursor + page).min(last),
            GridNav::Home => 0,
            GridNav::End => last,
        };
        self.ensure_visible();
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.ensure_visible();
    }

    /// Record the layout computed during render
    pub fn set_layout(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.ensure_visible();
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor / self.columns.max(1)
    }

    /// Scroll so the cursor row is on screen
    pub fn ensure_visible(&mut self) {
        let row = self.cursor_row();
        let rows = self.visible_rows.max(1);
        if row < self.row_offset {
            self.row_offset = row;
        } else if row >= self.row_offset + rows {
            self.row_offset = row + 1 - rows;
        }
    }
}
