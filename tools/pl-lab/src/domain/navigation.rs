//! Sidebar navigation: active pattern, drawer flag, collapsible categories
//! and the keyboard cursor.

use pl_catalog::{by_category, Category, PatternId};

/// One line of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Category(Category),
    Pattern(PatternId),
}

/// Result of [`Navigation::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Unchanged,
    Switched { from: PatternId, to: PatternId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: PatternId,
    sidebar_open: bool,
    expanded: [bool; 3],
    cursor: usize,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(PatternId::DEFAULT)
    }
}

impl Navigation {
    /// All categories expanded, drawer closed, cursor on the active row.
    pub fn new(active: PatternId) -> Self {
        let mut nav = Self {
            active,
            sidebar_open: false,
            expanded: [true; 3],
            cursor: 0,
        };
        nav.cursor = nav
            .position_of(SidebarRow::Pattern(active))
            .unwrap_or(0);
        nav
    }

    pub fn active(&self) -> PatternId {
        self.active
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_expanded(&self, category: Category) -> bool {
        self.expanded[category.index()]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Category headers, each followed by its patterns when expanded.
    pub fn visible_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::with_capacity(PatternId::ALL.len() + Category::ALL.len());
        for category in Category::ALL {
            rows.push(SidebarRow::Category(category));
            if self.is_expanded(category) {
                rows.extend(by_category(category).map(|entry| SidebarRow::Pattern(entry.id)));
            }
        }
        rows
    }

    pub fn cursor_row(&self) -> Option<SidebarRow> {
        self.visible_rows().get(self.cursor).copied()
    }

    /// Flip a category. The cursor stays on the same row, or falls back to
    /// the category header when its row was hidden.
    pub fn toggle_category(&mut self, category: Category) {
        let under_cursor = self.cursor_row();
        self.expanded[category.index()] = !self.expanded[category.index()];

        let fallback = match under_cursor {
            Some(SidebarRow::Pattern(id)) => SidebarRow::Category(id.category()),
            Some(row) => row,
            None => SidebarRow::Category(category),
        };
        self.cursor = under_cursor
            .and_then(|row| self.position_of(row))
            .or_else(|| self.position_of(fallback))
            .unwrap_or(0);
    }

    /// Make `id` active. Selecting the active pattern changes nothing.
    pub fn select(&mut self, id: PatternId) -> Selection {
        if id == self.active {
            return Selection::Unchanged;
        }
        let from = self.active;
        self.active = id;
        self.sidebar_open = false;
        if let Some(pos) = self.position_of(SidebarRow::Pattern(id)) {
            self.cursor = pos;
        }
        Selection::Switched { from, to: id }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn cursor_up(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = (self.cursor + 1) % len;
    }

    /// Select the pattern under the cursor, or toggle the category under it.
    pub fn activate_cursor(&mut self) -> Selection {
        match self.cursor_row() {
            Some(SidebarRow::Pattern(id)) => self.select(id),
            Some(SidebarRow::Category(category)) => {
                self.toggle_category(category);
                Selection::Unchanged
            }
            None => Selection::Unchanged,
        }
    }

    fn position_of(&self, row: SidebarRow) -> Option<usize> {
        self.visible_rows().iter().position(|r| *r == row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigation::default();
        assert_eq!(nav.active(), PatternId::Singleton);
        assert!(!nav.is_sidebar_open());
        assert_eq!(nav.visible_rows().len(), 25);
        assert_eq!(nav.cursor_row(), Some(SidebarRow::Pattern(PatternId::Singleton)));
    }

    #[test]
    fn test_select_same_pattern_is_noop() {
        let mut nav = Navigation::default();
        nav.toggle_sidebar();
        let before = nav.clone();
        assert_eq!(nav.select(PatternId::Singleton), Selection::Unchanged);
        assert_eq!(nav, before);
        assert!(nav.is_sidebar_open());
    }

    #[test]
    fn test_select_switches_and_closes_drawer() {
        let mut nav = Navigation::default();
        nav.toggle_sidebar();
        assert_eq!(
            nav.select(PatternId::Proxy),
            Selection::Switched {
                from: PatternId::Singleton,
                to: PatternId::Proxy
            }
        );
        assert!(!nav.is_sidebar_open());
        assert_eq!(nav.cursor_row(), Some(SidebarRow::Pattern(PatternId::Proxy)));
    }

    #[test]
    fn test_collapse_hides_patterns_and_moves_cursor_to_header() {
        let mut nav = Navigation::default();
        nav.toggle_category(Category::Creational);
        assert_eq!(nav.visible_rows().len(), 20);
        assert_eq!(nav.cursor_row(), Some(SidebarRow::Category(Category::Creational)));

        nav.toggle_category(Category::Creational);
        assert_eq!(nav.visible_rows().len(), 25);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut nav = Navigation::default();
        nav.cursor_up();
        nav.cursor_up();
        assert_eq!(nav.cursor_row(), Some(SidebarRow::Pattern(PatternId::Visitor)));
        nav.cursor_down();
        nav.cursor_down();
        assert_eq!(nav.cursor(), 1);
    }

    #[test]
    fn test_activate_cursor_on_header_toggles() {
        let mut nav = Navigation::default();
        nav.cursor_up();
        assert_eq!(nav.activate_cursor(), Selection::Unchanged);
        assert!(!nav.is_expanded(Category::Creational));
        assert_eq!(nav.active(), PatternId::Singleton);
    }
}
