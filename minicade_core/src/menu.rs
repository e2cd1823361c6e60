use crate::input::InputSnapshot;

/// One selectable entry of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption<T> {
    pub label: &'static str,
    pub value: T,
}

impl<T> MenuOption<T> {
    pub fn new(label: &'static str, value: T) -> Self {
        Self { label, value }
    }
}

/// Cursor-based single-choice selector over a fixed, ordered option list.
///
/// The cursor always points at a valid option and wraps around at both ends.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    options: Vec<MenuOption<T>>,
    cursor: usize,
}

impl<T: Copy> Menu<T> {
    /// Panics if `options` is empty.
    pub fn new(options: Vec<MenuOption<T>>) -> Self {
        assert!(!options.is_empty(), "a menu needs at least one option");
        Self { options, cursor: 0 }
    }

    pub fn options(&self) -> &[MenuOption<T>] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> T {
        self.options[self.cursor].value
    }

    pub fn move_up(&mut self) {
        let len = self.options.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.options.len();
    }

    /// Apply one frame of input. Returns the highlighted value when confirmed.
    pub fn apply(&mut self, input: &InputSnapshot) -> Option<T> {
        if input.down {
            self.move_down();
        } else if input.up {
            self.move_up();
        }

        if input.confirm {
            Some(self.selected())
        } else {
            None
        }
    }
}

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    Start,
    Scoreboard,
    Quit,
}

impl MainMenuItem {
    pub fn menu() -> Menu<MainMenuItem> {
        Menu::new(vec![
            MenuOption::new("Start", MainMenuItem::Start),
            MenuOption::new("Scoreboard", MainMenuItem::Scoreboard),
            MenuOption::new("Quit", MainMenuItem::Quit),
        ])
    }
}
