use std::collections::BTreeSet;

/// Logical input asserted during one frame.
///
/// The frame loop builds a fresh snapshot every frame, so every flag is
/// transient: screens read it once and never keep it around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub back: bool,
    pub cancel: bool,
    /// The terminal asked the whole application to stop (Ctrl+C)
    pub quit: bool,
    /// Lowercase character keys pressed this frame, in sorted order
    keys: BTreeSet<char>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up() -> Self {
        Self { up: true, ..Self::default() }
    }

    pub fn down() -> Self {
        Self { down: true, ..Self::default() }
    }

    pub fn left() -> Self {
        Self { left: true, ..Self::default() }
    }

    pub fn right() -> Self {
        Self { right: true, ..Self::default() }
    }

    pub fn confirm() -> Self {
        Self { confirm: true, ..Self::default() }
    }

    pub fn back() -> Self {
        Self { back: true, ..Self::default() }
    }

    pub fn cancel() -> Self {
        Self { cancel: true, ..Self::default() }
    }

    /// Snapshot with a single character key pressed
    pub fn key(c: char) -> Self {
        let mut input = Self::default();
        input.press(c);
        input
    }

    /// Record a character key. Stored lowercase.
    pub fn press(&mut self, c: char) {
        for lower in c.to_lowercase() {
            self.keys.insert(lower);
        }
    }

    pub fn pressed(&self, c: char) -> bool {
        c.to_lowercase().all(|lower| self.keys.contains(&lower))
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.keys.iter().copied()
    }

    /// ASCII letters pressed this frame, alphabetical
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.keys().filter(|c| c.is_ascii_lowercase())
    }

    /// Back and Cancel both mean "leave this screen"
    pub fn leaving(&self) -> bool {
        self.back || self.cancel
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Drop every flag. Called by the frame loop after the snapshot is consumed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
