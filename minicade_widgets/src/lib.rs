pub mod alphabet;
pub mod background;
pub mod gallows;
pub mod menu_list;
pub mod popup;
pub mod quiz_panel;
pub mod rps_hand;
pub mod tally;
pub mod text;
pub mod theme;
pub mod word_lines;

pub use theme::Theme;
