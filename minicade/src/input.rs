use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use minicade_core::InputSnapshot;

/// Fold one key press into the frame's snapshot. Unknown keys are dropped.
pub fn apply_key(input: &mut InputSnapshot, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.quit = true
        }
        KeyCode::Up => input.up = true,
        KeyCode::Down => input.down = true,
        KeyCode::Left => input.left = true,
        KeyCode::Right => input.right = true,
        KeyCode::Enter => input.confirm = true,
        KeyCode::Backspace => input.back = true,
        KeyCode::Esc => input.cancel = true,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.press(c),
        _ => {}
    }
}

/// Collect every key press that arrives within `budget` into one snapshot
pub fn poll_frame(budget: Duration) -> io::Result<InputSnapshot> {
    let deadline = Instant::now() + budget;
    let mut input = InputSnapshot::new();

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            apply_key(&mut input, key);
        }
    }

    Ok(input)
}
