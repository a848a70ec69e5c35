use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A keypress that means something to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Key> {
        match (ev.modifiers, ev.code) {
            // Raw mode means Ctrl-C no longer raises SIGINT.
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Key::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w')) => Some(Key::Up),
            (KeyModifiers::NONE, KeyCode::Char('s')) => Some(Key::Down),
            (KeyModifiers::NONE, KeyCode::Char('a')) => Some(Key::Left),
            (KeyModifiers::NONE, KeyCode::Char('d')) => Some(Key::Right),
            _ => None,
        }
    }

    /// Decode a terminal event.  Anything other than a key press yields
    /// `None`.
    pub(crate) fn from_event(event: &Event) -> Option<Key> {
        event.as_key_press_event().and_then(Key::from_key_event)
    }
}
