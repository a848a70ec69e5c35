use super::bounds::Bounds;
use crate::key::Key;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    /// A new snake starts out heading up, so its first `s` is a reversal
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the direction a movement key asks for, or `None` for keys that
    /// don't steer
    pub(crate) fn from_key(key: Key) -> Option<Direction> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Quit => None,
        }
    }

    /// Return the cell one step from `pos` in this direction.  Stepping off
    /// an edge of `bounds` re-enters at the opposite edge.
    pub(crate) fn advance(self, pos: Position, bounds: Bounds) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = decrement_wrapping(y, bounds.height),
            Direction::Down => y = increment_wrapping(y, bounds.height),
            Direction::Left => x = decrement_wrapping(x, bounds.width),
            Direction::Right => x = increment_wrapping(x, bounds.width),
        }
        Position { x, y }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    x.checked_sub(1).unwrap_or_else(|| max.saturating_sub(1))
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}
