use super::bounds::Bounds;
use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body and heading.
///
/// Moving pushes a new head onto the front and leaves the old tail in
/// place; the caller decides whether to trim it off again (plain move) or
/// keep it (the snake ate).  All positions are relative to the top-left
/// corner of the canvas.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty, and never
    /// longer than the number of cells on the canvas.
    pub(super) segments: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a one-segment snake at `head` facing in `direction`
    pub(crate) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
            direction,
        }
    }

    /// Create a snake occupying `segments`, head first
    #[cfg(test)]
    pub(crate) fn from_segments<I: IntoIterator<Item = Position>>(
        segments: I,
        direction: Direction,
    ) -> Snake {
        let segments = segments.into_iter().collect::<VecDeque<_>>();
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Snake {
            segments,
            direction,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.segments[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Change the snake's direction to `direction` unless that would make it
    /// double back on itself.  Returns whether the direction was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the snake forwards one cell in the current direction within
    /// `bounds`.  Every segment takes the place of the one in front of it,
    /// and the old tail cell is kept as an extra trailing segment until
    /// [`Snake::trim()`] is called.
    pub(crate) fn advance(&mut self, bounds: Bounds) {
        let head = self.direction.advance(self.head(), bounds);
        self.segments.push_front(head);
    }

    /// Return whether the head overlaps any other segment
    pub(crate) fn bit_itself(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&p| p == head)
    }

    /// Drop the trailing segment left behind by [`Snake::advance()`]
    pub(crate) fn trim(&mut self) {
        if self.segments.len() > 1 {
            let _ = self.segments.pop_back();
        }
    }
}
