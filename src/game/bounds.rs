use rand::Rng;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The extent of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Total number of cells, which is also the longest the snake can get
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Pick a cell uniformly at random, choosing each coordinate
    /// independently.  Occupancy is not taken into account.
    pub(crate) fn random_position<R: Rng>(self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(0..self.width),
            y: rng.random_range(0..self.height),
        }
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Bounds {
        Bounds {
            width: size.width,
            height: size.height,
        }
    }
}
