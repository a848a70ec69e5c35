use crate::consts;
use crate::game::{GameState, Phase};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};

/// A 24-bit color
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    /// Build a color from a `0xRRGGBB` value.  Bits above the lowest 24 are
    /// ignored.
    pub(crate) const fn from_hex(hex: u32) -> Rgb {
        let [_, r, g, b] = hex.to_be_bytes();
        Rgb { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Color {
        Color::Rgb(value.r, value.g, value.b)
    }
}

/// Everything to show for a single tick: one color per canvas cell plus a
/// line of status text
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Frame {
    size: Size,
    /// Cell colors, row by row
    cells: Vec<Rgb>,
    status: String,
}

impl Frame {
    /// Return the number of terminal columns & rows needed to show the whole
    /// frame, status line included
    pub(crate) fn display_size(&self) -> Size {
        Size {
            width: self.size.width.saturating_mul(consts::CELL_WIDTH),
            height: self.size.height.saturating_add(1),
        }
    }

    /// Return the color of the cell at column `x` of row `y`, or `None` if
    /// that's off the canvas
    #[cfg(test)]
    pub(crate) fn cell(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = usize::from(y) * usize::from(self.size.width) + usize::from(x);
        self.cells.get(i).copied()
    }

    /// Iterate over the rows of cell colors, top to bottom
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks(usize::from(self.size.width).max(1))
    }

    pub(crate) fn status(&self) -> &str {
        &self.status
    }
}

/// Draw the game as it stands at the given phase.  The snake is drawn over
/// the fruit when the two share a cell.
pub(crate) fn render<R>(state: &GameState<R>, phase: Phase) -> Frame {
    let bounds = state.bounds();
    let snake = state.snake();
    let fruit = state.fruit();
    let cells = bounds
        .positions()
        .map(|pos| {
            if snake.occupies(pos) {
                consts::SNAKE_COLOR
            } else if pos == fruit {
                consts::FRUIT_COLOR
            } else {
                consts::BACKGROUND_COLOR
            }
        })
        .collect();
    Frame {
        size: bounds.size(),
        cells,
        status: status_line(state.score(), phase),
    }
}

fn status_line(score: u32, phase: Phase) -> String {
    match phase {
        Phase::Playing => format!("Press 'q' to exit. Score: {score}"),
        Phase::Quit => format!("Quitting. Score: {score}"),
        Phase::GameOver => format!("Game over! Final score: {score}"),
    }
}

impl Widget for &Frame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cell_width = consts::CELL_WIDTH;
        let mut y = area.y;
        for row in self.rows() {
            if y >= area.bottom() {
                return;
            }
            let mut x = area.x;
            for &color in row {
                let style = Style::reset().bg(color.into());
                for _ in 0..cell_width {
                    if x >= area.right() {
                        break;
                    }
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(' ');
                        cell.set_style(style);
                    }
                    x = x.saturating_add(1);
                }
            }
            y = y.saturating_add(1);
        }
        if y < area.bottom() {
            Line::raw(self.status.as_str()).render(
                Rect {
                    y,
                    height: 1,
                    ..area
                },
                buf,
            );
        }
    }
}
