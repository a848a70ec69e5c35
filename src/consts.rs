//! Assorted constants & hard-coded configuration
use crate::render::Rgb;
use ratatui::layout::{Position, Size};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Size of the playing field, in cells
pub(crate) const CANVAS_SIZE: Size = Size {
    width: 40,
    height: 30,
};

/// Cell occupied by the snake's head (its only segment) when a game starts
pub(crate) const SNAKE_START: Position = Position { x: 20, y: 20 };

/// Number of terminal columns used to draw a single cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Color of cells not occupied by the snake or the fruit
pub(crate) const BACKGROUND_COLOR: Rgb = Rgb::from_hex(0x23_23_23);

/// Color of cells occupied by the snake
pub(crate) const SNAKE_COLOR: Rgb = Rgb::from_hex(0xFF_23_23);

/// Color of the cell occupied by the fruit
pub(crate) const FRUIT_COLOR: Rgb = Rgb::from_hex(0x23_FF_23);

/// Environment variable holding the `tracing` filter directive used when
/// logging to a file
pub(crate) const LOG_FILTER_VAR: &str = "TERMSNAKE_LOG";

/// Filter directive used when [`LOG_FILTER_VAR`] is unset
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";
