mod bounds;
pub(crate) mod direction;
pub(crate) mod snake;
use self::bounds::Bounds;
use self::direction::Direction;
use self::snake::Snake;
use crate::consts;
use crate::key::Key;
use rand::Rng;
use ratatui::layout::Position;

/// Where a game is in its lifecycle.  `Quit` and `GameOver` are final: once
/// reached, nothing further happens to the game.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Phase {
    #[default]
    Playing,
    /// The player asked to leave
    Quit,
    /// The snake ran into itself
    GameOver,
}

impl Phase {
    pub(crate) fn is_terminal(self) -> bool {
        self != Phase::Playing
    }
}

/// Everything that changes over the course of a game: the snake, the fruit,
/// and the score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    snake: Snake,
    fruit: Position,
    score: u32,
    phase: Phase,
}

impl GameState<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        GameState::new_with_rng(rand::rng())
    }
}

impl<R: Rng> GameState<R> {
    pub(crate) fn new_with_rng(rng: R) -> GameState<R> {
        GameState::new_on_canvas(
            rng,
            Bounds::from(consts::CANVAS_SIZE),
            Snake::new(consts::SNAKE_START, Direction::default()),
        )
    }

    fn new_on_canvas(mut rng: R, bounds: Bounds, snake: Snake) -> GameState<R> {
        let fruit = bounds.random_position(&mut rng);
        tracing::debug!(?fruit, "Placed initial fruit");
        GameState {
            rng,
            bounds,
            snake,
            fruit,
            score: 0,
            phase: Phase::Playing,
        }
    }

    /// Run one tick of the game given the key pressed since the last tick,
    /// if any, and return the resulting phase.
    ///
    /// Quitting takes effect before anything moves.  Otherwise, a movement
    /// key turns the snake (unless it would reverse onto itself), the snake
    /// moves one cell, and then either it has bitten itself (game over), it
    /// has reached the fruit (it grows, the score goes up, and a new fruit
    /// is placed), or it simply moved.
    pub(crate) fn advance(&mut self, input: Option<Key>) -> Phase {
        if self.phase.is_terminal() {
            return self.phase;
        }
        if input == Some(Key::Quit) {
            tracing::info!(score = self.score, "Player quit");
            self.phase = Phase::Quit;
            return self.phase;
        }
        if let Some(direction) = input.and_then(Direction::from_key) {
            if !self.snake.turn(direction) {
                tracing::trace!(
                    ?direction,
                    current = ?self.snake.direction(),
                    "Ignoring reversal"
                );
            }
        }
        self.snake.advance(self.bounds);
        if self.snake.bit_itself() {
            self.snake.trim();
            tracing::info!(
                score = self.score,
                head = ?self.snake.head(),
                "Snake bit itself"
            );
            self.phase = Phase::GameOver;
            return self.phase;
        }
        if self.snake.head() == self.fruit {
            self.score += 1;
            self.fruit = self.bounds.random_position(&mut self.rng);
            tracing::debug!(
                score = self.score,
                len = self.snake.len(),
                fruit = ?self.fruit,
                "Ate fruit"
            );
        } else {
            self.snake.trim();
        }
        debug_assert!(
            self.snake.len() <= self.bounds.area(),
            "snake should never outgrow the canvas"
        );
        debug_assert!(
            self.bounds.contains(self.snake.head()),
            "snake head should stay on the canvas"
        );
        self.phase
    }
}

impl<R> GameState<R> {
    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn fruit(&self) -> Position {
        self.fruit
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
impl<R> GameState<R> {
    /// Put the snake and the fruit in place for a test scenario
    pub(crate) fn place(&mut self, snake: Snake, fruit: Position) {
        self.snake = snake;
        self.fruit = fruit;
    }
}
