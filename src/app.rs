use crate::consts;
use crate::game::{GameState, Phase};
use crate::key::Key;
use crate::render::{render, Frame};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Somewhere to get keypresses from without waiting for them
pub(crate) trait KeySource {
    /// Return the next pending key, or `None` if nothing relevant has been
    /// pressed.  Never blocks.
    fn read_key(&mut self) -> io::Result<Option<Key>>;
}

/// Somewhere to show frames
pub(crate) trait FrameSink {
    /// Replace whatever is currently displayed with `frame`
    fn show(&mut self, frame: &Frame) -> io::Result<()>;
}

impl<B: Backend> FrameSink for Terminal<B> {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        self.draw(|f| f.render_widget(frame, f.area()))?;
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    state: GameState<R>,
    tick: Duration,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(state: GameState<R>) -> App<R> {
        App {
            state,
            tick: consts::TICK_PERIOD,
        }
    }

    /// Play until the player quits or the snake dies.  Each tick reads at
    /// most one key, advances the game, redraws, and then sleeps for the
    /// tick period.
    pub(crate) fn run<T: KeySource + FrameSink>(mut self, term: &mut T) -> io::Result<Outcome> {
        let mut phase = self.state.phase();
        let mut frame = render(&self.state, phase);
        term.show(&frame)?;
        let mut ticks = 0u64;
        while !phase.is_terminal() {
            let key = term.read_key()?;
            phase = self.state.advance(key);
            frame = render(&self.state, phase);
            term.show(&frame)?;
            ticks += 1;
            if !phase.is_terminal() {
                std::thread::sleep(self.tick);
            }
        }
        tracing::info!(?phase, score = self.state.score(), ticks, "Game finished");
        Ok(Outcome {
            phase,
            score: self.state.score(),
            status: frame.status().to_owned(),
        })
    }
}

/// How a game ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Outcome {
    pub(crate) phase: Phase,
    pub(crate) score: u32,
    /// The status line of the last frame shown
    pub(crate) status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{direction::Direction, snake::Snake};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::{backend::TestBackend, layout::Position};
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[derive(Debug)]
    struct Scripted {
        keys: VecDeque<Option<Key>>,
        terminal: Terminal<TestBackend>,
        frames: Vec<Frame>,
    }

    impl Scripted {
        fn new<I: IntoIterator<Item = Option<Key>>>(keys: I) -> Scripted {
            Scripted {
                keys: keys.into_iter().collect(),
                terminal: Terminal::new(TestBackend::new(80, 31)).expect("TestBackend never fails"),
                frames: Vec::new(),
            }
        }

        fn line(&self, y: u16) -> String {
            let buffer = self.terminal.backend().buffer();
            (0..buffer.area.width)
                .filter_map(|x| buffer.cell((x, y)))
                .map(ratatui::buffer::Cell::symbol)
                .collect::<String>()
                .trim_end()
                .to_owned()
        }
    }

    impl KeySource for Scripted {
        fn read_key(&mut self) -> io::Result<Option<Key>> {
            Ok(self.keys.pop_front().flatten())
        }
    }

    impl FrameSink for Scripted {
        fn show(&mut self, frame: &Frame) -> io::Result<()> {
            self.frames.push(frame.clone());
            self.terminal.show(frame)
        }
    }

    fn app(state: GameState<ChaCha12Rng>) -> App<ChaCha12Rng> {
        App {
            state,
            tick: Duration::ZERO,
        }
    }

    fn new_state() -> GameState<ChaCha12Rng> {
        GameState::new_with_rng(ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn quit_right_away() {
        let mut term = Scripted::new([Some(Key::Quit)]);
        let outcome = app(new_state()).run(&mut term).expect("no I/O errors");
        assert_eq!(
            outcome,
            Outcome {
                phase: Phase::Quit,
                score: 0,
                status: String::from("Quitting. Score: 0"),
            }
        );
        // One frame up front and one for the quitting tick
        assert_eq!(term.frames.len(), 2);
        assert_eq!(term.frames[0].status(), "Press 'q' to exit. Score: 0");
        assert_eq!(term.line(30), "Quitting. Score: 0");
    }

    #[test]
    fn quit_after_moving() {
        let mut term = Scripted::new([None, Some(Key::Left), None, Some(Key::Quit)]);
        let outcome = app(new_state()).run(&mut term).expect("no I/O errors");
        assert_eq!(outcome.phase, Phase::Quit);
        assert_eq!(term.frames.len(), 5);
    }

    #[test]
    fn run_until_bitten() {
        let mut state = new_state();
        state.place(
            Snake::from_segments(
                [
                    Position::new(5, 5),
                    Position::new(6, 5),
                    Position::new(6, 4),
                    Position::new(5, 4),
                    Position::new(4, 4),
                ],
                Direction::Left,
            ),
            Position::new(0, 0),
        );
        let mut term = Scripted::new([Some(Key::Up), Some(Key::Quit)]);
        let outcome = app(state).run(&mut term).expect("no I/O errors");
        assert_eq!(
            outcome,
            Outcome {
                phase: Phase::GameOver,
                score: 0,
                status: String::from("Game over! Final score: 0"),
            }
        );
        // The quit key is never read.
        assert_eq!(term.keys, [Some(Key::Quit)]);
        assert_eq!(term.line(30), "Game over! Final score: 0");
    }

    #[test]
    fn eat_then_quit() {
        let mut state = new_state();
        state.place(
            Snake::new(Position::new(10, 10), Direction::Right),
            Position::new(12, 10),
        );
        let mut term = Scripted::new([None, None, Some(Key::Quit)]);
        let outcome = app(state).run(&mut term).expect("no I/O errors");
        assert_eq!(outcome.phase, Phase::Quit);
        assert_eq!(outcome.score, 1);
        assert_eq!(term.frames[1].status(), "Press 'q' to exit. Score: 0");
        assert_eq!(term.frames[2].status(), "Press 'q' to exit. Score: 1");
        assert_eq!(outcome.status, "Quitting. Score: 1");
    }

    #[test]
    fn terminal_shows_cells_and_status() {
        let mut state = new_state();
        state.place(
            Snake::new(Position::new(1, 0), Direction::Right),
            Position::new(3, 0),
        );
        let mut term = Scripted::new([Some(Key::Quit)]);
        app(state).run(&mut term).expect("no I/O errors");
        let buffer = term.terminal.backend().buffer();
        let bg = |x: u16, y: u16| buffer.cell((x, y)).map(|c| c.bg);
        assert_eq!(bg(0, 0), Some(consts::BACKGROUND_COLOR.into()));
        assert_eq!(bg(1, 0), Some(consts::BACKGROUND_COLOR.into()));
        assert_eq!(bg(2, 0), Some(consts::SNAKE_COLOR.into()));
        assert_eq!(bg(3, 0), Some(consts::SNAKE_COLOR.into()));
        assert_eq!(bg(6, 0), Some(consts::FRUIT_COLOR.into()));
        assert_eq!(bg(7, 0), Some(consts::FRUIT_COLOR.into()));
        assert_eq!(bg(79, 29), Some(consts::BACKGROUND_COLOR.into()));
        assert_eq!(term.line(30), "Quitting. Score: 0");
    }
}
