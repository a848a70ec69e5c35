use crate::app::{FrameSink, KeySource};
use crate::key::Key;
use crate::render::Frame;
use crossterm::event::{poll, read};
use ratatui::DefaultTerminal;
use std::io;
use std::time::Duration;

/// The controlling terminal, switched to raw mode and the alternate screen
/// for as long as this value is alive.  Dropping it puts the terminal back
/// the way it was.
#[derive(Debug)]
pub(crate) struct Term {
    terminal: DefaultTerminal,
    warned_small: bool,
}

impl Term {
    pub(crate) fn acquire() -> io::Result<Term> {
        let terminal = ratatui::try_init()?;
        tracing::debug!("Terminal switched to raw mode");
        Ok(Term {
            terminal,
            warned_small: false,
        })
    }

    fn check_size(&mut self, frame: &Frame) -> io::Result<()> {
        if self.warned_small {
            return Ok(());
        }
        let needed = frame.display_size();
        let actual = self.terminal.size()?;
        if actual.width < needed.width || actual.height < needed.height {
            tracing::warn!(?needed, ?actual, "Terminal too small; canvas will be clipped");
            self.warned_small = true;
        }
        Ok(())
    }
}

impl KeySource for Term {
    fn read_key(&mut self) -> io::Result<Option<Key>> {
        if poll(Duration::ZERO)? {
            let event = read()?;
            let key = Key::from_event(&event);
            tracing::trace!(?event, ?key, "Read terminal event");
            Ok(key)
        } else {
            Ok(None)
        }
    }
}

impl FrameSink for Term {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        self.check_size(frame)?;
        self.terminal.show(frame)
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        match ratatui::try_restore() {
            Ok(()) => tracing::debug!("Terminal restored"),
            Err(e) => tracing::error!(error = %e, "Failed to restore terminal"),
        }
    }
}
