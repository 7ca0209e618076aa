//! Engine: Owns the terminal for the lifetime of the TUI.
//!
//! Raw mode, the alternate screen, bracketed paste and the input thread are
//! all set up in [`Engine::with_config`]. `Drop` undoes them in reverse, so
//! an early `?` out of the main loop still leaves a usable shell.

use super::messages::InputEvent;
use super::InputActor;
use crate::buffer::Buffer;
use crate::terminal::{PresentStats, ScreenWriter};
use crossbeam_channel::{bounded, Receiver, RecvError};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self as term, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Input channel capacity.
const INPUT_QUEUE: usize = 64;

/// Terminal setup options.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long the input thread blocks in one poll before checking for
    /// shutdown.
    pub input_poll_timeout: Duration,
    /// Draw on the alternate screen and restore the shell contents on exit.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(50),
            alternate_screen: true,
        }
    }
}

/// Terminal session: input events in, frames out.
pub struct Engine {
    config: EngineConfig,
    events: Receiver<InputEvent>,
    input: Option<InputActor>,
    screen: ScreenWriter,
    stdout: Stdout,
    size: (u16, u16),
}

impl Engine {
    /// Take over the terminal with default options.
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Fails if the terminal size cannot be read, raw mode cannot be
    /// entered or the input thread cannot be spawned.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let size = term::size()?;
        term::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, EnableBracketedPaste, cursor::Hide)?;

        let (tx, events) = bounded(INPUT_QUEUE);
        let input = InputActor::spawn(tx, config.input_poll_timeout)?;
        tracing::info!(width = size.0, height = size.1, "terminal ready");

        Ok(Self {
            config,
            events,
            input: Some(input),
            screen: ScreenWriter::new(),
            stdout,
            size,
        })
    }

    /// Columns.
    pub const fn width(&self) -> u16 {
        self.size.0
    }

    /// Rows.
    pub const fn height(&self) -> u16 {
        self.size.1
    }

    /// Block until the input thread sends something.
    pub fn next_event(&self) -> Result<InputEvent, RecvError> {
        self.events.recv()
    }

    /// Record a new terminal size. The next present repaints everything.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.screen.invalidate();
    }

    /// Show `buffer` on the terminal.
    pub fn present(&mut self, buffer: &Buffer) -> io::Result<PresentStats> {
        self.screen.present(buffer, &mut self.stdout)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(input) = self.input.take() {
            input.join();
        }

        let _ = execute!(self.stdout, DisableBracketedPaste, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(self.stdout, LeaveAlternateScreen);
        }
        let _ = term::disable_raw_mode();
        tracing::info!("terminal restored");
    }
}
