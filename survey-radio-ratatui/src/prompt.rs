//! Full-screen prompt for a single radio group.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::Style,
    widgets::Paragraph,
};
use survey_radio::{RadioButtons, RadioGroupError};
use thiserror::Error;

use crate::{KeyOutcome, RadioList, RadioListState, Theme, handle_key};

const HELP: &str = "↑/↓ move · Space/Enter select · 1-9 jump · Esc cancel";

/// Error type for the terminal prompt.
#[derive(Debug, Error)]
pub enum RatatuiRadioError {
    /// User cancelled the prompt (pressed Esc).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A selection event referred to a missing option.
    #[error("Selection error: {0}")]
    Selection(#[from] RadioGroupError),
}

/// Runs one radio group in the alternate screen until an option is picked.
#[derive(Debug, Clone, Default)]
pub struct RadioPrompt {
    theme: Theme,
}

impl RadioPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show the group and block until the user selects an option or cancels.
    ///
    /// Returns the index of the selected option. The callback has already
    /// been called by then.
    pub fn run<F>(&self, group: &mut RadioButtons<'_, F>) -> Result<usize, RatatuiRadioError>
    where
        F: FnMut(&str, &str),
    {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, group);
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop<F>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        group: &mut RadioButtons<'_, F>,
    ) -> Result<usize, RatatuiRadioError>
    where
        F: FnMut(&str, &str),
    {
        let mut state = RadioListState::for_view(&group.view());

        loop {
            terminal.draw(|frame| self.draw(frame, group, &mut state))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match handle_key(group, &mut state, key)? {
                KeyOutcome::Selected(idx) => return Ok(idx),
                KeyOutcome::Cancelled => {
                    log::debug!("Prompt for '{}' cancelled", group.value_key());
                    return Err(RatatuiRadioError::Cancelled);
                }
                KeyOutcome::Moved | KeyOutcome::Unchanged | KeyOutcome::Ignored => {}
            }
        }
    }

    fn draw<F>(&self, frame: &mut Frame, group: &RadioButtons<'_, F>, state: &mut RadioListState)
    where
        F: FnMut(&str, &str),
    {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Group
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let list = RadioList::new(group.view()).with_theme(self.theme.clone());
        frame.render_stateful_widget(list, chunks[0], state);

        let help = Paragraph::new(HELP).style(Style::default().fg(self.theme.border));
        frame.render_widget(help, chunks[1]);
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiRadioError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        or_undo(execute!(stdout, EnterAlternateScreen), disable_raw_mode)?;
        let backend = CrosstermBackend::new(stdout);
        or_undo(Terminal::new(backend), || {
            let mut stdout = io::stdout();
            let left = execute!(stdout, LeaveAlternateScreen);
            disable_raw_mode()?;
            left
        })
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiRadioError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Pass `step` through, running `undo` first if it failed.
///
/// The step's error is returned even when `undo` fails too.
fn or_undo<T, E>(
    step: Result<T, E>,
    undo: impl FnOnce() -> io::Result<()>,
) -> Result<T, RatatuiRadioError>
where
    E: Into<RatatuiRadioError>,
{
    step.map_err(|e| {
        if let Err(undo_err) = undo() {
            log::warn!("Failed to restore terminal: {undo_err}");
        }
        e.into()
    })
}
