//! TUI application state and event loop

use crate::scores::ScoreSink;
use crate::session::{Action, Outcome, Phase, SessionController, Update};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long one poll waits before the idle check runs
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Application state wrapping one session
pub struct App<'a, S: ScoreSink> {
    pub controller: SessionController<'a, S>,
    pub update: Update,
    pub outcome: Option<Outcome>,
    pub should_quit: bool,
}

impl<'a, S: ScoreSink> App<'a, S> {
    #[must_use]
    pub fn new(mut controller: SessionController<'a, S>) -> Self {
        let update = controller.view();
        Self {
            controller,
            update,
            outcome: None,
            should_quit: false,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let update = self.controller.apply(action);
        if let Some(outcome) = update.outcome {
            self.outcome = Some(outcome);
        }
        self.update = update;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            if !self.controller.phase().is_terminal() {
                self.dispatch(Action::Cancel);
            }
            self.should_quit = true;
            return;
        }

        match self.controller.phase() {
            Phase::Menu => match code {
                KeyCode::Enter => self.dispatch(Action::Start),
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.dispatch(Action::Cancel);
                    self.should_quit = true;
                }
                _ => {}
            },
            Phase::Playing => match code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.dispatch(Action::Letter(c as u8));
                }
                KeyCode::Enter => self.dispatch(Action::Submit),
                KeyCode::Backspace | KeyCode::Delete => self.dispatch(Action::Clear),
                KeyCode::Left => self.dispatch(Action::PagePrevious),
                KeyCode::Right => self.dispatch(Action::PageNext),
                KeyCode::Esc => self.dispatch(Action::Cancel),
                _ => {}
            },
            // Terminal phases: the final screen stays until any key
            Phase::Won | Phase::Lost | Phase::Cancelled => {
                self.should_quit = true;
            }
        }
    }

    fn check_timeout(&mut self) {
        if let Some(update) = self.controller.check_timeout(Instant::now()) {
            if let Some(outcome) = update.outcome {
                self.outcome = Some(outcome);
            }
            self.update = update;
        }
    }
}

/// Run the TUI application, returning the finished app
///
/// The caller reads the outcome and the final render update off the returned
/// app (the terminal update keeps the full grid and status text).
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: ScoreSink>(mut app: App<'_, S>) -> Result<App<'_, S>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(app)
}

fn run_app<B: ratatui::backend::Backend, S: ScoreSink>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoids double input on
                // platforms that also report releases)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key.code, key.modifiers);
            }
        } else {
            app.check_timeout();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
