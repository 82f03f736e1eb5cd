use crate::config::Config;
use crate::error::AppResult;
use crate::events::terminal::{handle_key, Event as TerminalEvent, Handler as TerminalEventHandler};
use crate::logger::{CustomLogger, LogBuffer};
use crate::session::SessionStore;
use crate::state::State;
use crate::storage::FileStore;
use crate::ui::Theme;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::time::Instant;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> AppResult<()> {
        let logs = LogBuffer::new();
        CustomLogger::new(config.log_level_filter()?, logs.clone()).init()?;

        info!("Starting application...");
        let storage_path = config.storage_path()?;
        debug!("Using session storage at {}", storage_path.display());
        let session = SessionStore::restore(Box::new(FileStore::new(storage_path)));
        session.subscribe(|session| {
            info!(
                "Session is now {}",
                if session.active { "active" } else { "inactive" }
            )
        });

        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default (available: {})",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });

        let mut app = App {
            state: State::new(session, config.debounce_period(), theme, logs),
        };
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Prepare the terminal, run the event loop, and restore the terminal
    /// even if the loop failed.
    ///
    async fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Redraw after every event and wake up for whichever comes first: the
    /// next terminal event or the form's pending validity check.
    ///
    async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
        let mut terminal_events = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;

            let deadline = self.state.form_deadline();
            tokio::select! {
                event = terminal_events.next() => match event {
                    Some(TerminalEvent::Input(key)) => {
                        if !handle_key(&mut self.state, key, Instant::now()) {
                            debug!("Received application exit request.");
                            break;
                        }
                    }
                    Some(TerminalEvent::Tick) => {}
                    None => {
                        warn!("Terminal event stream closed");
                        break;
                    }
                },
                _ = sleep_until(deadline) => {
                    self.state.poll_form(Instant::now());
                }
            }
        }
        Ok(())
    }
}

/// Sleep until the deadline, or forever without one.
///
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}
