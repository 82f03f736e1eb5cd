use crate::state::{State, View};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::*;
use std::{thread, time::Duration, time::Instant};
use tokio::sync::mpsc;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 250;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::UnboundedReceiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Event::Input(key)
                        }
                        Ok(_) => continue,
                        Err(err) => {
                            error!("Failed to read terminal event: {}", err);
                            break;
                        }
                    },
                    Ok(false) => Event::Tick,
                    Err(err) => {
                        error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                };
                // The receiver is gone once the UI loop has exited
                if tx.send(event).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Wait for the next terminal event. Returns `None` once the polling
    /// thread has stopped.
    ///
    pub async fn next(&mut self) -> Option<Event<KeyEvent>> {
        self.rx.recv().await
    }
}

/// Handle a key press according to the current view. Returns true if the
/// application should continue or false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent, now: Instant) -> bool {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::F(2),
            ..
        } => {
            state.toggle_log();
        }
        _ => match state.current_view() {
            View::Login => handle_login_key(state, key, now),
            View::Home => return handle_home_key(state, key),
        },
    }
    state.sync_session();
    true
}

fn handle_login_key(state: &mut State, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            state.add_form_char(c, now);
        }
        KeyCode::Backspace => {
            state.backspace_form_field(now);
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next(now);
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_previous(now);
        }
        KeyCode::Enter => {
            debug!("Processing submit terminal event '{:?}'...", key);
            state.submit_form();
        }
        _ => {}
    }
}

fn handle_home_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
            state.next_nav_item();
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
            state.previous_nav_item();
        }
        KeyCode::Enter => {
            state.select_nav_item();
        }
        KeyCode::Char('o') => {
            state.logout();
        }
        _ => {}
    }
    state.sync_session();
    true
}
