use crate::form::{FieldAction, LoginForm};
use crate::logger::LogBuffer;
use crate::session::{SessionState, SessionStore, Subscription};
use crate::ui::Theme;
use log::*;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::navigation::{Focus, NavItem, View};

/// Houses data representative of application state.
///
/// The login form is mounted only while the session is inactive; logging in
/// drops it (cancelling its pending validity check) and logging out mounts
/// a fresh one.
pub struct State {
    session: SessionStore,
    session_subscription: Subscription,
    session_events: mpsc::Receiver<SessionState>,
    view: View,
    form: Option<LoginForm>,
    focus: Focus,
    nav_item: NavItem,
    quiet_period: Duration,
    status_message: Option<String>,
    log_visible: bool,
    logs: LogBuffer,
    theme: Theme,
}

impl State {
    pub fn new(session: SessionStore, quiet_period: Duration, theme: Theme, logs: LogBuffer) -> Self {
        let (tx, rx) = mpsc::channel();
        let session_subscription = session.subscribe(move |state| {
            if let Err(err) = tx.send(state) {
                error!("Failed to forward session change: {}", err);
            }
        });
        let mut state = State {
            session: session.clone(),
            session_subscription,
            session_events: rx,
            view: View::Login,
            form: None,
            focus: Focus::Email,
            nav_item: NavItem::Users,
            quiet_period,
            status_message: None,
            log_visible: true,
            logs,
            theme,
        };
        state.apply_session(session.state());
        state
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn get_form(&self) -> Option<&LoginForm> {
        self.form.as_ref()
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    pub fn current_nav_item(&self) -> NavItem {
        self.nav_item
    }

    pub fn get_status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Append a character to the focused field.
    ///
    pub fn add_form_char(&mut self, c: char, now: Instant) -> &mut Self {
        if let (Some(kind), Some(form)) = (self.focus.field(), self.form.as_mut()) {
            let mut value = form.field(kind).value.clone();
            value.push(c);
            form.dispatch(kind, FieldAction::UserInput { value }, now);
        }
        self
    }

    /// Remove the last character of the focused field.
    ///
    pub fn backspace_form_field(&mut self, now: Instant) -> &mut Self {
        if let (Some(kind), Some(form)) = (self.focus.field(), self.form.as_mut()) {
            let mut value = form.field(kind).value.clone();
            if value.pop().is_some() {
                form.dispatch(kind, FieldAction::UserInput { value }, now);
            }
        }
        self
    }

    /// Move focus forward, blurring the field being left.
    ///
    pub fn focus_next(&mut self, now: Instant) -> &mut Self {
        self.blur_focused(now);
        self.focus = self.focus.next();
        self
    }

    /// Move focus backward, blurring the field being left.
    ///
    pub fn focus_previous(&mut self, now: Instant) -> &mut Self {
        self.blur_focused(now);
        self.focus = self.focus.previous();
        self
    }

    fn blur_focused(&mut self, now: Instant) {
        if let (Some(kind), Some(form)) = (self.focus.field(), self.form.as_mut()) {
            form.dispatch(kind, FieldAction::Blur, now);
        }
    }

    /// Whether the submit control is enabled.
    ///
    pub fn can_submit(&self) -> bool {
        self.form
            .as_ref()
            .and_then(LoginForm::submission)
            .is_some()
    }

    /// Forward the form values to the session if submission is enabled.
    /// Returns whether a session was started.
    ///
    pub fn submit_form(&mut self) -> bool {
        let credentials = match self.form.as_ref().and_then(LoginForm::submission) {
            Some(credentials) => credentials,
            None => {
                debug!("Ignoring submit while the form is invalid");
                return false;
            }
        };
        if let Err(err) = self.session.activate(&credentials) {
            warn!("Login rejected: {}", err);
            return false;
        }
        self.sync_session();
        true
    }

    pub fn logout(&mut self) -> &mut Self {
        self.session.deactivate();
        self.sync_session();
        self
    }

    pub fn next_nav_item(&mut self) -> &mut Self {
        self.nav_item = self.nav_item.next();
        self
    }

    pub fn previous_nav_item(&mut self) -> &mut Self {
        self.nav_item = self.nav_item.previous();
        self
    }

    /// Activate the selected navigation entry.
    ///
    pub fn select_nav_item(&mut self) -> &mut Self {
        if !self.session.is_active() {
            return self;
        }
        match self.nav_item {
            NavItem::Logout => {
                self.logout();
            }
            item => {
                info!("Opening {}", item.label());
                self.status_message = Some(format!("{} selected", item.label()));
            }
        }
        self
    }

    /// When the mounted form next needs to recompute its validity.
    ///
    pub fn form_deadline(&self) -> Option<Instant> {
        self.form.as_ref().and_then(LoginForm::recompute_deadline)
    }

    /// Let the mounted form publish its validity if the quiet period passed.
    ///
    pub fn poll_form(&mut self, now: Instant) -> &mut Self {
        if let Some(form) = self.form.as_mut() {
            form.poll(now);
        }
        self
    }

    /// Apply session changes delivered to this state's subscription.
    ///
    pub fn sync_session(&mut self) -> &mut Self {
        let mut latest = None;
        while let Ok(state) = self.session_events.try_recv() {
            latest = Some(state);
        }
        if let Some(state) = latest {
            self.apply_session(state);
        }
        self
    }

    fn apply_session(&mut self, session: SessionState) {
        if session.active {
            if let Some(mut form) = self.form.take() {
                form.dispose();
            }
            self.view = View::Home;
            self.nav_item = NavItem::Users;
        } else {
            if self.form.is_none() {
                self.form = Some(LoginForm::new(self.quiet_period));
            }
            self.view = View::Login;
            self.focus = Focus::Email;
        }
        self.status_message = None;
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.session.unsubscribe(self.session_subscription);
    }
}
