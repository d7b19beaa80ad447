//! Application state and input handling.

use crate::games::word_scramble::{
    GameSession, PendingSession, Rejection, RejectionReason, SessionStartFailed, SubmitOutcome,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// A modal message shown over the game, like a platform alert dialog.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    /// Creates an alert.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Maps a rejection to the alert shown to the player.
#[instrument]
pub fn alert_for(rejection: &Rejection, root: &str, min_length: usize) -> Alert {
    match rejection.reason() {
        RejectionReason::TooShort => Alert::new(
            "Word too short",
            format!("Words must be at least {} letters long.", min_length),
        ),
        RejectionReason::IsRootWord => Alert::new(
            "Word not allowed",
            "You can't use the starting word itself.",
        ),
        RejectionReason::AlreadyUsed => Alert::new("Word used already", "Be more original!"),
        RejectionReason::NotARealWord => Alert::new(
            "Word not recognized",
            "You can't just make them up, you know!",
        ),
        RejectionReason::NotSpellableFromRoot => Alert::new(
            "Word not possible",
            format!("You can't spell that word from '{}'!", root),
        ),
    }
}

/// Alert shown when no round could be started.
pub fn start_failed_alert(error: &SessionStartFailed) -> Alert {
    Alert::new(
        "Could not start a round",
        format!("{}. Fix the word list and press Ctrl-N to retry.", error.reason),
    )
}

/// Main application state.
///
/// Exactly one of `session` and `pending` is present: the game is either
/// in a round or waiting for its first round to start.
#[derive(Debug, Getters)]
pub struct App {
    #[getter(skip)]
    session: Option<GameSession>,
    #[getter(skip)]
    pending: Option<PendingSession>,
    input: String,
    alert: Option<Alert>,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates the application around a started session.
    #[instrument(skip(session))]
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Some(session),
            pending: None,
            input: String::new(),
            alert: None,
            status: "Type a word and press Enter.".to_string(),
            should_quit: false,
        }
    }

    /// Creates the application around a session whose first round failed
    /// to start. The failure is shown and Ctrl-N retries.
    #[instrument(skip(pending))]
    pub fn waiting(pending: PendingSession, error: SessionStartFailed) -> Self {
        Self {
            session: None,
            pending: Some(pending),
            input: String::new(),
            alert: Some(start_failed_alert(&error)),
            status: "No round in progress. Press Ctrl-N to retry.".to_string(),
            should_quit: false,
        }
    }

    /// Creates the application from the result of [`PendingSession::start`].
    pub fn from_start(started: Result<GameSession, (PendingSession, SessionStartFailed)>) -> Self {
        match started {
            Ok(session) => Self::new(session),
            Err((pending, error)) => Self::waiting(pending, error),
        }
    }

    /// The running session, if a round has started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            }
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                debug!("Dismissing alert");
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc if self.input.is_empty() => self.should_quit = true,
            KeyCode::Esc => self.input.clear(),
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Submits the current input to the session.
    ///
    /// Accepted and ignored input clears the text field; rejected input is
    /// kept so the player can correct it.
    #[instrument(skip(self), fields(input = %self.input))]
    pub fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            debug!("Submission before any round started");
            self.status = "No round in progress. Press Ctrl-N to retry.".to_string();
            return;
        };

        match session.submit(&self.input) {
            SubmitOutcome::Ignored => {
                self.input.clear();
            }
            SubmitOutcome::Accepted { word, score } => {
                info!(%word, %score, "Word accepted");
                self.status = format!("Nice! '{}' scored. Total: {}", word, score);
                self.input.clear();
            }
            SubmitOutcome::Rejected(rejection) => {
                let alert = alert_for(
                    &rejection,
                    session.root_word().as_str(),
                    *session.settings().min_length(),
                );
                debug!(title = %alert.title(), "Showing rejection alert");
                self.alert = Some(alert);
            }
        }
    }

    /// Starts a new round, or retries the first one if it never started.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        let result = if let Some(session) = self.session.as_mut() {
            session.reset()
        } else if let Some(pending) = self.pending.take() {
            match pending.start() {
                Ok(session) => {
                    self.session = Some(session);
                    Ok(())
                }
                Err((pending, e)) => {
                    self.pending = Some(pending);
                    Err(e)
                }
            }
        } else {
            return;
        };

        match result {
            Ok(()) => {
                self.input.clear();
                self.alert = None;
                if let Some(session) = &self.session {
                    self.status = format!("Round {}: new root word!", session.round());
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not start a new round");
                self.alert = Some(start_failed_alert(&e));
            }
        }
    }
}
