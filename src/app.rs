//! Application state and core logic

use crate::api::{PaymentApi, PaymentPayload};
use crate::session::{resolve, FormEvent, FormSession, PendingGuard};
use crate::state::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

/// Main application struct
pub struct App<A: PaymentApi> {
    /// Form session driven by this app
    pub session: FormSession,
    /// Client used for submissions
    api: Arc<A>,
    /// Queue of events produced outside the key handler (submission results)
    events_tx: UnboundedSender<FormEvent>,
    events_rx: UnboundedReceiver<FormEvent>,
    /// Field receiving keystrokes
    pub focused: Field,
    /// Whether the app should quit
    quit: bool,
}

impl<A: PaymentApi + 'static> App<A> {
    pub fn new(api: Arc<A>, session: FormSession) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session,
            api,
            events_tx,
            events_rx,
            focused: Field::FirstName,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Translate a key press into form events
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('r') if ctrl => self.dispatch(FormEvent::Reset),
            KeyCode::Tab | KeyCode::Down => self.focused = self.focused.next(),
            KeyCode::BackTab | KeyCode::Up => self.focused = self.focused.prev(),
            KeyCode::Enter => self.dispatch(FormEvent::SubmitRequested),
            KeyCode::Backspace => {
                let raw = self.session.form().without_last_char(self.focused);
                self.dispatch(FormEvent::FieldChanged(self.focused, raw));
            }
            KeyCode::Char(c) if !ctrl => {
                let raw = self.session.form().with_char(self.focused, c);
                self.dispatch(FormEvent::FieldChanged(self.focused, raw));
            }
            _ => {}
        }
    }

    /// Feed one event to the session, starting a submission if it asks for one
    pub fn dispatch(&mut self, event: FormEvent) {
        if let Some(payload) = self.session.handle(event) {
            self.spawn_submission(payload);
        }
    }

    /// Process queued events, then advance the notification clock
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
        }
        self.dispatch(FormEvent::Tick(Instant::now()));
    }

    fn spawn_submission(&self, payload: PaymentPayload) {
        let api = Arc::clone(&self.api);
        let guard = PendingGuard::new(self.events_tx.clone());
        tokio::spawn(async move {
            let outcome = resolve(api.as_ref(), &payload).await;
            guard.resolve(outcome);
        });
    }
}
