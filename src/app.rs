//! Application state and core logic

use crate::config::FormConfig;
use crate::lookup::{
    AddressLookupResult, LookupError, PostalLookup, ZipcloudClient, ADDRESS_NOT_FOUND_NOTICE,
};
use crate::platform::SEARCH_MODIFIER;
use crate::register::{LoggingRegistrar, Registrar, RegistrationRequest};
use crate::state::{AppState, FieldName, Form, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};

/// Status bar message after the registrar accepts a submission
const REGISTERED_MESSAGE: &str = "登録を受け付けました";

/// Postal code searched and what the service answered
type LookupOutcome = (String, Result<AddressLookupResult, LookupError>);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Address lookup service
    lookup: Arc<dyn PostalLookup>,
    /// Receives validated submissions
    registrar: Arc<dyn Registrar>,
    /// In-flight address lookups. Dropping the app aborts them.
    lookups: JoinSet<LookupOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the HTTP lookup client
    pub fn new(config: &FormConfig) -> Result<Self> {
        let lookup = ZipcloudClient::new(&config.lookup_endpoint())?;
        Ok(Self::with_services(
            config,
            Arc::new(lookup),
            Arc::new(LoggingRegistrar),
        ))
    }

    pub fn with_services(
        config: &FormConfig,
        lookup: Arc<dyn PostalLookup>,
        registrar: Arc<dyn Registrar>,
    ) -> Self {
        Self {
            state: AppState::new(config.field_set()),
            lookup,
            registrar,
            lookups: JoinSet::new(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Number of address lookups still running
    pub fn pending_lookups(&self) -> usize {
        self.lookups.len()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notice dialog is modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_action_panel = self.state.form.is_action_panel_active();

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('f') if key.modifiers.contains(SEARCH_MODIFIER) => {
                self.search_postal_code();
            }
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ if on_action_panel => self.handle_action_panel_key(key).await,
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            KeyCode::Enter => {
                if self.state.form.active_field_name() == Some(FieldName::PostalCode) {
                    self.search_postal_code();
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the action panel has focus
    async fn handle_action_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.state.form.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form.selected() {
                Some(FormButton::Register) => self.submit().await,
                Some(FormButton::SearchAddress) => {
                    self.search_postal_code();
                }
                None => {}
            },
            _ => {}
        }
    }

    /// Validate the form and hand it to the registrar when it passes
    pub async fn submit(&mut self) {
        if let Err(err) = self.state.form.submit() {
            tracing::debug!(field = %err.field(), "Submission rejected: {err}");
            return;
        }

        let request = RegistrationRequest::from_form(self.state.form.values());
        match self.registrar.register(&request).await {
            Ok(id) => {
                tracing::info!(request_id = %id, "Registration accepted");
                self.state.status_message = Some(REGISTERED_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::error!("Registration failed: {err:#}");
                self.state.push_error(format!("登録に失敗しました: {err}"));
            }
        }
    }

    /// Start an address lookup for the current postal code.
    /// Returns false without doing anything when the postal code is empty.
    pub fn search_postal_code(&mut self) -> bool {
        let postal_code = self.state.form.value(FieldName::PostalCode).to_string();
        if postal_code.is_empty() {
            return false;
        }

        tracing::debug!(%postal_code, "Starting address lookup");
        let lookup = Arc::clone(&self.lookup);
        self.lookups.spawn(async move {
            let result = lookup.lookup(&postal_code).await;
            (postal_code, result)
        });
        true
    }

    /// Apply every lookup that has finished since the last call
    pub fn poll_lookups(&mut self) {
        while let Some(joined) = self.lookups.try_join_next() {
            self.apply_joined(joined);
        }
    }

    fn apply_joined(&mut self, joined: Result<LookupOutcome, JoinError>) {
        match joined {
            Ok((postal_code, result)) => self.apply_lookup(&postal_code, result),
            Err(err) => tracing::error!("Address lookup task failed: {err}"),
        }
    }

    /// Write a lookup outcome back into the form
    fn apply_lookup(
        &mut self,
        postal_code: &str,
        result: Result<AddressLookupResult, LookupError>,
    ) {
        match result.and_then(|found| found.resolve_city(postal_code)) {
            Ok(city) => self.state.form.edit(FieldName::City, city),
            Err(err) if err.is_user_facing() => {
                tracing::info!("{err}");
                self.state.push_notice(ADDRESS_NOT_FOUND_NOTICE);
            }
            Err(err) => tracing::error!(postal_code, "Address lookup failed: {err}"),
        }
    }
}
