use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::warn;

use crate::{
    adapters::dto::paste_dto::CreatePasteRequest,
    client::ClientError,
    domain::models::paste::{Paste, PasteSummary},
    ui::{
        form::PasteForm,
        format::share_url,
        session::{Session, User},
    },
};

/// How long a notification banner stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Create,
    History,
    View,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Handle for an in-flight read started by [`UiState::begin_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTicket {
    paste_id: String,
    generation: u64,
}

impl ViewTicket {
    pub fn paste_id(&self) -> &str {
        &self.paste_id
    }
}

/// Everything the UI renders from. Transitions take `now` explicitly so the
/// notification timer can be driven by the caller.
#[derive(Debug, Clone)]
pub struct UiState {
    view: View,
    pastes: Vec<PasteSummary>,
    selected: Option<Paste>,
    notification: Option<Notification>,
    session: Session,
    clipboard: Option<String>,
    pub form: PasteForm,
    loading: bool,
    load_error: Option<String>,
    generation: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            view: View::Create,
            pastes: Vec::new(),
            selected: None,
            notification: None,
            session: Session::default(),
            clipboard: None,
            form: PasteForm::default(),
            loading: true,
            load_error: None,
            generation: 0,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn pastes(&self) -> &[PasteSummary] {
        &self.pastes
    }

    pub fn selected(&self) -> Option<&Paste> {
        self.selected.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Switches views. Any read started before the switch is treated as stale.
    /// The paste view is only reachable with a selected paste.
    pub fn navigate(&mut self, view: View) {
        if view == View::View && self.selected.is_none() {
            return;
        }
        self.view = view;
        self.generation += 1;
    }

    pub fn back(&mut self) {
        self.navigate(View::History);
    }

    /// Shows `message`, replacing whatever banner was visible.
    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification {
            message: message.into(),
            expires_at: now + NOTIFICATION_TTL,
        });
    }

    pub fn notification(&self, now: Instant) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|notification| now < notification.expires_at)
            .map(|notification| notification.message.as_str())
    }

    /// Drops the banner once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| now >= notification.expires_at)
        {
            self.notification = None;
        }
    }

    pub fn toggle_auth(&mut self, now: Instant) {
        if self.session.is_authenticated() {
            self.session.logout();
            self.notify("Logged out successfully", now);
        } else {
            self.session.login(User::demo());
            self.notify("Logged in successfully", now);
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn pastes_loaded(&mut self, result: Result<Vec<PasteSummary>, ClientError>, now: Instant) {
        self.loading = false;
        match result {
            Ok(pastes) => {
                self.pastes = pastes;
                self.load_error = None;
            }
            Err(e) => {
                warn!("Loading pastes failed: {}", e);
                self.load_error = Some(e.to_string());
                self.notify("Failed to load pastes", now);
            }
        }
    }

    /// Returns the request to send, or notifies and returns `None` for an empty draft.
    pub fn submit_form(&mut self, now: Instant) -> Option<CreatePasteRequest> {
        if !self.form.has_content() {
            self.notify("Please enter some content", now);
            return None;
        }
        Some(self.form.to_request())
    }

    pub fn paste_created(&mut self, now: Instant) {
        self.form.reset();
        self.notify("Paste created successfully!", now);
        self.navigate(View::History);
    }

    pub fn paste_creation_failed(&mut self, error: &ClientError, now: Instant) {
        warn!("Creating paste failed: {}", error);
        self.notify("Failed to create paste", now);
    }

    /// Starts opening a paste. Returns `None` without a request when the
    /// listed copy is already past its expiry.
    pub fn begin_view(&mut self, paste_id: &str, now: Instant) -> Option<ViewTicket> {
        let expired = self
            .pastes
            .iter()
            .find(|paste| paste.id == paste_id)
            .and_then(|paste| paste.expires_at)
            .is_some_and(|expires_at| expires_at <= Utc::now());

        if expired {
            self.notify("This paste has expired", now);
            return None;
        }

        Some(ViewTicket {
            paste_id: paste_id.to_string(),
            generation: self.generation,
        })
    }

    /// Applies the outcome of a read. Returns `false` when the user navigated
    /// away in the meantime and the outcome was dropped.
    pub fn finish_view(
        &mut self,
        ticket: ViewTicket,
        result: Result<Paste, ClientError>,
        now: Instant,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        match result {
            Ok(paste) => {
                if paste.deleted {
                    self.pastes.retain(|listed| listed.id != paste.id);
                } else if let Some(listed) = self.pastes.iter_mut().find(|p| p.id == paste.id) {
                    listed.views = paste.views;
                }
                self.selected = Some(paste);
                self.navigate(View::View);
            }
            Err(e) if e.is_not_found() => {
                self.pastes.retain(|listed| listed.id != ticket.paste_id);
                self.notify("This paste has been burned or expired", now);
            }
            Err(e) => {
                warn!("Fetching paste {} failed: {}", ticket.paste_id, e);
                self.notify("Failed to fetch paste", now);
            }
        }
        true
    }

    /// Removes a paste from the local list without waiting for the server.
    pub fn remove_paste(&mut self, paste_id: &str, now: Instant) {
        self.pastes.retain(|paste| paste.id != paste_id);
        if self.selected.as_ref().is_some_and(|paste| paste.id == paste_id) {
            self.selected = None;
            if self.view == View::View {
                self.navigate(View::History);
            }
        }
        self.notify("Paste deleted", now);
    }

    /// Share link for a known public paste, also placed on the clipboard.
    /// Private or unknown pastes are refused with a banner.
    pub fn share(&mut self, origin: &str, paste_id: &str, now: Instant) -> Option<String> {
        let listed = self
            .pastes
            .iter()
            .find(|paste| paste.id == paste_id)
            .map(|paste| paste.is_private);
        let selected = self
            .selected
            .as_ref()
            .filter(|paste| paste.id == paste_id)
            .map(|paste| paste.is_private);

        match listed.or(selected) {
            Some(false) => {
                let url = share_url(origin, paste_id);
                self.copy(url.clone(), now);
                Some(url)
            }
            Some(true) => {
                self.notify("Private pastes cannot be shared", now);
                None
            }
            None => {
                self.notify("Failed to copy to clipboard", now);
                None
            }
        }
    }

    /// Copies the content of the paste being viewed.
    pub fn copy_selected(&mut self, now: Instant) -> bool {
        match self.selected.as_ref().map(|paste| paste.content.clone()) {
            Some(content) => {
                self.copy(content, now);
                true
            }
            None => {
                self.notify("Failed to copy to clipboard", now);
                false
            }
        }
    }

    pub fn clear_clipboard(&mut self, now: Instant) {
        self.clipboard = None;
        self.notify("Clipboard cleared!", now);
    }

    fn copy(&mut self, text: String, now: Instant) {
        self.clipboard = Some(text);
        self.notify("Copied to clipboard!", now);
    }
}
