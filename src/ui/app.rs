use std::time::Instant;

use tracing::warn;

use crate::ui::{
    backend::PasteBackend,
    state::{UiState, View},
};

/// Drives [`UiState`] against a [`PasteBackend`].
pub struct PastebinApp<B> {
    backend: B,
    state: UiState,
}

impl<B: PasteBackend> PastebinApp<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: UiState::new(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn load_pastes(&mut self) {
        self.state.start_loading();
        let result = self.backend.list_pastes().await;
        self.state.pastes_loaded(result, Instant::now());
    }

    /// Submits the form. On success the history list is reloaded through the
    /// listing, which does not count as a view.
    pub async fn create_paste(&mut self) -> Option<String> {
        let request = self.state.submit_form(Instant::now())?;

        match self.backend.create_paste(&request).await {
            Ok(id) => {
                self.state.paste_created(Instant::now());
                self.load_pastes().await;
                Some(id)
            }
            Err(e) => {
                self.state.paste_creation_failed(&e, Instant::now());
                None
            }
        }
    }

    pub async fn open_paste(&mut self, paste_id: &str) {
        let Some(ticket) = self.state.begin_view(paste_id, Instant::now()) else {
            return;
        };
        let result = self.backend.get_paste(ticket.paste_id()).await;
        self.state.finish_view(ticket, result, Instant::now());
    }

    pub async fn delete_paste(&mut self, paste_id: &str) {
        self.state.remove_paste(paste_id, Instant::now());

        if let Err(e) = self.backend.delete_paste(paste_id).await {
            if !e.is_not_found() {
                warn!("Deleting paste {} failed: {}", paste_id, e);
                self.state.notify("Failed to delete paste", Instant::now());
            }
        }
    }

    pub fn show(&mut self, view: View) {
        self.state.navigate(view);
    }

    pub fn back(&mut self) {
        self.state.back();
    }

    pub fn toggle_auth(&mut self) {
        self.state.toggle_auth(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::config::server::BurnPolicy,
        ui::{backend::LocalBackend, form::Expiration},
    };

    #[tokio::test]
    async fn create_lists_the_new_paste_without_consuming_a_view() {
        let mut app = PastebinApp::new(LocalBackend::new());
        app.load_pastes().await;
        assert!(!app.state().is_loading());

        app.state_mut().form.content = "hello".to_string();
        app.state_mut().form.expiration = Expiration::Never;
        let id = app.create_paste().await.unwrap();

        let state = app.state();
        assert_eq!(state.view(), View::History);
        assert_eq!(state.pastes().len(), 1);
        assert_eq!(state.pastes()[0].id, id);
        assert_eq!(state.pastes()[0].views, 0);
    }

    #[tokio::test]
    async fn burn_after_read_paste_disappears_from_the_ui() {
        let mut app = PastebinApp::new(LocalBackend::with_policy(BurnPolicy::SecondRead));
        app.state_mut().form.content = "once".to_string();
        app.state_mut().form.burn_after_read = true;
        let id = app.create_paste().await.unwrap();

        app.open_paste(&id).await;
        assert_eq!(app.state().view(), View::View);
        assert_eq!(app.state().selected().unwrap().views, 1);
        app.back();

        app.open_paste(&id).await;
        assert_eq!(app.state().selected().unwrap().content, "once");
        assert!(app.state().pastes().is_empty());
        app.back();

        app.open_paste(&id).await;
        assert_eq!(app.state().view(), View::History);
        assert_eq!(
            app.state().notification(Instant::now()),
            Some("This paste has been burned or expired")
        );
    }

    #[tokio::test]
    async fn delete_is_applied_locally_and_remotely() {
        let mut app = PastebinApp::new(LocalBackend::new());
        app.state_mut().form.content = "temporary".to_string();
        let id = app.create_paste().await.unwrap();

        app.delete_paste(&id).await;
        assert!(app.state().pastes().is_empty());
        assert_eq!(app.state().notification(Instant::now()), Some("Paste deleted"));

        assert!(app.backend().get_paste(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn empty_content_never_reaches_the_backend() {
        let mut app = PastebinApp::new(LocalBackend::new());
        assert!(app.create_paste().await.is_none());
        assert!(app.backend().list_pastes().await.unwrap().is_empty());
    }
}
