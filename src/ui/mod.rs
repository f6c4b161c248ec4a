//! Client UI: view state, notifications and the local session, driven
//! against either the HTTP API or an in-process store.

mod app;
mod backend;
mod form;
mod format;
mod session;
mod state;

pub use app::PastebinApp;
pub use backend::{LocalBackend, PasteBackend};
pub use form::{Expiration, Language, PasteForm};
pub use format::{format_date, share_url};
pub use session::{Session, User, ANONYMOUS_AUTHOR};
pub use state::{Notification, UiState, View, ViewTicket, NOTIFICATION_TTL};
