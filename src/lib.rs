pub mod adapters;
pub mod application;
pub mod client;
pub mod domain;
pub mod ui;

pub use adapters::{router::create_router, state::AppState};
