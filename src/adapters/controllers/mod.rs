pub mod health_controller;
pub mod paste_controller;
