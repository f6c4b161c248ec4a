pub mod controllers;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod rate_limiter;
pub mod repositories;
pub mod router;
pub mod state;
