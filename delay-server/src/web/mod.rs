//! Web layer for the delay service.
//!
//! Provides the read-only HTTP endpoints over both providers.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
