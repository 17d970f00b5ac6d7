//! `Flashdeck` Core Library
//!
//! Shared functionality for `Flashdeck` components:
//! - Input validation for decks and cards
//! - Row and wire models shared by the server and the client
//! - Configuration resolution and hierarchy
//! - `SQLite` pool helpers and storage errors
//! - Common error types

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod tracing_init;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Card, Deck};
pub use validate::ValidationError;
