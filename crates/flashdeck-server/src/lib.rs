//! Flashdeck Server Library
//!
//! Core functionality for the Flashdeck HTTP API:
//! - SQLite storage for decks, cards and the review flag
//! - Stateless axum handlers validating input and mapping store outcomes to
//!   HTTP responses

pub mod api;
pub mod storage;
