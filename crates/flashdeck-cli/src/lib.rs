//! Flashdeck CLI Library
//!
//! Terminal study view (ratatui) and deck/card/review-pile subcommands
//! talking to the Flashdeck server over HTTP.

pub mod app;
pub mod card_cmd;
pub mod client;
pub mod deck_cmd;
pub mod images;
pub mod review_cmd;
pub mod tui;
pub mod ui;
