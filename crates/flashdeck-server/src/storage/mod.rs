//! SQLite storage for the Flashdeck server.
//!
//! Provides persistence for decks, cards and the review flag.

mod db;
mod queries;
mod queries_cards;

#[cfg(test)]
mod tests;

pub use db::FlashcardDatabase;
pub use flashdeck_core::db::DatabaseError;
pub use queries_cards::CardParams;
