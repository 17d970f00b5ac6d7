//! Row and wire models shared by the server and the client.

use serde::{Deserialize, Serialize};

/// A deck with its derived card count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub card_count: i64,
}

/// A flashcard as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    pub id: i64,
    pub deck_id: i64,
    pub term: String,
    pub definition: String,
    pub term_image: Option<String>,
    pub definition_image: Option<String>,
    pub review: bool,
}

impl Card {
    pub fn has_term_image(&self) -> bool {
        self.term_image.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_definition_image(&self) -> bool {
        self.definition_image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Body of `POST /decks` and `PUT /decks/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckNameRequest {
    pub name: String,
}

/// Body of `POST /cards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardRequest {
    pub deck_id: i64,
    pub term: String,
    pub definition: String,
    pub term_image: Option<String>,
    pub definition_image: Option<String>,
}

/// Body of `PUT /cards/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContentRequest {
    pub term: String,
    pub definition: String,
    pub term_image: Option<String>,
    pub definition_image: Option<String>,
}

/// Body of `PUT /cards/:id/review`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub review: bool,
}

/// `{message}` body returned by deletes and the review pile clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{error}` body returned by every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
