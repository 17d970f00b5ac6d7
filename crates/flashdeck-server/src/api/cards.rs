//! `/cards` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use flashdeck_core::models::MessageResponse;
use flashdeck_core::validate::{
    parse_id, parse_id_value, validate_image, validate_review, validate_text, MAX_DEFINITION_LEN,
    MAX_TEXT_LEN,
};
use flashdeck_core::{Card, ValidationError};
use serde_json::Value;
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::storage::CardParams;

/// Card content after validation, owning its strings.
struct CardContent {
    term: String,
    definition: String,
    term_image: Option<String>,
    definition_image: Option<String>,
}

impl CardContent {
    fn from_body(body: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            term: validate_text(body.get("term"), "Term", MAX_TEXT_LEN)?,
            definition: validate_text(body.get("definition"), "Definition", MAX_DEFINITION_LEN)?,
            term_image: validate_image(body.get("termImage"), "Term image")?,
            definition_image: validate_image(body.get("definitionImage"), "Definition image")?,
        })
    }

    fn params(&self) -> CardParams<'_> {
        CardParams {
            term: &self.term,
            definition: &self.definition,
            term_image: self.term_image.as_deref(),
            definition_image: self.definition_image.as_deref(),
        }
    }
}

/// `GET /cards/{deck_id}`
pub async fn list_cards(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let deck_id = parse_id(&deck_id, "deck")?;

    let cards = state
        .db
        .list_cards(deck_id)
        .await
        .map_err(|e| ApiError::from_db(e, "Deck"))?;
    debug!(deck_id, count = cards.len(), "Returning cards");
    Ok(Json(cards))
}

/// `POST /cards`
pub async fn create_card(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Card>, ApiError> {
    let Json(body) = body?;
    let deck_id = parse_id_value(body.get("deckId"), "deck")?;
    let content = CardContent::from_body(&body)?;

    let card = state
        .db
        .create_card(deck_id, &content.params())
        .await
        .map_err(|e| ApiError::from_db(e, "Deck"))?;
    info!(card_id = card.id, deck_id, "Card created");
    Ok(Json(card))
}

/// `PUT /cards/{id}`
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Card>, ApiError> {
    let id = parse_id(&id, "card")?;
    let Json(body) = body?;
    let content = CardContent::from_body(&body)?;

    let card = state
        .db
        .update_card(id, &content.params())
        .await
        .map_err(|e| ApiError::from_db(e, "Card"))?;
    info!(card_id = id, "Card updated");
    Ok(Json(card))
}

/// `DELETE /cards/{id}`
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "card")?;

    state
        .db
        .delete_card(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Card"))?;
    info!(card_id = id, "Card deleted");
    Ok(Json(MessageResponse {
        message: "Card deleted successfully".into(),
    }))
}

/// `PUT /cards/{id}/review`
pub async fn set_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Card>, ApiError> {
    let id = parse_id(&id, "card")?;
    let Json(body) = body?;
    let review = validate_review(body.get("review"))?;

    let card = state
        .db
        .set_card_review(id, review)
        .await
        .map_err(|e| ApiError::from_db(e, "Card"))?;
    info!(card_id = id, review, "Review flag updated");
    Ok(Json(card))
}
