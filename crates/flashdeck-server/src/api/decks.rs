//! `/decks` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use flashdeck_core::models::MessageResponse;
use flashdeck_core::validate::{parse_id, validate_text, MAX_TEXT_LEN};
use flashdeck_core::Deck;
use serde_json::Value;
use tracing::{debug, info};

use super::{ApiError, AppState};

/// `GET /decks`
pub async fn list_decks(State(state): State<AppState>) -> Result<Json<Vec<Deck>>, ApiError> {
    let decks = state
        .db
        .list_decks()
        .await
        .map_err(|e| ApiError::from_db(e, "Deck"))?;
    debug!(count = decks.len(), "Returning decks");
    Ok(Json(decks))
}

/// `POST /decks`
pub async fn create_deck(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Deck>, ApiError> {
    let Json(body) = body?;
    let name = validate_text(body.get("name"), "Deck name", MAX_TEXT_LEN)?;

    let deck = state
        .db
        .create_deck(&name)
        .await
        .map_err(|e| ApiError::from_db(e, "Deck"))?;
    info!(deck_id = deck.id, name = %deck.name, "Deck created");
    Ok(Json(deck))
}

/// `PUT /decks/{id}`
pub async fn rename_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Deck>, ApiError> {
    let id = parse_id(&id, "deck")?;
    let Json(body) = body?;
    let name = validate_text(body.get("name"), "Deck name", MAX_TEXT_LEN)?;

    let deck = state
        .db
        .rename_deck(id, &name)
        .await
        .map_err(|e| ApiError::from_db(e, "Deck"))?;
    info!(deck_id = deck.id, name = %deck.name, "Deck renamed");
    Ok(Json(deck))
}

/// `DELETE /decks/{id}` -- removes the deck and every card in it.
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "deck")?;

    state
        .db
        .delete_deck(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Deck"))?;
    info!(deck_id = id, "Deck deleted");
    Ok(Json(MessageResponse {
        message: "Deck deleted successfully".into(),
    }))
}
