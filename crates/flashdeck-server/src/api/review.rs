//! `/review-pile` handlers.

use axum::extract::State;
use axum::Json;
use flashdeck_core::models::MessageResponse;
use flashdeck_core::Card;
use tracing::{debug, info};

use super::{ApiError, AppState};

/// `GET /review-pile`
pub async fn list_review_pile(State(state): State<AppState>) -> Result<Json<Vec<Card>>, ApiError> {
    let cards = state
        .db
        .list_review_pile()
        .await
        .map_err(|e| ApiError::from_db(e, "Card"))?;
    debug!(count = cards.len(), "Returning review pile");
    Ok(Json(cards))
}

/// `DELETE /review-pile` -- unflags every card; nothing is deleted.
pub async fn clear_review_pile(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cleared = state
        .db
        .clear_review_pile()
        .await
        .map_err(|e| ApiError::from_db(e, "Card"))?;
    info!(cleared, "Review pile cleared");
    Ok(Json(MessageResponse {
        message: format!("Cleared {cleared} cards from review pile"),
    }))
}
