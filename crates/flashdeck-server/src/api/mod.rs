//! HTTP API: routing and shared handler state.

mod cards;
mod decks;
pub mod error;
mod review;

use axum::extract::DefaultBodyLimit;
use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::storage::FlashcardDatabase;

pub use error::ApiError;

/// Shared application state. Handlers keep nothing else between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: FlashcardDatabase,
    /// Ceiling for request bodies, images included.
    pub max_body_bytes: usize,
}

/// Build the router serving the deck, card and review pile endpoints.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/decks", get(decks::list_decks).post(decks::create_deck))
        .route(
            "/decks/{id}",
            put(decks::rename_deck).delete(decks::delete_deck),
        )
        .route("/cards", post(cards::create_card))
        .route(
            "/cards/{id}",
            get(cards::list_cards)
                .put(cards::update_card)
                .delete(cards::delete_card),
        )
        .route("/cards/{id}/review", put(cards::set_review))
        .route(
            "/review-pile",
            get(review::list_review_pile).delete(review::clear_review_pile),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".into())
}
