//! HTTP client for the Flashdeck server API.
//!
//! Every failed request carries the server's `{error}` message so the TUI and
//! the subcommands can show it verbatim.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use flashdeck_core::config::ClientConfig;
use flashdeck_core::models::{
    CardContentRequest, DeckNameRequest, ErrorBody, MessageResponse, NewCardRequest, ReviewRequest,
};
use flashdeck_core::{Card, Deck};

/// API client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Card text and images sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub term: String,
    pub definition: String,
    pub term_image: Option<String>,
    pub definition_image: Option<String>,
}

impl CardDraft {
    pub fn text(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            ..Self::default()
        }
    }
}

/// Flashdeck REST client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.server_url.is_empty() {
            return Err(ClientError::Config("server_url is empty".into()));
        }

        // reqwest is built with rustls-no-provider; Err means already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let base_url = config.server_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or turn the `{error}` body into [`ClientError::Api`].
    async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("Unknown error").into(),
        };
        debug!(status = status.as_u16(), %message, "API request failed");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // =========================================================================
    // Decks
    // =========================================================================

    pub async fn list_decks(&self) -> Result<Vec<Deck>, ClientError> {
        let resp = self.http.get(self.url("/decks")).send().await?;
        Self::parse(resp).await
    }

    pub async fn create_deck(&self, name: &str) -> Result<Deck, ClientError> {
        let body = DeckNameRequest { name: name.into() };
        let resp = self.http.post(self.url("/decks")).json(&body).send().await?;
        Self::parse(resp).await
    }

    pub async fn rename_deck(&self, deck_id: i64, name: &str) -> Result<Deck, ClientError> {
        let body = DeckNameRequest { name: name.into() };
        let resp = self
            .http
            .put(self.url(&format!("/decks/{deck_id}")))
            .json(&body)
            .send()
            .await?;
        Self::parse(resp).await
    }

    pub async fn delete_deck(&self, deck_id: i64) -> Result<String, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/decks/{deck_id}")))
            .send()
            .await?;
        Ok(Self::parse::<MessageResponse>(resp).await?.message)
    }

    // =========================================================================
    // Cards
    // =========================================================================

    pub async fn list_cards(&self, deck_id: i64) -> Result<Vec<Card>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/cards/{deck_id}")))
            .send()
            .await?;
        Self::parse(resp).await
    }

    pub async fn create_card(&self, deck_id: i64, draft: CardDraft) -> Result<Card, ClientError> {
        let body = NewCardRequest {
            deck_id,
            term: draft.term,
            definition: draft.definition,
            term_image: draft.term_image,
            definition_image: draft.definition_image,
        };
        let resp = self.http.post(self.url("/cards")).json(&body).send().await?;
        Self::parse(resp).await
    }

    pub async fn update_card(&self, card_id: i64, draft: CardDraft) -> Result<Card, ClientError> {
        let body = CardContentRequest {
            term: draft.term,
            definition: draft.definition,
            term_image: draft.term_image,
            definition_image: draft.definition_image,
        };
        let resp = self
            .http
            .put(self.url(&format!("/cards/{card_id}")))
            .json(&body)
            .send()
            .await?;
        Self::parse(resp).await
    }

    pub async fn delete_card(&self, card_id: i64) -> Result<String, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/cards/{card_id}")))
            .send()
            .await?;
        Ok(Self::parse::<MessageResponse>(resp).await?.message)
    }

    pub async fn set_review(&self, card_id: i64, review: bool) -> Result<Card, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/cards/{card_id}/review")))
            .json(&ReviewRequest { review })
            .send()
            .await?;
        Self::parse(resp).await
    }

    // =========================================================================
    // Review pile
    // =========================================================================

    pub async fn review_pile(&self) -> Result<Vec<Card>, ClientError> {
        let resp = self.http.get(self.url("/review-pile")).send().await?;
        Self::parse(resp).await
    }

    pub async fn clear_review_pile(&self) -> Result<String, ClientError> {
        let resp = self.http.delete(self.url("/review-pile")).send().await?;
        Ok(Self::parse::<MessageResponse>(resp).await?.message)
    }
}
