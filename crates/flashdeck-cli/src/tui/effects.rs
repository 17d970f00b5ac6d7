//! Runs [`Effect`]s against the API and maps each outcome to an [`Action`].

use tracing::{debug, warn};

use crate::app::{Action, CardContext, Effect};
use crate::client::{ApiClient, ClientError};

/// Issue the request for `effect`. `None` means nothing to feed back.
pub async fn run(client: &ApiClient, effect: Effect) -> Option<Action> {
    debug!(?effect, "Running effect");
    let action = match effect {
        Effect::LoadDecks => client.list_decks().await.map(Action::DecksLoaded),
        Effect::LoadCards {
            deck_id,
            generation,
        } => client.list_cards(deck_id).await.map(|cards| Action::CardsLoaded {
            context: CardContext::Deck(deck_id),
            generation,
            cards,
        }),
        Effect::LoadReviewPile { generation } => {
            client
                .review_pile()
                .await
                .map(|cards| Action::CardsLoaded {
                    context: CardContext::ReviewPile,
                    generation,
                    cards,
                })
        }
        Effect::SaveReview {
            card_id,
            review,
            toggle,
        } => {
            return match client.set_review(card_id, review).await {
                Ok(_) => None,
                Err(e) => {
                    warn!(card_id, error = %e, "Failed to save review flag");
                    Some(Action::ReviewFailed {
                        card_id,
                        previous: !review,
                        toggle,
                        message: e.to_string(),
                    })
                }
            };
        }
        Effect::CreateDeck(name) => client.create_deck(&name).await.map(Action::DeckCreated),
        Effect::RenameDeck { deck_id, name } => client
            .rename_deck(deck_id, &name)
            .await
            .map(Action::DeckRenamed),
        Effect::DeleteDeck(deck_id) => client
            .delete_deck(deck_id)
            .await
            .map(|_| Action::DeckDeleted(deck_id)),
        Effect::CreateCard { deck_id, draft } => client
            .create_card(deck_id, draft)
            .await
            .map(Action::CardAdded),
        Effect::DeleteCard(card_id) => client
            .delete_card(card_id)
            .await
            .map(|_| Action::CardDeleted(card_id)),
        Effect::ClearReviewPile => client
            .clear_review_pile()
            .await
            .map(|_| Action::ReviewPileCleared),
    };
    Some(action.unwrap_or_else(failed))
}

fn failed(e: ClientError) -> Action {
    warn!(error = %e, "Request failed");
    Action::Failed(e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use flashdeck_core::config::ClientConfig;

    use super::*;

    /// A client pointed at a port nothing listens on.
    fn offline_client() -> ApiClient {
        ApiClient::new(&ClientConfig {
            server_url: "http://127.0.0.1:1".into(),
            request_timeout_secs: 2,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn failed_review_save_restores_previous_flag() {
        let action = run(
            &offline_client(),
            Effect::SaveReview {
                card_id: 3,
                review: true,
                toggle: 9,
            },
        )
        .await;

        match action {
            Some(Action::ReviewFailed {
                card_id,
                previous,
                toggle,
                message,
            }) => {
                assert_eq!(card_id, 3);
                assert!(!previous);
                assert_eq!(toggle, 9);
                assert!(message.starts_with("HTTP request failed"), "{message}");
            }
            other => panic!("expected ReviewFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_unflag_restores_flag() {
        let action = run(
            &offline_client(),
            Effect::SaveReview {
                card_id: 4,
                review: false,
                toggle: 1,
            },
        )
        .await;
        assert!(matches!(
            action,
            Some(Action::ReviewFailed { previous: true, .. })
        ));
    }

    #[tokio::test]
    async fn failed_loads_become_notices() {
        let client = offline_client();
        for effect in [
            Effect::LoadDecks,
            Effect::LoadCards {
                deck_id: 1,
                generation: 1,
            },
            Effect::LoadReviewPile { generation: 2 },
            Effect::DeleteCard(5),
        ] {
            let action = run(&client, effect).await;
            assert!(matches!(action, Some(Action::Failed(_))), "{action:?}");
        }
    }
}
