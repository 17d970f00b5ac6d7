//! Deck subcommands: list, create, rename, delete.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};

use flashdeck_core::validate::{validate_str, MAX_DEFINITION_LEN, MAX_TEXT_LEN};
use tracing::info;

use crate::client::{ApiClient, CardDraft};

/// Deck subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum DeckAction {
    /// List decks with their card counts.
    List,
    /// Create a deck, optionally seeding it with cards.
    Create {
        /// Deck name.
        name: String,
        /// Card to add after the deck is created (repeatable).
        #[arg(long = "card", value_name = "TERM::DEFINITION")]
        cards: Vec<String>,
    },
    /// Rename a deck.
    Rename {
        /// Deck ID.
        deck_id: i64,
        /// New name.
        name: String,
    },
    /// Delete a deck and all of its cards.
    Delete {
        /// Deck ID.
        deck_id: i64,
    },
}

/// Execute a deck subcommand.
pub async fn run(action: DeckAction, client: &ApiClient) -> anyhow::Result<()> {
    match action {
        DeckAction::List => list(client).await,
        DeckAction::Create { name, cards } => create(client, &name, &cards).await,
        DeckAction::Rename { deck_id, name } => {
            let deck = client.rename_deck(deck_id, &name).await?;
            writeln!(io::stdout(), "Renamed deck {} to {}", deck.id, deck.name)?;
            Ok(())
        }
        DeckAction::Delete { deck_id } => {
            let message = client.delete_deck(deck_id).await?;
            writeln!(io::stdout(), "{message}")?;
            Ok(())
        }
    }
}

async fn list(client: &ApiClient) -> anyhow::Result<()> {
    let decks = client.list_decks().await?;
    let mut out = io::stdout();
    if decks.is_empty() {
        writeln!(out, "No decks")?;
        return Ok(());
    }
    writeln!(out, "{:<6} {:<30} {:>5}", "ID", "NAME", "CARDS")?;
    for d in &decks {
        writeln!(out, "{:<6} {:<30} {:>5}", d.id, d.name, d.card_count)?;
    }
    Ok(())
}

/// Parse a staged `TERM::DEFINITION` card.
fn parse_staged_card(raw: &str) -> anyhow::Result<CardDraft> {
    let (term, definition) = raw
        .split_once("::")
        .ok_or_else(|| anyhow::anyhow!("Expected TERM::DEFINITION, got {raw:?}"))?;
    let term = validate_str(term, "Term", MAX_TEXT_LEN)?;
    let definition = validate_str(definition, "Definition", MAX_DEFINITION_LEN)?;
    Ok(CardDraft::text(term, definition))
}

/// Create the deck, then each staged card in order.
async fn create(client: &ApiClient, name: &str, cards: &[String]) -> anyhow::Result<()> {
    // Reject bad cards before anything is written.
    let drafts = cards
        .iter()
        .map(|raw| parse_staged_card(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let deck = client.create_deck(name).await?;
    info!(deck_id = deck.id, cards = drafts.len(), "Deck created");

    let mut out = io::stdout();
    writeln!(out, "Created deck {} ({})", deck.name, deck.id)?;
    for draft in drafts {
        let card = client.create_card(deck.id, draft).await?;
        writeln!(out, "  + {} - {}", card.term, card.definition)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn staged_card_splits_on_double_colon() {
        let draft = parse_staged_card(" perro :: dog ").unwrap();
        assert_eq!(draft, CardDraft::text("perro", "dog"));
    }

    #[test]
    fn definition_may_contain_colons() {
        let draft = parse_staged_card("ratio::1:2::3").unwrap();
        assert_eq!(draft.term, "ratio");
        assert_eq!(draft.definition, "1:2::3");
    }

    #[test]
    fn staged_card_needs_both_sides() {
        assert!(parse_staged_card("perro").is_err());
        assert!(parse_staged_card("::dog").is_err());
        let err = parse_staged_card("perro::   ").unwrap_err();
        assert_eq!(err.to_string(), "Definition cannot be just whitespace");
    }
}
