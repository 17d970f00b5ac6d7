//! Card subcommands: list, add, edit, delete, review.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};
use std::path::PathBuf;

use flashdeck_core::Card;

use crate::client::{ApiClient, CardDraft};
use crate::images::read_image;

/// Card subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum CardAction {
    /// List the cards in a deck.
    List {
        /// Deck ID.
        deck_id: i64,
    },
    /// Add a card to a deck.
    Add {
        /// Deck ID.
        deck_id: i64,
        term: String,
        definition: String,
        #[command(flatten)]
        images: ImageArgs,
    },
    /// Replace a card's text and images.
    Edit {
        /// Card ID.
        card_id: i64,
        term: String,
        definition: String,
        #[command(flatten)]
        images: ImageArgs,
    },
    /// Delete a card.
    Delete {
        /// Card ID.
        card_id: i64,
    },
    /// Put a card on the review pile (or take it off with --off).
    Review {
        /// Card ID.
        card_id: i64,
        /// Remove the card from the review pile instead.
        #[arg(long)]
        off: bool,
    },
}

/// Image files attached to a card.
#[derive(clap::Args, Debug, Default)]
pub struct ImageArgs {
    /// Image shown with the term.
    #[arg(long, value_name = "PATH")]
    pub term_image: Option<PathBuf>,
    /// Image shown with the definition.
    #[arg(long, value_name = "PATH")]
    pub definition_image: Option<PathBuf>,
}

impl ImageArgs {
    fn into_draft(self, term: String, definition: String) -> anyhow::Result<CardDraft> {
        Ok(CardDraft {
            term,
            definition,
            term_image: self.term_image.as_deref().map(read_image).transpose()?,
            definition_image: self.definition_image.as_deref().map(read_image).transpose()?,
        })
    }
}

/// Execute a card subcommand.
pub async fn run(action: CardAction, client: &ApiClient) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match action {
        CardAction::List { deck_id } => {
            let cards = client.list_cards(deck_id).await?;
            write_cards(&mut out, &cards, "No cards in this deck")?;
        }
        CardAction::Add {
            deck_id,
            term,
            definition,
            images,
        } => {
            let card = client
                .create_card(deck_id, images.into_draft(term, definition)?)
                .await?;
            writeln!(out, "Added card {} to deck {}", card.id, card.deck_id)?;
        }
        CardAction::Edit {
            card_id,
            term,
            definition,
            images,
        } => {
            let card = client
                .update_card(card_id, images.into_draft(term, definition)?)
                .await?;
            writeln!(out, "Updated card {}", card.id)?;
        }
        CardAction::Delete { card_id } => {
            let message = client.delete_card(card_id).await?;
            writeln!(out, "{message}")?;
        }
        CardAction::Review { card_id, off } => {
            let card = client.set_review(card_id, !off).await?;
            let state = if card.review { "on" } else { "off" };
            writeln!(out, "Card {} is {} the review pile", card.id, state)?;
        }
    }
    Ok(())
}

/// Shorten `text` to at most `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// One table row: id, review marker, term, definition and image markers.
pub fn format_card_row(card: &Card) -> String {
    let review = if card.review { "*" } else { "" };
    let mut images = Vec::new();
    if card.has_term_image() {
        images.push("term");
    }
    if card.has_definition_image() {
        images.push("definition");
    }
    let images = if images.is_empty() {
        String::new()
    } else {
        format!(" [img: {}]", images.join(", "))
    };
    format!(
        "{:<6} {:<3} {:<30} {}{}",
        card.id,
        review,
        truncate(&card.term, 30),
        truncate(&card.definition, 40),
        images
    )
}

/// Print a card table, or `empty` when there are no cards.
pub fn write_cards(out: &mut impl Write, cards: &[Card], empty: &str) -> io::Result<()> {
    if cards.is_empty() {
        return writeln!(out, "{empty}");
    }
    writeln!(out, "{:<6} {:<3} {:<30} {}", "ID", "R", "TERM", "DEFINITION")?;
    for card in cards {
        writeln!(out, "{}", format_card_row(card))?;
    }
    Ok(())
}
