//! Review pile subcommands: list, clear.

use std::io::{self, Write};

use crate::card_cmd::write_cards;
use crate::client::ApiClient;

/// Review pile subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ReviewAction {
    /// List every card flagged for review, across decks.
    List,
    /// Unflag every card in the review pile.
    Clear,
}

/// Execute a review pile subcommand.
pub async fn run(action: ReviewAction, client: &ApiClient) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match action {
        ReviewAction::List => {
            let cards = client.review_pile().await?;
            write_cards(&mut out, &cards, "No cards in review pile")?;
        }
        ReviewAction::Clear => {
            let message = client.clear_review_pile().await?;
            writeln!(out, "{message}")?;
        }
    }
    Ok(())
}
