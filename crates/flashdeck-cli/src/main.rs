//! Flashdeck CLI
//!
//! Study flashcards in the terminal and manage decks, cards and the review
//! pile from the command line.

use clap::{Parser, Subcommand};
use tracing::info;

use flashdeck_cli::card_cmd::{self, CardAction};
use flashdeck_cli::client::ApiClient;
use flashdeck_cli::deck_cmd::{self, DeckAction};
use flashdeck_cli::review_cmd::{self, ReviewAction};
use flashdeck_cli::tui;
use flashdeck_core::config::load_config;
use flashdeck_core::tracing_init::init_tracing_with_writer;

#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(version, about = "Flashdeck - study flashcards in the terminal", long_about = None)]
struct Cli {
    /// Server URL.
    #[arg(long, global = true, env = "FLASHDECK_SERVER_URL")]
    server: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Study cards in the terminal UI (default).
    Study {
        /// Deck to open first.
        #[arg(long)]
        deck: Option<i64>,
    },
    /// Deck management.
    Deck {
        #[command(subcommand)]
        action: DeckAction,
    },
    /// Card management.
    Card {
        #[command(subcommand)]
        action: CardAction,
    },
    /// Review pile.
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never land inside the terminal UI.
    init_tracing_with_writer("flashdeck_cli=warn", false, std::io::stderr);

    let mut config = load_config()?.client;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        server = %config.server_url,
        "Starting flashdeck CLI"
    );
    let client = ApiClient::new(&config)?;

    match cli.command.unwrap_or(Commands::Study { deck: None }) {
        Commands::Study { deck } => tui::run(client, deck).await?,
        Commands::Deck { action } => deck_cmd::run(action, &client).await?,
        Commands::Card { action } => card_cmd::run(action, &client).await?,
        Commands::Review { action } => review_cmd::run(action, &client).await?,
    }

    Ok(())
}
