//! Study state store.
//!
//! Every mutation goes through [`StudyState::apply`]. The returned [`Effect`]
//! names the request the controller must issue; its outcome comes back as
//! another [`Action`].

use std::collections::HashMap;

use flashdeck_core::{Card, Deck};

use crate::client::CardDraft;

/// Which card list is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardContext {
    Deck(i64),
    ReviewPile,
}

/// Inputs to the state store: user intents and request outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    DecksLoaded(Vec<Deck>),
    SelectDeck(i64),
    ShowReviewPile,
    /// A card list arrived for the load tagged `generation`.
    CardsLoaded {
        context: CardContext,
        generation: u64,
        cards: Vec<Card>,
    },
    CardAdded(Card),
    CardDeleted(i64),
    DeckDeleted(i64),
    DeckCreated(Deck),
    DeckRenamed(Deck),
    ToggleReview,
    /// Saving the review flag failed; restore `previous` unless the card
    /// was toggled again after `toggle`.
    ReviewFailed {
        card_id: i64,
        previous: bool,
        toggle: u64,
        message: String,
    },
    ReviewPileCleared,
    Next,
    Prev,
    Flip,
    Failed(String),
    DismissNotice,
    SetDeckFilter(String),
}

/// Requests the controller issues on behalf of the state store or the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDecks,
    LoadCards { deck_id: i64, generation: u64 },
    LoadReviewPile { generation: u64 },
    SaveReview {
        card_id: i64,
        review: bool,
        toggle: u64,
    },
    CreateDeck(String),
    RenameDeck { deck_id: i64, name: String },
    DeleteDeck(i64),
    CreateCard { deck_id: i64, draft: CardDraft },
    DeleteCard(i64),
    ClearReviewPile,
}

/// Decks, the loaded card list and the study cursor.
///
/// `current` is `None` exactly when `cards` is empty, otherwise `< cards.len()`.
/// `load_generation` changes whenever the card list is reset, so a response
/// to an earlier load is dropped even if it names the same context.
#[derive(Debug, Clone, Default)]
pub struct StudyState {
    pub decks: Vec<Deck>,
    pub cards: Vec<Card>,
    pub current: Option<usize>,
    pub flipped: bool,
    pub active_deck: Option<i64>,
    pub viewing_review_pile: bool,
    pub deck_filter: String,
    pub notice: Option<String>,
    preselect: Option<i64>,
    load_generation: u64,
    toggle_count: u64,
    last_toggle: HashMap<i64, u64>,
}

impl StudyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `deck_id` selected once the deck list arrives.
    pub fn with_preselected_deck(deck_id: Option<i64>) -> Self {
        Self {
            preselect: deck_id,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::DecksLoaded(decks) => self.decks_loaded(decks),
            Action::SelectDeck(deck_id) => Some(self.select_deck(deck_id)),
            Action::ShowReviewPile => {
                self.viewing_review_pile = true;
                self.active_deck = None;
                self.reset_cards();
                Some(Effect::LoadReviewPile {
                    generation: self.load_generation,
                })
            }
            Action::CardsLoaded {
                context,
                generation,
                cards,
            } => {
                if self.context() == Some(context) && self.load_generation == generation {
                    self.current = if cards.is_empty() { None } else { Some(0) };
                    self.cards = cards;
                    self.flipped = false;
                }
                None
            }
            Action::CardAdded(card) => {
                self.adjust_card_count(card.deck_id, 1);
                if !self.viewing_review_pile && self.active_deck == Some(card.deck_id) {
                    self.cards.push(card);
                    if self.current.is_none() {
                        self.current = Some(0);
                    }
                }
                None
            }
            Action::CardDeleted(card_id) => {
                if let Some(pos) = self.cards.iter().position(|c| c.id == card_id) {
                    let card = self.cards.remove(pos);
                    self.adjust_card_count(card.deck_id, -1);
                    self.flipped = false;
                    self.clamp_current();
                }
                None
            }
            Action::DeckDeleted(deck_id) => {
                self.decks.retain(|d| d.id != deck_id);
                if self.active_deck == Some(deck_id) {
                    self.active_deck = None;
                    self.reset_cards();
                } else if self.viewing_review_pile {
                    self.cards.retain(|c| c.deck_id != deck_id);
                    self.clamp_current();
                }
                None
            }
            Action::DeckCreated(deck) => {
                let deck_id = deck.id;
                self.decks.push(deck);
                self.sort_decks();
                self.active_deck = Some(deck_id);
                self.viewing_review_pile = false;
                self.reset_cards();
                None
            }
            Action::DeckRenamed(deck) => {
                if let Some(existing) = self.decks.iter_mut().find(|d| d.id == deck.id) {
                    *existing = deck;
                    self.sort_decks();
                }
                None
            }
            Action::ToggleReview => {
                if self.viewing_review_pile {
                    return None;
                }
                let card = self.current.and_then(|i| self.cards.get_mut(i))?;
                card.review = !card.review;
                self.toggle_count += 1;
                self.last_toggle.insert(card.id, self.toggle_count);
                Some(Effect::SaveReview {
                    card_id: card.id,
                    review: card.review,
                    toggle: self.toggle_count,
                })
            }
            Action::ReviewFailed {
                card_id,
                previous,
                toggle,
                message,
            } => {
                // A later toggle of the same card owns the displayed value.
                if self.last_toggle.get(&card_id) == Some(&toggle)
                    && let Some(card) = self.cards.iter_mut().find(|c| c.id == card_id)
                {
                    card.review = previous;
                }
                self.notice = Some(message);
                None
            }
            Action::ReviewPileCleared => {
                for card in &mut self.cards {
                    card.review = false;
                }
                if self.viewing_review_pile {
                    self.reset_cards();
                }
                None
            }
            Action::Next => {
                if let Some(i) = self.current {
                    if i + 1 < self.cards.len() {
                        self.current = Some(i + 1);
                        self.flipped = false;
                    }
                }
                None
            }
            Action::Prev => {
                if let Some(i) = self.current {
                    if i > 0 {
                        self.current = Some(i - 1);
                        self.flipped = false;
                    }
                }
                None
            }
            Action::Flip => {
                if self.current.is_some() {
                    self.flipped = !self.flipped;
                }
                None
            }
            Action::Failed(message) => {
                self.notice = Some(message);
                None
            }
            Action::DismissNotice => {
                self.notice = None;
                None
            }
            Action::SetDeckFilter(text) => {
                self.deck_filter = text;
                None
            }
        }
    }

    /// The card list the view is showing, if any.
    pub const fn context(&self) -> Option<CardContext> {
        if self.viewing_review_pile {
            return Some(CardContext::ReviewPile);
        }
        match self.active_deck {
            Some(id) => Some(CardContext::Deck(id)),
            None => None,
        }
    }

    /// Tag of the most recent card-list load.
    pub const fn load_generation(&self) -> u64 {
        self.load_generation
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current.and_then(|i| self.cards.get(i))
    }

    pub fn active_deck_name(&self) -> Option<&str> {
        let id = self.active_deck?;
        self.decks
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Decks whose name contains the filter text, ignoring case.
    pub fn filtered_decks(&self) -> Vec<&Deck> {
        let needle = self.deck_filter.to_lowercase();
        self.decks
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn decks_loaded(&mut self, decks: Vec<Deck>) -> Option<Effect> {
        self.decks = decks;
        if self.active_deck.is_some() || self.viewing_review_pile {
            return None;
        }
        let wanted = self.preselect.take();
        let found = wanted.filter(|id| self.decks.iter().any(|d| d.id == *id));
        if let (Some(id), None) = (wanted, found) {
            self.notice = Some(format!("Deck {id} not found"));
        }
        let deck_id = found.or_else(|| self.decks.first().map(|d| d.id))?;
        Some(self.select_deck(deck_id))
    }

    fn select_deck(&mut self, deck_id: i64) -> Effect {
        self.active_deck = Some(deck_id);
        self.viewing_review_pile = false;
        self.reset_cards();
        Effect::LoadCards {
            deck_id,
            generation: self.load_generation,
        }
    }

    fn reset_cards(&mut self) {
        self.load_generation += 1;
        self.cards.clear();
        self.current = None;
        self.flipped = false;
    }

    fn clamp_current(&mut self) {
        self.current = match self.cards.len() {
            0 => None,
            len => Some(self.current.unwrap_or(0).min(len - 1)),
        };
    }

    fn adjust_card_count(&mut self, deck_id: i64, delta: i64) {
        if let Some(deck) = self.decks.iter_mut().find(|d| d.id == deck_id) {
            deck.card_count = (deck.card_count + delta).max(0);
        }
    }

    fn sort_decks(&mut self) {
        self.decks
            .sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    }
}
