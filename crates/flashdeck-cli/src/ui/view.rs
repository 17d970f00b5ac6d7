//! Pure projection of [`StudyState`] onto what the study screen shows.

use crate::app::StudyState;

pub const NO_CARDS_IN_DECK: &str = "No cards in this deck";
pub const NO_CARDS_IN_REVIEW_PILE: &str = "No cards in review pile";
pub const NO_DECK_SELECTED: &str = "No deck selected";
pub const EMPTY_HINT: &str = "Add some cards or select a deck!";

/// Everything the renderer needs for the card, counter and controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub front: String,
    pub back: String,
    pub show_term_image: bool,
    pub show_definition_image: bool,
    pub flipped: bool,
    /// `"position / total"`, `"0 / 0"` when empty.
    pub counter: String,
    pub review_checked: bool,
    pub review_disabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl CardView {
    pub fn from_state(state: &StudyState) -> Self {
        let title = if state.viewing_review_pile {
            "Review Pile".to_string()
        } else {
            state.active_deck_name().unwrap_or("Flashdeck").to_string()
        };
        let total = state.cards.len();

        match (state.current, state.current_card()) {
            (Some(index), Some(card)) => Self {
                title,
                front: card.term.clone(),
                back: card.definition.clone(),
                show_term_image: card.has_term_image(),
                show_definition_image: card.has_definition_image(),
                flipped: state.flipped,
                counter: format!("{} / {}", index + 1, total),
                review_checked: card.review,
                review_disabled: state.viewing_review_pile,
                prev_enabled: index > 0,
                next_enabled: index + 1 < total,
            },
            _ => {
                let placeholder = if state.active_deck.is_some() {
                    NO_CARDS_IN_DECK
                } else if state.viewing_review_pile {
                    NO_CARDS_IN_REVIEW_PILE
                } else {
                    NO_DECK_SELECTED
                };
                Self {
                    title,
                    front: placeholder.to_string(),
                    back: EMPTY_HINT.to_string(),
                    show_term_image: false,
                    show_definition_image: false,
                    flipped: false,
                    counter: format!("0 / {total}"),
                    review_checked: false,
                    review_disabled: true,
                    prev_enabled: false,
                    next_enabled: false,
                }
            }
        }
    }
}
