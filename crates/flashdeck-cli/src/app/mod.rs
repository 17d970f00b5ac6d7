//! Application state and types.

mod state;

pub use state::{Action, CardContext, Effect, StudyState};

/// Destructive operations that wait for a y/n answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCard(i64),
    DeleteDeck(i64),
    ClearReviewPile,
}

/// Which field of the add-card form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Term,
    Definition,
}

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Study,
    /// Deck list with a type-to-filter search box.
    DeckPicker,
    NewDeck,
    RenameDeck,
    AddCard(CardField),
    Confirm(ConfirmAction),
}

/// TUI application state: the study store plus input modes.
#[derive(Debug)]
pub struct App {
    pub state: StudyState,
    pub mode: AppMode,
    /// Text buffer for the deck name prompt and the focused card field.
    pub input: String,
    /// Text of the unfocused card field; swapped with `input` on Tab.
    pub held_input: String,
    /// Highlighted row in the filtered deck list.
    pub picker_index: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(preselect: Option<i64>) -> Self {
        Self {
            state: StudyState::with_preselected_deck(preselect),
            mode: AppMode::Study,
            input: String::new(),
            held_input: String::new(),
            picker_index: 0,
            should_quit: false,
        }
    }

    /// Return to the study view, dropping any half-typed input.
    pub fn reset_mode(&mut self) {
        self.mode = AppMode::Study;
        self.input.clear();
        self.held_input.clear();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}
