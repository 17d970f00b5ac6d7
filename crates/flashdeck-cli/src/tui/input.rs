//! Input handling for TUI key events.
//!
//! Keys update the [`App`] synchronously and may return an [`Effect`] for the
//! event loop to run.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use flashdeck_core::validate::{validate_str, MAX_DEFINITION_LEN, MAX_TEXT_LEN};

use crate::app::{Action, App, AppMode, CardField, ConfirmAction, Effect};
use crate::client::CardDraft;

/// Process a key press, updating app state and optionally requesting I/O.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return None;
    }
    // Any key dismisses a notice.
    if app.state.notice.is_some() {
        return app.state.apply(Action::DismissNotice);
    }
    match app.mode {
        AppMode::Study => handle_study_key(app, key.code),
        AppMode::DeckPicker => handle_picker_key(app, key.code),
        AppMode::NewDeck | AppMode::RenameDeck => handle_name_key(app, key.code),
        AppMode::AddCard(field) => handle_card_form_key(app, field, key.code),
        AppMode::Confirm(action) => handle_confirm_key(app, action, key.code),
    }
}

fn handle_study_key(app: &mut App, code: KeyCode) -> Option<Effect> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Left | KeyCode::Char('h') => app.state.apply(Action::Prev),
        KeyCode::Right | KeyCode::Char('l') => app.state.apply(Action::Next),
        KeyCode::Char(' ') | KeyCode::Enter => app.state.apply(Action::Flip),
        KeyCode::Char('r') => app.state.apply(Action::ToggleReview),
        KeyCode::Char('p') => app.state.apply(Action::ShowReviewPile),
        KeyCode::Char('d') => {
            app.mode = AppMode::DeckPicker;
            app.picker_index = 0;
            app.state.apply(Action::SetDeckFilter(String::new()));
            Some(Effect::LoadDecks)
        }
        KeyCode::Char('n') => {
            app.reset_mode();
            app.mode = AppMode::NewDeck;
            None
        }
        KeyCode::Char('e') => {
            let Some(name) = app.state.active_deck_name().map(String::from) else {
                return app.state.apply(Action::Failed("No deck selected".into()));
            };
            app.reset_mode();
            app.input = name;
            app.mode = AppMode::RenameDeck;
            None
        }
        KeyCode::Char('a') => {
            if app.state.active_deck.is_none() {
                return app.state.apply(Action::Failed("No deck selected".into()));
            }
            app.reset_mode();
            app.mode = AppMode::AddCard(CardField::Term);
            None
        }
        KeyCode::Char('x') => {
            if let Some(card) = app.state.current_card() {
                app.mode = AppMode::Confirm(ConfirmAction::DeleteCard(card.id));
            }
            None
        }
        KeyCode::Char('X') => {
            if let Some(deck_id) = app.state.active_deck {
                app.mode = AppMode::Confirm(ConfirmAction::DeleteDeck(deck_id));
            }
            None
        }
        KeyCode::Char('c') => {
            app.mode = AppMode::Confirm(ConfirmAction::ClearReviewPile);
            None
        }
        _ => None,
    }
}

fn handle_picker_key(app: &mut App, code: KeyCode) -> Option<Effect> {
    let visible = app.state.filtered_decks().len();
    match code {
        KeyCode::Esc => {
            app.reset_mode();
            None
        }
        KeyCode::Up => {
            app.picker_index = app.picker_index.saturating_sub(1);
            None
        }
        KeyCode::Down => {
            app.picker_index = (app.picker_index + 1).min(visible.saturating_sub(1));
            None
        }
        KeyCode::Enter => {
            let deck_id = app
                .state
                .filtered_decks()
                .get(app.picker_index)
                .map(|d| d.id)?;
            app.reset_mode();
            app.state.apply(Action::SelectDeck(deck_id))
        }
        KeyCode::Backspace => {
            let mut filter = app.state.deck_filter.clone();
            filter.pop();
            app.picker_index = 0;
            app.state.apply(Action::SetDeckFilter(filter))
        }
        KeyCode::Char(c) => {
            let filter = format!("{}{c}", app.state.deck_filter);
            app.picker_index = 0;
            app.state.apply(Action::SetDeckFilter(filter))
        }
        _ => None,
    }
}

fn handle_name_key(app: &mut App, code: KeyCode) -> Option<Effect> {
    match code {
        KeyCode::Esc => {
            app.reset_mode();
            None
        }
        KeyCode::Enter => {
            let name = match validate_str(&app.input, "Deck name", MAX_TEXT_LEN) {
                Ok(name) => name,
                Err(e) => return app.state.apply(Action::Failed(e.to_string())),
            };
            let effect = match (app.mode, app.state.active_deck) {
                (AppMode::RenameDeck, Some(deck_id)) => Effect::RenameDeck { deck_id, name },
                // The deck went away while the prompt was open.
                (AppMode::RenameDeck, None) => {
                    app.reset_mode();
                    return app.state.apply(Action::Failed("No deck selected".into()));
                }
                _ => Effect::CreateDeck(name),
            };
            app.reset_mode();
            Some(effect)
        }
        KeyCode::Backspace => {
            app.input.pop();
            None
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            None
        }
        _ => None,
    }
}

fn handle_card_form_key(app: &mut App, field: CardField, code: KeyCode) -> Option<Effect> {
    match (code, field) {
        (KeyCode::Esc, _) => {
            app.reset_mode();
            None
        }
        (KeyCode::Tab | KeyCode::BackTab, _) | (KeyCode::Enter, CardField::Term) => {
            std::mem::swap(&mut app.input, &mut app.held_input);
            app.mode = AppMode::AddCard(match field {
                CardField::Term => CardField::Definition,
                CardField::Definition => CardField::Term,
            });
            None
        }
        (KeyCode::Enter, CardField::Definition) => {
            let deck_id = app.state.active_deck?;
            let checked = validate_str(&app.held_input, "Term", MAX_TEXT_LEN).and_then(|term| {
                validate_str(&app.input, "Definition", MAX_DEFINITION_LEN)
                    .map(|definition| (term, definition))
            });
            let (term, definition) = match checked {
                Ok(pair) => pair,
                Err(e) => return app.state.apply(Action::Failed(e.to_string())),
            };
            app.reset_mode();
            Some(Effect::CreateCard {
                deck_id,
                draft: CardDraft::text(term, definition),
            })
        }
        (KeyCode::Backspace, _) => {
            app.input.pop();
            None
        }
        (KeyCode::Char(c), _) => {
            app.input.push(c);
            None
        }
        _ => None,
    }
}

fn handle_confirm_key(app: &mut App, action: ConfirmAction, code: KeyCode) -> Option<Effect> {
    match code {
        KeyCode::Char('y' | 'Y') => {
            app.reset_mode();
            Some(match action {
                ConfirmAction::DeleteCard(card_id) => Effect::DeleteCard(card_id),
                ConfirmAction::DeleteDeck(deck_id) => Effect::DeleteDeck(deck_id),
                ConfirmAction::ClearReviewPile => Effect::ClearReviewPile,
            })
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.reset_mode();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CardContext;
    use flashdeck_core::{Card, Deck};

    fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with_deck() -> App {
        let mut app = App::default();
        app.state.apply(Action::DecksLoaded(vec![
            Deck {
                id: 1,
                name: "Spanish".into(),
                card_count: 1,
            },
            Deck {
                id: 2,
                name: "French".into(),
                card_count: 0,
            },
        ]));
        let generation = app.state.load_generation();
        app.state.apply(Action::CardsLoaded {
            context: CardContext::Deck(1),
            generation,
            cards: vec![Card {
                id: 7,
                deck_id: 1,
                term: "perro".into(),
                definition: "dog".into(),
                term_image: None,
                definition_image: None,
                review: false,
            }],
        });
        app
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_with_deck();
        app.mode = AppMode::NewDeck;
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn study_keys_drive_state() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.state.flipped);
        assert_eq!(
            press(&mut app, KeyCode::Char('r')),
            Some(Effect::SaveReview {
                card_id: 7,
                review: true,
                toggle: 1
            })
        );
        assert!(matches!(
            press(&mut app, KeyCode::Char('p')),
            Some(Effect::LoadReviewPile { .. })
        ));
    }

    #[test]
    fn notice_swallows_next_key() {
        let mut app = app_with_deck();
        app.state.apply(Action::Failed("boom".into()));
        assert_eq!(press(&mut app, KeyCode::Char('q')), None);
        assert!(app.state.notice.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn picker_filters_and_selects() {
        let mut app = app_with_deck();
        assert_eq!(press(&mut app, KeyCode::Char('d')), Some(Effect::LoadDecks));
        type_text(&mut app, "FR");
        assert_eq!(app.state.deck_filter, "FR");
        assert!(matches!(
            press(&mut app, KeyCode::Enter),
            Some(Effect::LoadCards { deck_id: 2, .. })
        ));
        assert_eq!(app.mode, AppMode::Study);
        assert_eq!(app.state.active_deck, Some(2));
    }

    #[test]
    fn picker_enter_with_no_match_does_nothing() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "zzz");
        assert_eq!(press(&mut app, KeyCode::Enter), None);
        assert_eq!(app.mode, AppMode::DeckPicker);
    }

    #[test]
    fn new_deck_prompt_creates_trimmed_name() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "  German ");
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            Some(Effect::CreateDeck("German".into()))
        );
        assert_eq!(app.mode, AppMode::Study);
    }

    #[test]
    fn blank_deck_name_shows_notice() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "   ");
        assert_eq!(press(&mut app, KeyCode::Enter), None);
        assert_eq!(
            app.state.notice.as_deref(),
            Some("Deck name cannot be just whitespace")
        );
        assert_eq!(app.mode, AppMode::NewDeck);
    }

    #[test]
    fn rename_prefills_current_name() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input, "Spanish");
        type_text(&mut app, " verbs");
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            Some(Effect::RenameDeck {
                deck_id: 1,
                name: "Spanish verbs".into()
            })
        );
    }

    #[test]
    fn rename_after_deck_deleted_does_not_create() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('e'));
        app.state.apply(Action::DeckDeleted(1));
        assert_eq!(press(&mut app, KeyCode::Enter), None);
        assert_eq!(app.state.notice.as_deref(), Some("No deck selected"));
        assert_eq!(app.mode, AppMode::Study);
    }

    #[test]
    fn add_card_form_collects_both_fields() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "gato");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::AddCard(CardField::Definition));
        type_text(&mut app, "cat");
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            Some(Effect::CreateCard {
                deck_id: 1,
                draft: CardDraft::text("gato", "cat"),
            })
        );
        assert!(app.input.is_empty());
        assert!(app.held_input.is_empty());
    }

    #[test]
    fn tab_keeps_both_fields() {
        let mut app = app_with_deck();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "gato");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "cat");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, AppMode::AddCard(CardField::Term));
        assert_eq!(app.input, "gato");
        assert_eq!(app.held_input, "cat");
    }

    #[test]
    fn add_card_without_deck_is_refused() {
        let mut app = App::default();
        assert_eq!(press(&mut app, KeyCode::Char('a')), None);
        assert_eq!(app.mode, AppMode::Study);
        assert_eq!(app.state.notice.as_deref(), Some("No deck selected"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app_with_deck();
        assert_eq!(press(&mut app, KeyCode::Char('x')), None);
        assert_eq!(app.mode, AppMode::Confirm(ConfirmAction::DeleteCard(7)));
        assert_eq!(press(&mut app, KeyCode::Char('y')), Some(Effect::DeleteCard(7)));

        press(&mut app, KeyCode::Char('X'));
        assert_eq!(press(&mut app, KeyCode::Esc), None);
        assert_eq!(app.mode, AppMode::Study);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(press(&mut app, KeyCode::Char('Y')), Some(Effect::ClearReviewPile));
    }
}
