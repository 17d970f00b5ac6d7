//! Tests for TUI rendering.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::app::{Action, App, AppMode, CardContext, CardField, ConfirmAction};
    use crate::ui::draw;
    use crate::ui::view::{EMPTY_HINT, NO_DECK_SELECTED};
    use flashdeck_core::{Card, Deck};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Create a `TestBackend` + `Terminal` of the given size and draw the app once.
    fn draw_app(width: u16, height: u16, app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
    }

    /// All rendered cells joined into one string, row by row.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn spanish_app() -> App {
        let mut app = App::default();
        app.state.apply(Action::DecksLoaded(vec![
            Deck {
                id: 1,
                name: "Spanish".into(),
                card_count: 2,
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
            cards: vec![
                Card {
                    id: 1,
                    deck_id: 1,
                    term: "perro".into(),
                    definition: "dog".into(),
                    term_image: Some("data:image/png;base64,AAAA".into()),
                    definition_image: None,
                    review: true,
                },
                Card {
                    id: 2,
                    deck_id: 1,
                    term: "gato".into(),
                    definition: "cat".into(),
                    term_image: None,
                    definition_image: None,
                    review: false,
                },
            ],
        });
        app
    }

    #[test]
    fn render_empty_app() {
        let terminal = draw_app(80, 24, &App::default());
        let text = screen_text(&terminal);
        assert!(text.contains(NO_DECK_SELECTED));
        assert!(text.contains("0 / 0"));
    }

    #[test]
    fn render_front_of_card() {
        let terminal = draw_app(80, 24, &spanish_app());
        let text = screen_text(&terminal);
        assert!(text.contains("Spanish"));
        assert!(text.contains("perro"));
        assert!(text.contains("[image]"));
        assert!(text.contains("1 / 2"));
        assert!(text.contains("[x] Review"));
        assert!(!text.contains("dog"));
    }

    #[test]
    fn render_flipped_card_shows_definition() {
        let mut app = spanish_app();
        app.state.apply(Action::Flip);
        let text = screen_text(&draw_app(80, 24, &app));
        assert!(text.contains("dog"));
        assert!(text.contains("Definition"));
        assert!(!text.contains("[image]"));
    }

    #[test]
    fn empty_deck_shows_placeholder_on_front() {
        let mut app = App::default();
        app.state.apply(Action::SelectDeck(1));
        let text = screen_text(&draw_app(80, 24, &app));
        assert!(text.contains("No cards in this deck"));
        assert!(!text.contains(EMPTY_HINT));
    }

    #[test]
    fn render_deck_picker_with_filter() {
        let mut app = spanish_app();
        app.mode = AppMode::DeckPicker;
        app.state.apply(Action::SetDeckFilter("fre".into()));
        let text = screen_text(&draw_app(80, 24, &app));
        assert!(text.contains("Search: fre"));
        assert!(text.contains("French (0)"));
        assert!(!text.contains("Spanish (2)"));
    }

    #[test]
    fn render_card_form() {
        let mut app = spanish_app();
        app.mode = AppMode::AddCard(CardField::Definition);
        app.held_input = "caballo".into();
        app.input = "hor".into();
        let text = screen_text(&draw_app(80, 24, &app));
        assert!(text.contains("Add Card"));
        assert!(text.contains("caballo"));
        assert!(text.contains("hor"));
    }

    #[test]
    fn render_confirm_and_notice() {
        let mut app = spanish_app();
        app.mode = AppMode::Confirm(ConfirmAction::ClearReviewPile);
        let text = screen_text(&draw_app(80, 24, &app));
        assert!(text.contains("Clear every card from the review pile?"));

        app.mode = AppMode::Study;
        app.state.apply(Action::Failed("Deck name already exists".into()));
        let text = screen_text(&draw_app(80, 24, &app));
        assert!(text.contains("Deck name already exists"));
    }

    #[test]
    fn render_tiny_terminal_does_not_panic() {
        let mut app = spanish_app();
        app.mode = AppMode::DeckPicker;
        draw_app(10, 4, &app);
    }
}
