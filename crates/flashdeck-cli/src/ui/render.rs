//! TUI rendering functions.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::panels;
use super::view::CardView;
use crate::app::{App, AppMode};

/// Draw the full UI.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let view = CardView::from_state(&app.state);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Card
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    draw_header(frame, &view, chunks[0]);
    draw_card(frame, &view, chunks[1]);
    draw_controls(frame, &view, chunks[2]);
    draw_help(frame, app, chunks[3]);

    match app.mode {
        AppMode::Study => {}
        AppMode::DeckPicker => panels::draw_deck_picker(frame, app),
        AppMode::NewDeck => panels::draw_name_prompt(frame, "New Deck", &app.input),
        AppMode::RenameDeck => panels::draw_name_prompt(frame, "Rename Deck", &app.input),
        AppMode::AddCard(field) => panels::draw_card_form(frame, app, field),
        AppMode::Confirm(action) => panels::draw_confirm(frame, action),
    }

    if let Some(notice) = &app.state.notice {
        panels::draw_notice(frame, notice);
    }
}

fn draw_header(frame: &mut Frame<'_>, view: &CardView, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            view.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(view.counter.as_str(), Style::default().fg(Color::Yellow)),
    ]));
    frame.render_widget(header, area);
}

fn draw_card(frame: &mut Frame<'_>, view: &CardView, area: Rect) {
    let (side, text, image) = if view.flipped {
        (" Definition ", view.back.as_str(), view.show_definition_image)
    } else {
        (" Term ", view.front.as_str(), view.show_term_image)
    };

    let mut lines = Vec::new();
    // Vertically centre the text in the card.
    let padding = area.height.saturating_sub(4) / 2;
    lines.extend((0..padding).map(|_| Line::from("")));
    lines.push(Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if image {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[image]",
            Style::default().fg(Color::Magenta),
        )));
    }

    let border = if view.flipped {
        Color::Green
    } else {
        Color::Blue
    };
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(side)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(card, area);
}

fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_controls(frame: &mut Frame<'_>, view: &CardView, area: Rect) {
    let checkbox = if view.review_checked { "[x]" } else { "[ ]" };
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("< Prev", enabled_style(view.prev_enabled)),
        Span::raw("   "),
        Span::styled(
            format!("{checkbox} Review"),
            enabled_style(!view.review_disabled),
        ),
        Span::raw("   "),
        Span::styled("Next >", enabled_style(view.next_enabled)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(controls, area);
}

fn draw_help(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.mode {
        AppMode::Study => {
            "space: flip | <-/->: move | r: review | d: decks | p: pile | a: add | n: new deck | x: delete | q: quit"
        }
        AppMode::DeckPicker => "type to filter | up/down: move | Enter: open | Esc: back",
        AppMode::NewDeck | AppMode::RenameDeck => "Enter: save | Esc: cancel",
        AppMode::AddCard(_) => "Tab: switch field | Enter: next/save | Esc: cancel",
        AppMode::Confirm(_) => "y: confirm | n/Esc: cancel",
    };
    let bar = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(bar, area);
}
