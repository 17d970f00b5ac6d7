//! Popup rendering for the deck picker, text prompts, confirmations and notices.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, CardField, ConfirmAction};

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Render a cleared, bordered popup with the given title and content.
fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    border_color: Color,
    lines: Vec<Line<'_>>,
) {
    frame.render_widget(Clear, area);
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

pub fn draw_deck_picker(frame: &mut Frame<'_>, app: &App) {
    let decks = app.state.filtered_decks();
    #[allow(clippy::cast_possible_truncation)]
    let rows = decks.len().min(12) as u16;
    let area = centered_rect(50, rows + 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Decks ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Yellow)),
        Span::raw(app.state.deck_filter.as_str()),
    ]));
    frame.render_widget(search, chunks[0]);

    if decks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No decks found",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem<'_>> = decks
        .iter()
        .map(|d| {
            let marker = if app.state.active_deck == Some(d.id) { "* " } else { "  " };
            ListItem::new(format!("{marker}{} ({})", d.name, d.card_count))
        })
        .collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let mut list_state = ListState::default().with_selected(Some(app.picker_index));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

pub fn draw_name_prompt(frame: &mut Frame<'_>, title: &str, input: &str) {
    let area = centered_rect(50, 3, frame.area());
    let lines = vec![Line::from(vec![
        Span::raw(input),
        Span::styled("_", Style::default().fg(Color::White)),
    ])];
    render_popup(frame, area, &format!(" {title} "), Color::Cyan, lines);
}

pub fn draw_card_form(frame: &mut Frame<'_>, app: &App, field: CardField) {
    let area = centered_rect(60, 6, frame.area());
    let label = |name: &'static str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(name, style)
    };

    let (term, definition) = match field {
        CardField::Term => (app.input.as_str(), app.held_input.as_str()),
        CardField::Definition => (app.held_input.as_str(), app.input.as_str()),
    };
    let lines = vec![
        Line::from(vec![
            label("Term:       ", field == CardField::Term),
            Span::raw(term),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Definition: ", field == CardField::Definition),
            Span::raw(definition),
        ]),
    ];
    render_popup(frame, area, " Add Card ", Color::Cyan, lines);
}

pub fn draw_confirm(frame: &mut Frame<'_>, action: ConfirmAction) {
    let question = match action {
        ConfirmAction::DeleteCard(_) => "Delete this card?",
        ConfirmAction::DeleteDeck(_) => "Delete this deck and all of its cards?",
        ConfirmAction::ClearReviewPile => "Clear every card from the review pile?",
    };
    let area = centered_rect(50, 5, frame.area());
    let lines = vec![
        Line::from(question),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Y]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Yes  "),
            Span::styled(
                "[N]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" No"),
        ]),
    ];
    render_popup(frame, area, " Confirm ", Color::Yellow, lines);
}

pub fn draw_notice(frame: &mut Frame<'_>, notice: &str) {
    let area = centered_rect(50, 5, frame.area());
    let lines = vec![
        Line::from(notice),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_popup(frame, area, " Notice ", Color::Red, lines);
}
