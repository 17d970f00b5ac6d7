//! Two-thread TUI orchestration.
//!
//! Terminal I/O runs on a dedicated OS thread; HTTP requests run as tokio
//! tasks whose results come back over an mpsc channel as [`Action`]s.

mod effects;
mod input;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::app::{Action, App, Effect};
use crate::client::ApiClient;
use crate::ui;

pub use input::handle_key;

/// Terminal events forwarded from the UI reader thread.
pub enum TermEvent {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
}

/// Spawn the request for `effect`; its outcome is sent back on `tx`.
fn spawn_effect(client: &ApiClient, tx: &mpsc::Sender<Action>, effect: Effect) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Some(action) = effects::run(&client, effect).await {
            let _ = tx.send(action).await;
        }
    });
}

/// Run the interactive study view until the user quits.
pub async fn run(client: ApiClient, preselect: Option<i64>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let stop = Arc::new(AtomicBool::new(false));
    let (term_tx, mut term_rx) = mpsc::channel::<TermEvent>(64);
    let (action_tx, mut action_rx) = mpsc::channel::<Action>(64);

    let stop_reader = Arc::clone(&stop);
    let ui_thread = std::thread::spawn(move || {
        while !stop_reader.load(Ordering::Relaxed) {
            // Poll with a timeout so the stop flag is checked regularly.
            if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => {
                        // Windows emits Press + Release per keystroke.
                        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                            continue;
                        }
                        if term_tx.blocking_send(TermEvent::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(Event::Resize(w, h)) => {
                        if term_tx.blocking_send(TermEvent::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        }
    });

    let mut app = App::new(preselect);
    spawn_effect(&client, &action_tx, Effect::LoadDecks);
    let mut tick = tokio::time::interval(Duration::from_millis(50));

    let result: anyhow::Result<()> = loop {
        tokio::select! {
            _ = tick.tick() => {
                if let Err(e) = terminal.draw(|f| ui::draw(f, &app)) {
                    break Err(e.into());
                }
            }
            Some(term_event) = term_rx.recv() => {
                if let TermEvent::Key(key) = term_event {
                    if let Some(effect) = input::handle_key(&mut app, key) {
                        spawn_effect(&client, &action_tx, effect);
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                if let Some(effect) = app.state.apply(action) {
                    spawn_effect(&client, &action_tx, effect);
                }
            }
        }
        if app.should_quit {
            break Ok(());
        }
    };

    stop.store(true, Ordering::Relaxed);
    let _ = ui_thread.join();

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}
