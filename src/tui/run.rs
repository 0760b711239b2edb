//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! The loop is strictly sequential: draw, block on one event, update,
//! repeat. No threads, no timeouts.

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;

use crate::types::MenuConfig;

use super::state::{Key, MenuState, Session, Transition};
use super::update::update;
use super::view::render;

/// Fatal failure of the interactive menu.
#[derive(Debug, Error)]
pub enum RunError {
    /// The terminal could not be set up, read from, drawn to, or restored.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a menu [`Key`].
///
/// Returns None for keys with no text form (media keys, bare modifiers).
pub fn map_key(key: KeyEvent) -> Option<Key> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        return Some(Key::Interrupt);
    }

    let mapped = match key.code {
        KeyCode::Char(c) if ctrl => named(format!("ctrl+{}", c.to_ascii_lowercase())),
        KeyCode::Char(c) if alt => named(format!("alt+{}", c)),
        KeyCode::Char(c) => Key::Char(c),

        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,

        KeyCode::Left => named("left"),
        KeyCode::Right => named("right"),
        KeyCode::Tab => named("tab"),
        KeyCode::BackTab => named("shift+tab"),
        KeyCode::Backspace => named("backspace"),
        KeyCode::Delete => named("delete"),
        KeyCode::Insert => named("insert"),
        KeyCode::Home => named("home"),
        KeyCode::End => named("end"),
        KeyCode::PageUp => named("pgup"),
        KeyCode::PageDown => named("pgdown"),
        KeyCode::Esc => named("esc"),
        KeyCode::F(n) => named(format!("f{}", n)),

        _ => return None,
    };
    Some(mapped)
}

fn named(name: impl Into<String>) -> Key {
    Key::Named(name.into())
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

type MenuTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<MenuTerminal> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive menu until the user quits.
///
/// The terminal is restored on every exit path, including errors.
pub fn run(config: MenuConfig) -> Result<(), RunError> {
    install_panic_hook();

    let mut terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal();
            tracing::error!(error = %e, "terminal setup failed");
            return Err(e.into());
        }
    };
    tracing::info!(max_input_chars = config.max_input_chars, "menu started");

    let outcome = event_loop(&mut terminal, &config);
    let restored = restore_terminal();

    if let Err(e) = &outcome {
        tracing::error!(error = %e, "menu stopped on terminal error");
    }
    outcome?;
    restored?;

    tracing::info!("menu stopped");
    Ok(())
}

fn event_loop(terminal: &mut MenuTerminal, config: &MenuConfig) -> Result<(), RunError> {
    let mut session = Session::new();

    loop {
        terminal.draw(|frame| render(&session, frame))?;

        // Only presses count; some platforms also report releases
        let key_event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };
        let Some(key) = map_key(key_event) else {
            continue;
        };

        let from = session.state;
        match update(session, &key, config) {
            Transition::Session(next) => {
                if next.state != from {
                    tracing::debug!(?from, to = ?next.state, selected = next.selected, "menu transition");
                }
                session = next;
            }
            Transition::Quit => {
                if from == MenuState::Input && key != Key::Interrupt {
                    tracing::warn!(limit = config.max_input_chars, "input limit exceeded, quitting");
                } else {
                    tracing::debug!(?from, key = %key.literal(), "quit requested");
                }
                return Ok(());
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
