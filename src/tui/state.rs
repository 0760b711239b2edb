//! TUI state algebra: pure types, zero effects.
//!
//! The whole menu lives in one [`Session`]. Which screen is showing is a
//! [`MenuState`]; how a key is interpreted depends on it. Keys arrive as
//! [`Key`] values, already decoupled from crossterm.

use crate::transform::{Transform, TRANSFORMS};

// ============================================================================
// MENU STATE
// ============================================================================

/// The active screen. Cycles `Select → Input → Result → Select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Choosing a transform from the list.
    #[default]
    Select,
    /// Typing the text to transform.
    Input,
    /// Showing the transform output.
    Result,
}

// ============================================================================
// SESSION
// ============================================================================

/// The single mutable aggregate for the program's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub state: MenuState,
    /// Focused row in the transform list. Always a valid index.
    pub cursor: usize,
    /// Row chosen when leaving `Select`. Meaningless while in `Select`.
    pub selected: usize,
    /// Text typed so far on the input screen.
    pub input: String,
    /// Header text carried into the input and result screens.
    pub display: String,
}

impl Session {
    /// Fresh session on the select screen, cursor on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform chosen on the select screen.
    pub fn chosen(&self) -> Transform {
        TRANSFORMS[self.selected.min(TRANSFORMS.len() - 1)]
    }

    /// Number of characters typed so far.
    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }
}

// ============================================================================
// KEYS
// ============================================================================

/// A key press, in the menu's own vocabulary.
///
/// Every key has a literal text form ([`Key::literal`]) which is what gets
/// appended when the key is typed on the input screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    /// A printable character, including space.
    Char(char),
    /// Ctrl+C.
    Interrupt,
    /// Any other key, by name: `"tab"`, `"esc"`, `"ctrl+x"`, `"f5"`, ...
    Named(String),
}

impl Key {
    /// Text form of the key.
    pub fn literal(&self) -> String {
        match self {
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Enter => "enter".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Interrupt => "ctrl+c".to_string(),
            Key::Named(name) => name.clone(),
        }
    }

    /// Navigation up: arrow or `k`.
    pub fn is_up(&self) -> bool {
        matches!(self, Key::Up | Key::Char('k'))
    }

    /// Navigation down: arrow or `m`.
    pub fn is_down(&self) -> bool {
        matches!(self, Key::Down | Key::Char('m'))
    }

    /// Confirmation: enter or space.
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary either renders
/// the new session or shuts down.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this session.
    Session(Session),
    /// End the program.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
