//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Red: transform errors
//! - Cyan: interactive elements (prompt, typed text)
//! - Dim: de-emphasized (help line)
//! - Bold: titles and the chosen transform

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Transform failed — red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Interactive element — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row in the transform list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
