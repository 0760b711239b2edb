//! Shared data types: configuration and serializable command output.

use serde::Serialize;

use crate::transform::Transform;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default cap on accumulated input, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 4096;

/// Configuration for the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Typing past this many characters ends the program.
    pub max_input_chars: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

/// Output format for one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// COMMAND OUTPUT
// ============================================================================

/// One row of the transform listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformInfo {
    pub index: usize,
    pub id: &'static str,
    pub label: &'static str,
}

impl From<Transform> for TransformInfo {
    fn from(t: Transform) -> Self {
        TransformInfo {
            index: t.index(),
            id: t.id(),
            label: t.label(),
        }
    }
}

/// Result of applying one transform to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOutput {
    pub transform: &'static str,
    pub input: String,
    pub output: String,
}
