//! codec-menu: Pick a text transform, type a string, see the result.

pub mod report;
pub mod transform;
pub mod tui;
pub mod types;
