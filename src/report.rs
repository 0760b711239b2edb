//! Output formatting for the one-shot commands.
//!
//! Pure functions — (data, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, TransformInfo, TransformOutput};

/// Format the transform listing.
pub fn format_listing(
    transforms: &[TransformInfo],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(listing_human(transforms)),
        OutputFormat::Json => to_json(&transforms),
    }
}

/// Format the result of a single `apply`.
pub fn format_output(
    output: &TransformOutput,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format!("{}\n", output.output)),
        OutputFormat::Json => to_json(output),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn listing_human(transforms: &[TransformInfo]) -> String {
    let width = transforms.iter().map(|t| t.id.len()).max().unwrap_or(0);

    let mut out = String::new();
    for info in transforms {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            info.id,
            info.label,
            width = width
        ));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

// ============================================================================
// TESTS
// ============================================================================
