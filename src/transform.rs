//! The four text transforms offered by the menu.
//!
//! Pure functions — &str → String. The registry is a fixed, ordered array;
//! a transform's position in it is the index the menu selects by.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use thiserror::Error;

/// Failure of a single transform application.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Input was not valid padded URL-safe base64.
    #[error("illegal base64 data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A selectable text transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Base64Encode,
    Base64Decode,
    ByteEncode,
    ByteDecode,
}

/// Every transform, in menu order.
pub const TRANSFORMS: [Transform; 4] = [
    Transform::Base64Encode,
    Transform::Base64Decode,
    Transform::ByteEncode,
    Transform::ByteDecode,
];

impl Transform {
    /// Look up a transform by its menu index.
    pub fn from_index(index: usize) -> Option<Transform> {
        TRANSFORMS.get(index).copied()
    }

    /// Position in [`TRANSFORMS`].
    pub fn index(self) -> usize {
        match self {
            Transform::Base64Encode => 0,
            Transform::Base64Decode => 1,
            Transform::ByteEncode => 2,
            Transform::ByteDecode => 3,
        }
    }

    /// Menu label, numbered from 1.
    pub fn label(self) -> &'static str {
        match self {
            Transform::Base64Encode => "1. Base64 Encoding",
            Transform::Base64Decode => "2. Base64 Decoding",
            Transform::ByteEncode => "3. Byte Encoding",
            Transform::ByteDecode => "4. Byte Decoding",
        }
    }

    /// Stable command-line identifier.
    pub fn id(self) -> &'static str {
        match self {
            Transform::Base64Encode => "base64-encode",
            Transform::Base64Decode => "base64-decode",
            Transform::ByteEncode => "byte-encode",
            Transform::ByteDecode => "byte-decode",
        }
    }

    /// Apply the transform, surfacing decode failures.
    pub fn try_apply(self, input: &str) -> Result<String, TransformError> {
        match self {
            Transform::Base64Encode => Ok(URL_SAFE.encode(input.as_bytes())),
            Transform::Base64Decode => {
                let bytes = URL_SAFE.decode(input.as_bytes())?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Transform::ByteEncode => Ok(format_byte_slice(input.as_bytes())),
            Transform::ByteDecode => Ok(input.to_string()),
        }
    }

    /// Apply the transform for display.
    ///
    /// A failure becomes the text `"Error: <message>"` in place of the
    /// output, so the menu can show it like any other result.
    pub fn apply(self, input: &str) -> String {
        self.try_apply(input)
            .unwrap_or_else(|e| format!("Error: {}", e))
    }
}

/// Render bytes as bracketed, space-separated decimals: `[65 66]`.
fn format_byte_slice(bytes: &[u8]) -> String {
    let body: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", body.join(" "))
}

// ============================================================================
// TESTS
// ============================================================================
