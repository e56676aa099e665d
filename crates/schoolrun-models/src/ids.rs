//! Identifier codec.
//!
//! Identifiers travel as canonical hyphenated UUID text in API payloads and
//! tokens, and as 16 raw bytes in storage keys. Both directions are exact;
//! anything that is not a canonical UUID is rejected rather than truncated.
//!
//! ```ignore
//! let bytes = ids::to_binary("3fa85f64-5717-4562-b3fc-2c963f66afa6")?;
//! assert_eq!(ids::from_binary(&bytes)?, "3fa85f64-5717-4562-b3fc-2c963f66afa6");
//! ```

use thiserror::Error;
use uuid::Uuid;

const HYPHENATED_LEN: usize = 36;
const BINARY_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid UUID text: {0:?}")]
    InvalidText(String),

    #[error("invalid UUID binary length: expected 16 bytes, got {0}")]
    InvalidLength(usize),
}

/// Parses canonical hyphenated text into a [`Uuid`].
pub fn parse(text: &str) -> Result<Uuid, IdError> {
    // The length check pins the accepted form to the hyphenated one; the
    // simple, braced and urn forms all have other lengths.
    if text.len() != HYPHENATED_LEN {
        return Err(IdError::InvalidText(text.to_string()));
    }
    Uuid::try_parse(text).map_err(|_| IdError::InvalidText(text.to_string()))
}

pub fn to_binary(text: &str) -> Result<[u8; BINARY_LEN], IdError> {
    parse(text).map(|uuid| *uuid.as_bytes())
}

pub fn from_binary(bytes: &[u8]) -> Result<String, IdError> {
    Uuid::from_slice(bytes)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| IdError::InvalidLength(bytes.len()))
}
