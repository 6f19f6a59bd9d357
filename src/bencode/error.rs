use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while decoding bencode.
///
/// Encoding a well-formed [`Value`](super::Value) never fails, so every variant
/// describes a way in which untrusted input was rejected. Offsets are byte
/// positions in the input where the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// The input ended before a required token or byte count.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// The leading byte of a value matches none of `i`, `l`, `d` or a digit.
    #[error("invalid type tag {byte:#04x} at offset {offset}")]
    InvalidTypeTag { byte: u8, offset: usize },

    /// Malformed digits, a bad sign, a leading zero, `-0`, or overflow.
    #[error("invalid integer at offset {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: &'static str },

    /// Malformed byte string length prefix or missing `:`.
    #[error("invalid string length at offset {offset}")]
    InvalidStringLength { offset: usize },

    /// A dictionary key appeared more than once.
    #[error("duplicate dictionary key {key:?} at offset {offset}")]
    DuplicateKey { key: Bytes, offset: usize },

    /// A dictionary key was not greater than the key before it.
    #[error("unsorted dictionary key {key:?} at offset {offset}")]
    UnsortedKey { key: Bytes, offset: usize },

    #[error("trailing data ({remaining} bytes) at offset {offset}")]
    TrailingData { offset: usize, remaining: usize },

    #[error("nesting deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

impl BencodeError {
    /// Returns the input offset at which the error was detected, if recorded.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BencodeError::UnexpectedEof { offset }
            | BencodeError::InvalidTypeTag { offset, .. }
            | BencodeError::InvalidInteger { offset, .. }
            | BencodeError::InvalidStringLength { offset }
            | BencodeError::DuplicateKey { offset, .. }
            | BencodeError::UnsortedKey { offset, .. }
            | BencodeError::TrailingData { offset, .. } => Some(*offset),
            BencodeError::DepthLimitExceeded { .. } => None,
        }
    }
}
