//! Bencode decoding and canonical encoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses. Because encoded bytes are routinely hashed, the encoder here
//! always produces the single canonical form of a value.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use bencodec::bencode::{decode, Value};
//!
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Canonical re-encoding
//!
//! Key order on the wire is accepted as-is but never trusted; encoding sorts.
//!
//! ```
//! use bencodec::bencode::{decode, encode};
//!
//! let value = decode(b"d3:bbbi1e3:aaai2ee").unwrap();
//! assert_eq!(encode(&value), b"d3:aaai2e3:bbbi1ee");
//! ```
//!
//! # Error Handling
//!
//! Decoding stops at the first problem and returns no partial tree:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidTypeTag`] - A value starts with an unknown byte
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidStringLength`] - Malformed byte string length
//! - [`BencodeError::DuplicateKey`] - A dictionary key appears twice
//! - [`BencodeError::UnsortedKey`] - Keys out of order (opt-in check)
//! - [`BencodeError::TrailingData`] - Extra data after the value
//! - [`BencodeError::DepthLimitExceeded`] - Nesting limit exceeded
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod cursor;
mod decode;
mod dict;
mod encode;
mod error;
mod options;
mod value;

pub use cursor::Cursor;
pub use decode::{decode, decode_prefix, decode_with};
pub use dict::Dict;
pub use encode::{encode, encode_to, encoded_len};
pub use error::BencodeError;
pub use options::DecodeOptions;
pub use value::Value;

#[cfg(test)]
mod tests;
