//! bencodec - A strict bencode codec
//!
//! This library decodes untrusted bencode ([BEP-3]) buffers into a typed
//! value tree and encodes value trees back into their canonical bytes.
//!
//! # Modules
//!
//! - [`bencode`] - Cursor-based decoder, canonical encoder, value model
//! - [`constants`] - Decoding limits and defaults
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod constants;

pub use bencode::{
    decode, decode_prefix, decode_with, encode, encode_to, encoded_len, BencodeError,
    DecodeOptions, Dict, Value,
};
