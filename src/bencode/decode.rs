use super::cursor::Cursor;
use super::dict::Dict;
use super::error::BencodeError;
use super::options::DecodeOptions;
use super::value::Value;
use bytes::Bytes;
use tracing::{debug, trace};

/// Decodes a complete buffer holding exactly one bencode value.
///
/// Uses [`DecodeOptions::default`]: bytes left over after the value are an
/// error, and nesting is limited to
/// [`DEFAULT_MAX_DEPTH`](crate::constants::DEFAULT_MAX_DEPTH) levels.
///
/// # Examples
///
/// ```
/// use bencodec::bencode::{decode, BencodeError, Value};
///
/// assert_eq!(decode(b"i-5e").unwrap(), Value::Integer(-5));
/// assert!(matches!(decode(b"i03e"), Err(BencodeError::InvalidInteger { .. })));
/// assert!(matches!(decode(b"i1ei2e"), Err(BencodeError::TrailingData { .. })));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    decode_with(data, &DecodeOptions::default())
}

/// Decodes a complete buffer with explicit options.
pub fn decode_with(data: &[u8], opts: &DecodeOptions) -> Result<Value, BencodeError> {
    let (value, consumed) = decode_prefix(data, opts)?;

    let remaining = data.len() - consumed;
    if remaining > 0 {
        if !opts.allow_trailing {
            debug!(offset = consumed, remaining, "rejected bencode input with trailing data");
            return Err(BencodeError::TrailingData {
                offset: consumed,
                remaining,
            });
        }
        trace!(offset = consumed, remaining, "ignoring trailing data");
    }

    Ok(value)
}

/// Decodes one value from the front of `data`.
///
/// Returns the value and the number of bytes it occupied. Whatever follows
/// is left untouched, so this never fails with `TrailingData`.
///
/// # Examples
///
/// ```
/// use bencodec::bencode::{decode_prefix, DecodeOptions, Value};
///
/// let (value, used) = decode_prefix(b"4:spamrest", &DecodeOptions::default()).unwrap();
/// assert_eq!(value, Value::string("spam"));
/// assert_eq!(used, 6);
/// ```
pub fn decode_prefix(data: &[u8], opts: &DecodeOptions) -> Result<(Value, usize), BencodeError> {
    let mut decoder = Decoder::new(data, opts);
    match decoder.decode_value(0) {
        Ok(value) => Ok((value, decoder.cursor.position())),
        Err(err) => {
            debug!(error = %err, len = data.len(), "rejected bencode input");
            Err(err)
        }
    }
}

struct Decoder<'a> {
    cursor: Cursor<'a>,
    opts: &'a DecodeOptions,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], opts: &'a DecodeOptions) -> Self {
        Self {
            cursor: Cursor::new(data),
            opts,
        }
    }

    /// `depth` is the number of containers enclosing the value.
    fn decode_value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let offset = self.cursor.position();
        match self.cursor.peek()? {
            b'i' => {
                self.cursor.advance(1)?;
                Ok(Value::Integer(self.decode_integer()?))
            }
            b'l' => {
                let depth = self.enter(depth)?;
                self.cursor.advance(1)?;
                self.decode_list(depth)
            }
            b'd' => {
                let depth = self.enter(depth)?;
                self.cursor.advance(1)?;
                self.decode_dictionary(depth)
            }
            b'0'..=b'9' => Ok(Value::Bytes(self.decode_string()?)),
            byte => Err(BencodeError::InvalidTypeTag { byte, offset }),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, BencodeError> {
        let depth = depth + 1;
        if depth > self.opts.max_depth {
            return Err(BencodeError::DepthLimitExceeded {
                limit: self.opts.max_depth,
            });
        }
        Ok(depth)
    }

    /// Parses `[-]digits e`, with the leading `i` already consumed.
    fn decode_integer(&mut self) -> Result<i64, BencodeError> {
        let negative = self.cursor.peek()? == b'-';
        if negative {
            self.cursor.advance(1)?;
        }

        let digits_start = self.cursor.position();
        let mut leading_zero = false;
        let mut value: i64 = 0;

        loop {
            let offset = self.cursor.position();
            let digit = match self.cursor.peek()? {
                b'e' => break,
                c @ b'0'..=b'9' => i64::from(c - b'0'),
                _ => {
                    return Err(BencodeError::InvalidInteger {
                        offset,
                        reason: "unexpected character",
                    })
                }
            };

            if leading_zero {
                return Err(BencodeError::InvalidInteger {
                    offset: digits_start,
                    reason: "leading zero",
                });
            }
            leading_zero = offset == digits_start && digit == 0;

            // Accumulate towards the sign so that i64::MIN does not overflow.
            value = value
                .checked_mul(10)
                .and_then(|v| {
                    if negative {
                        v.checked_sub(digit)
                    } else {
                        v.checked_add(digit)
                    }
                })
                .ok_or(BencodeError::InvalidInteger {
                    offset: digits_start,
                    reason: "out of range",
                })?;

            self.cursor.advance(1)?;
        }

        if self.cursor.position() == digits_start {
            return Err(BencodeError::InvalidInteger {
                offset: digits_start,
                reason: "no digits",
            });
        }
        if negative && leading_zero {
            return Err(BencodeError::InvalidInteger {
                offset: digits_start,
                reason: "negative zero",
            });
        }

        self.cursor.advance(1)?;
        Ok(value)
    }

    /// Parses `length : bytes`. There is no tag byte; the cursor sits on the
    /// first length digit.
    fn decode_string(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.cursor.position();
        let mut len: usize = 0;

        loop {
            let offset = self.cursor.position();
            match self.cursor.peek()? {
                b':' => break,
                c @ b'0'..=b'9' => {
                    if offset == start + 1 && len == 0 {
                        return Err(BencodeError::InvalidStringLength { offset: start });
                    }
                    len = len
                        .checked_mul(10)
                        .and_then(|l| l.checked_add(usize::from(c - b'0')))
                        .ok_or(BencodeError::InvalidStringLength { offset: start })?;
                    self.cursor.advance(1)?;
                }
                _ => return Err(BencodeError::InvalidStringLength { offset }),
            }
        }

        if self.cursor.position() == start {
            return Err(BencodeError::InvalidStringLength { offset: start });
        }
        self.cursor.advance(1)?;

        let raw = self.cursor.take(len)?;
        Ok(Bytes::copy_from_slice(raw))
    }

    fn decode_list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let mut list = Vec::new();

        while self.cursor.peek()? != b'e' {
            list.push(self.decode_value(depth)?);
        }

        self.cursor.advance(1)?;
        Ok(Value::List(list))
    }

    fn decode_dictionary(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let mut dict = Dict::new();
        let mut prev_key: Option<Bytes> = None;

        loop {
            let offset = self.cursor.position();
            match self.cursor.peek()? {
                b'e' => break,
                b'0'..=b'9' => {}
                byte => return Err(BencodeError::InvalidTypeTag { byte, offset }),
            }

            let key = self.decode_string()?;

            if self.opts.require_sorted_keys {
                if let Some(prev) = &prev_key {
                    if key <= *prev {
                        return Err(BencodeError::UnsortedKey { key, offset });
                    }
                }
                prev_key = Some(key.clone());
            }
            if dict.contains_key(&key) {
                return Err(BencodeError::DuplicateKey { key, offset });
            }

            let value = self.decode_value(depth)?;
            dict.insert(key, value);
        }

        self.cursor.advance(1)?;
        Ok(Value::Dict(dict))
    }
}
