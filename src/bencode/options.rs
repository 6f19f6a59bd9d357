use crate::constants::DEFAULT_MAX_DEPTH;

/// Decoder configuration.
///
/// The defaults are strict about trailing data and permissive about
/// dictionary key order, which is what most real-world producers need.
///
/// # Examples
///
/// ```
/// use bencodec::bencode::{decode_with, DecodeOptions, Value};
///
/// let opts = DecodeOptions::new().allow_trailing(true);
/// assert_eq!(decode_with(b"i1eextra", &opts).unwrap(), Value::Integer(1));
///
/// let opts = DecodeOptions::new().require_sorted_keys(true);
/// assert!(decode_with(b"d1:bi1e1:ai2ee", &opts).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub(crate) max_depth: usize,
    pub(crate) allow_trailing: bool,
    pub(crate) require_sorted_keys: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of lists/dictionaries a value may be nested inside.
    /// A top-level list counts as one level; scalars do not count.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Ignore bytes left over after the top-level value instead of failing
    /// with `TrailingData`.
    pub fn allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    /// Reject dictionaries whose keys are not in strictly increasing
    /// byte-wise order on the wire.
    pub fn require_sorted_keys(mut self, require: bool) -> Self {
        self.require_sorted_keys = require;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
            require_sorted_keys: false,
        }
    }
}
