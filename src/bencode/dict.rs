use super::value::Value;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A bencode dictionary.
///
/// Entries are kept in insertion order (for decoded dictionaries, the order
/// they appeared on the wire) next to a hash index for lookups. Canonical
/// key order is produced on demand by [`Dict::sorted`], which is what the
/// encoder uses; the insertion order is never trusted for correctness.
///
/// Equality ignores insertion order: two dictionaries are equal when they
/// map the same keys to equal values.
///
/// # Examples
///
/// ```
/// use bencodec::bencode::{encode, Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.insert("zebra", Value::Integer(1));
/// dict.insert("apple", Value::Integer(2));
///
/// let keys: Vec<&[u8]> = dict.keys().map(|k| k.as_ref()).collect();
/// assert_eq!(keys, [b"zebra".as_slice(), b"apple".as_slice()]);
///
/// assert_eq!(encode(&Value::Dict(dict)), b"d5:applei2e5:zebrai1ee");
/// ```
#[derive(Clone, Default)]
pub struct Dict {
    entries: Vec<(Bytes, Value)>,
    index: HashMap<Bytes, usize>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a key-value pair.
    ///
    /// A new key is appended after the existing entries. If the key is already
    /// present its value is replaced in place and the old value is returned.
    pub fn insert(&mut self, key: impl Into<Bytes>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&idx) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[idx].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, &Value)> {
        self.entries.iter().map(entry_refs)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns the entries ordered by byte-wise lexicographic key comparison.
    pub fn sorted(&self) -> Vec<(&Bytes, &Value)> {
        let mut sorted: Vec<_> = self.iter().collect();
        // keys are unique, so stability does not matter
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Returns true if insertion order is already strictly increasing.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for Dict {}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Bytes>> FromIterator<(K, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut dict = Dict::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl From<BTreeMap<Bytes, Value>> for Dict {
    fn from(map: BTreeMap<Bytes, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for Dict {
    type Item = (Bytes, Value);
    type IntoIter = std::vec::IntoIter<(Bytes, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a Bytes, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (Bytes, Value)>,
        fn(&'a (Bytes, Value)) -> (&'a Bytes, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_refs as fn(&'a (Bytes, Value)) -> (&'a Bytes, &'a Value))
    }
}

fn entry_refs((key, value): &(Bytes, Value)) -> (&Bytes, &Value) {
    (key, value)
}
