use super::value::Value;
use bytes::BufMut;

/// Encodes a bencode value to a byte vector.
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys sorted lexicographically)
///
/// Dictionary keys are sorted here regardless of insertion order, so equal
/// trees always produce identical bytes.
///
/// # Examples
///
/// ```
/// use bencodec::bencode::{encode, Dict, Value};
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// let mut dict = Dict::new();
/// dict.insert("b", Value::Integer(2));
/// dict.insert("a", Value::Integer(1));
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(value));
    encode_to(value, &mut buf);
    buf
}

/// Appends the canonical encoding of `value` to `buf`.
pub fn encode_to<B: BufMut>(value: &Value, buf: &mut B) {
    match value {
        Value::Integer(i) => {
            buf.put_u8(b'i');
            put_integer(*i, buf);
            buf.put_u8(b'e');
        }
        Value::Bytes(b) => put_bytes(b, buf),
        Value::List(l) => {
            buf.put_u8(b'l');
            for item in l {
                encode_to(item, buf);
            }
            buf.put_u8(b'e');
        }
        Value::Dict(d) => {
            buf.put_u8(b'd');
            for (key, val) in d.sorted() {
                put_bytes(key, buf);
                encode_to(val, buf);
            }
            buf.put_u8(b'e');
        }
    }
}

/// Exact length of the canonical encoding of `value`.
pub fn encoded_len(value: &Value) -> usize {
    match value {
        Value::Integer(i) => 2 + integer_len(*i),
        Value::Bytes(b) => bytes_len(b),
        Value::List(l) => 2 + l.iter().map(encoded_len).sum::<usize>(),
        Value::Dict(d) => {
            2 + d
                .iter()
                .map(|(key, val)| bytes_len(key) + encoded_len(val))
                .sum::<usize>()
        }
    }
}

fn put_bytes<B: BufMut>(bytes: &[u8], buf: &mut B) {
    buf.put_slice(bytes.len().to_string().as_bytes());
    buf.put_u8(b':');
    buf.put_slice(bytes);
}

fn put_integer<B: BufMut>(i: i64, buf: &mut B) {
    buf.put_slice(i.to_string().as_bytes());
}

fn bytes_len(bytes: &[u8]) -> usize {
    decimal_len(bytes.len() as u64) + 1 + bytes.len()
}

fn integer_len(i: i64) -> usize {
    usize::from(i < 0) + decimal_len(i.unsigned_abs())
}

fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
