use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

fn bytes(s: &'static [u8]) -> Value {
    Value::Bytes(Bytes::from_static(s))
}

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i123e").unwrap(), Value::Integer(123));
    assert_eq!(decode(b"i-5e").unwrap(), Value::Integer(-5));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(decode(b"i10e").unwrap(), Value::Integer(10));
}

#[test]
fn test_decode_integer_limits() {
    assert_eq!(
        decode(b"i9223372036854775807e").unwrap(),
        Value::Integer(i64::MAX)
    );
    assert_eq!(
        decode(b"i-9223372036854775808e").unwrap(),
        Value::Integer(i64::MIN)
    );
    assert!(matches!(
        decode(b"i9223372036854775808e"),
        Err(BencodeError::InvalidInteger { reason: "out of range", .. })
    ));
    assert!(matches!(
        decode(b"i-9223372036854775809e"),
        Err(BencodeError::InvalidInteger { reason: "out of range", .. })
    ));
}

#[test]
fn test_decode_integer_invalid() {
    let cases: &[(&[u8], &str)] = &[
        (b"i03e", "leading zero"),
        (b"i00e", "leading zero"),
        (b"i-03e", "leading zero"),
        (b"i-0e", "negative zero"),
        (b"ie", "no digits"),
        (b"i-e", "no digits"),
        (b"i1.5e", "unexpected character"),
        (b"i+1e", "unexpected character"),
        (b"i--1e", "unexpected character"),
        (b"i 1e", "unexpected character"),
    ];
    for (input, expected) in cases {
        match decode(input) {
            Err(BencodeError::InvalidInteger { reason, .. }) => {
                assert_eq!(reason, *expected, "input {:?}", input)
            }
            other => panic!("input {:?}: unexpected result {:?}", input, other),
        }
    }
}

#[test]
fn test_decode_integer_eof() {
    assert!(matches!(decode(b"i"), Err(BencodeError::UnexpectedEof { .. })));
    assert!(matches!(decode(b"i12"), Err(BencodeError::UnexpectedEof { .. })));
    assert!(matches!(decode(b"i-"), Err(BencodeError::UnexpectedEof { .. })));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(decode(b"5:hello").unwrap(), bytes(b"hello"));
    assert_eq!(decode(b"0:").unwrap(), bytes(b""));
    assert_eq!(decode(b"3:\x00\xff\x10").unwrap(), bytes(b"\x00\xff\x10"));
    assert_eq!(decode(b"10:0123456789").unwrap(), bytes(b"0123456789"));
}

#[test]
fn test_decode_bytes_invalid() {
    assert!(matches!(
        decode(b"5:he"),
        Err(BencodeError::UnexpectedEof { .. })
    ));
    assert!(matches!(decode(b"5"), Err(BencodeError::UnexpectedEof { .. })));
    assert_eq!(
        decode(b"05:hello"),
        Err(BencodeError::InvalidStringLength { offset: 0 })
    );
    assert_eq!(
        decode(b"5x:hello"),
        Err(BencodeError::InvalidStringLength { offset: 1 })
    );
    assert!(matches!(
        decode(b"99999999999999999999999:a"),
        Err(BencodeError::InvalidStringLength { .. })
    ));
}

#[test]
fn test_decode_huge_length_does_not_allocate() {
    assert!(matches!(
        decode(b"4294967295:abc"),
        Err(BencodeError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_decode_list() {
    let result = decode(b"l3:onei2ee").unwrap();
    assert_eq!(
        result,
        Value::List(vec![bytes(b"one"), Value::Integer(2)])
    );
    assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
    assert_eq!(
        decode(b"llee").unwrap(),
        Value::List(vec![Value::List(vec![])])
    );
}

#[test]
fn test_decode_list_unterminated() {
    assert!(matches!(decode(b"l"), Err(BencodeError::UnexpectedEof { .. })));
    assert!(matches!(
        decode(b"li1e"),
        Err(BencodeError::UnexpectedEof { .. })
    ));
    assert_eq!(
        decode(b"lxe"),
        Err(BencodeError::InvalidTypeTag {
            byte: b'x',
            offset: 1
        })
    );
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:key5:valuee").unwrap();
    let dict = result.as_dict().unwrap();
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get(b"key"), Some(&bytes(b"value")));

    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    assert_eq!(result.get(b"spam").and_then(|v| v.as_str()), Some("eggs"));
    assert_eq!(decode(b"de").unwrap(), Value::Dict(Dict::new()));
}

#[test]
fn test_decode_dict_missing_value() {
    assert_eq!(
        decode(b"d3:keye"),
        Err(BencodeError::InvalidTypeTag {
            byte: b'e',
            offset: 6
        })
    );
    assert!(matches!(
        decode(b"d3:key"),
        Err(BencodeError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_decode_dict_non_string_key() {
    assert_eq!(
        decode(b"di1ei2ee"),
        Err(BencodeError::InvalidTypeTag {
            byte: b'i',
            offset: 1
        })
    );
    assert!(matches!(
        decode(b"dli1eei2ee"),
        Err(BencodeError::InvalidTypeTag { byte: b'l', .. })
    ));
}

#[test]
fn test_decode_dict_duplicate_key() {
    assert_eq!(
        decode(b"d1:ai1e1:ai2ee"),
        Err(BencodeError::DuplicateKey {
            key: Bytes::from_static(b"a"),
            offset: 7
        })
    );
    assert!(matches!(
        decode(b"d1:ai1e1:bi2e1:ai3ee"),
        Err(BencodeError::DuplicateKey { .. })
    ));
}

#[test]
fn test_decode_dict_preserves_wire_order() {
    let value = decode(b"d3:bbb3:aaa3:aaa3:bbbe").unwrap();
    let dict = value.as_dict().unwrap();
    let keys: Vec<&[u8]> = dict.keys().map(|k| k.as_ref()).collect();
    assert_eq!(keys, [b"bbb".as_slice(), b"aaa".as_slice()]);
    assert!(!dict.is_sorted());
    assert_eq!(encode(&value), b"d3:aaa3:bbb3:bbb3:aaae");
}

#[test]
fn test_unsorted_keys_accepted_then_sorted() {
    assert!(decode(b"d3:bbb3:aaae").is_ok());
    let value = decode(b"d3:bbbi1e3:aaai2ee").unwrap();
    assert_eq!(encode(&value), b"d3:aaai2e3:bbbi1ee");
}

#[test]
fn test_require_sorted_keys() {
    let opts = DecodeOptions::new().require_sorted_keys(true);
    assert!(decode_with(b"d1:ai1e1:bi2ee", &opts).is_ok());
    assert_eq!(
        decode_with(b"d1:bi1e1:ai2ee", &opts),
        Err(BencodeError::UnsortedKey {
            key: Bytes::from_static(b"a"),
            offset: 7
        })
    );
    assert!(matches!(
        decode_with(b"d1:ai1e1:ai2ee", &opts),
        Err(BencodeError::UnsortedKey { .. })
    ));
    // nested dictionaries are checked too
    assert!(matches!(
        decode_with(b"d1:ad1:zi0e1:yi0eee", &opts),
        Err(BencodeError::UnsortedKey { .. })
    ));
}

#[test]
fn test_decode_empty_and_garbage() {
    assert_eq!(decode(b""), Err(BencodeError::UnexpectedEof { offset: 0 }));
    assert_eq!(
        decode(b"xyz"),
        Err(BencodeError::InvalidTypeTag {
            byte: b'x',
            offset: 0
        })
    );
    assert!(matches!(
        decode(b"e"),
        Err(BencodeError::InvalidTypeTag { byte: b'e', .. })
    ));
}

#[test]
fn test_trailing_data_error() {
    assert_eq!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData {
            offset: 4,
            remaining: 5
        })
    );
}

#[test]
fn test_lenient_trailing_data() {
    let opts = DecodeOptions::new().allow_trailing(true);
    assert_eq!(decode_with(b"i42eextra", &opts).unwrap(), Value::Integer(42));
    // the value itself must still be well formed
    assert!(decode_with(b"i4xe", &opts).is_err());
}

#[test]
fn test_decode_prefix() {
    let opts = DecodeOptions::default();
    let data = b"l1:ae4:spami7e";
    let (first, used) = decode_prefix(data, &opts).unwrap();
    assert_eq!(first, Value::List(vec![bytes(b"a")]));
    assert_eq!(used, 5);

    let (second, used2) = decode_prefix(&data[used..], &opts).unwrap();
    assert_eq!(second, bytes(b"spam"));
    let (third, used3) = decode_prefix(&data[used + used2..], &opts).unwrap();
    assert_eq!(third, Value::Integer(7));
    assert_eq!(used + used2 + used3, data.len());
}

#[test]
fn test_depth_limit() {
    let nested = |n: usize| {
        let mut data = vec![b'l'; n];
        data.extend(std::iter::repeat(b'e').take(n));
        data
    };

    assert!(decode(&nested(64)).is_ok());
    assert_eq!(
        decode(&nested(65)),
        Err(BencodeError::DepthLimitExceeded { limit: 64 })
    );
    assert_eq!(
        decode(&nested(100_000)),
        Err(BencodeError::DepthLimitExceeded { limit: 64 })
    );

    let opts = DecodeOptions::new().max_depth(2);
    assert!(decode_with(&nested(2), &opts).is_ok());
    assert!(decode_with(&nested(3), &opts).is_err());
    assert!(decode_with(b"i1e", &DecodeOptions::new().max_depth(0)).is_ok());
}

#[test]
fn test_depth_limit_without_terminators() {
    let mut data = vec![b'd'];
    for _ in 0..100_000 {
        data.extend_from_slice(b"1:ad");
    }
    assert!(matches!(
        decode(&data),
        Err(BencodeError::DepthLimitExceeded { .. })
    ));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode(&bytes(b"spam")), b"4:spam");
    assert_eq!(encode(&bytes(b"")), b"0:");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![bytes(b"spam"), Value::Integer(42)]);
    assert_eq!(encode(&list), b"l4:spami42ee");
}

#[test]
fn test_encode_dict_sorts_keys() {
    let mut dict = Dict::new();
    dict.insert("spam", bytes(b"eggs"));
    dict.insert("cow", bytes(b"moo"));
    dict.insert(Bytes::from_static(b"\xff"), Value::Integer(1));
    dict.insert("", Value::Integer(0));
    let value = Value::Dict(dict);
    assert_eq!(
        encode(&value),
        b"d0:i0e3:cow3:moo4:spam4:eggs1:\xffi1ee".as_slice()
    );
    assert_eq!(encoded_len(&value), encode(&value).len());
}

#[test]
fn test_roundtrip() {
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    assert_eq!(encode(&decoded), original);
}

#[test]
fn test_nested_structures() {
    let data = b"d4:listl4:spami42eee";
    let decoded = decode(data).unwrap();
    assert_eq!(encode(&decoded), data);
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());
    assert_eq!(value.type_name(), "integer");

    let value = bytes(b"test");
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
    assert!(value.clone().into_dict().is_none());
    assert_eq!(value.get(b"x"), None);
}

#[test]
fn test_dict_equality_ignores_order() {
    let a: Dict = [("x", Value::Integer(1)), ("y", Value::Integer(2))]
        .into_iter()
        .collect();
    let b: Dict = [("y", Value::Integer(2)), ("x", Value::Integer(1))]
        .into_iter()
        .collect();
    assert_eq!(a, b);
    assert!(a.is_sorted());
    assert!(!b.is_sorted());

    let c: Dict = [("x", Value::Integer(1))].into_iter().collect();
    assert_ne!(a, c);
}

#[test]
fn test_dict_insert_replaces_in_place() {
    let mut dict = Dict::new();
    assert_eq!(dict.insert("a", Value::Integer(1)), None);
    assert_eq!(dict.insert("b", Value::Integer(2)), None);
    assert_eq!(dict.insert("a", Value::Integer(3)), Some(Value::Integer(1)));
    assert_eq!(dict.len(), 2);
    let entries: Vec<_> = dict.iter().map(|(k, v)| (&k[..], v.clone())).collect();
    assert_eq!(
        entries,
        vec![
            (b"a".as_slice(), Value::Integer(3)),
            (b"b".as_slice(), Value::Integer(2))
        ]
    );
}

#[test]
fn test_dict_from_btreemap() {
    let mut map = BTreeMap::new();
    map.insert(Bytes::from_static(b"b"), Value::Integer(1));
    map.insert(Bytes::from_static(b"a"), Value::Integer(2));
    let dict = Dict::from(map);

    assert!(dict.is_sorted());
    let expected: Dict = [("b", Value::Integer(1)), ("a", Value::Integer(2))]
        .into_iter()
        .collect();
    assert_eq!(dict, expected);

    let mut keys = Vec::new();
    for (key, value) in &dict {
        assert_eq!(dict.get(key), Some(value));
        keys.push(key.clone());
    }
    assert_eq!(keys, [Bytes::from_static(b"a"), Bytes::from_static(b"b")]);

    let owned: Vec<(Bytes, Value)> = dict.into_iter().collect();
    assert_eq!(
        owned,
        vec![
            (Bytes::from_static(b"a"), Value::Integer(2)),
            (Bytes::from_static(b"b"), Value::Integer(1)),
        ]
    );
}

#[test]
fn test_display() {
    let value = decode(b"d4:name4:test3:raw2:\xff\x004:sizeli1ei-2eee").unwrap();
    assert_eq!(
        value.to_string(),
        r#"{"name": "test", "raw": 0xff00, "size": [1, -2]}"#
    );
}

#[test]
fn test_error_offset() {
    assert_eq!(decode(b"i1ex").unwrap_err().offset(), Some(3));
    assert_eq!(
        decode(b"l5:abc").unwrap_err().offset(),
        Some(6)
    );
    assert_eq!(
        decode_with(b"li1ee", &DecodeOptions::new().max_depth(0))
            .unwrap_err()
            .offset(),
        None
    );
}
