use super::*;
use rstest::rstest;

fn written(value: &str) -> Vec<u8> {
  let mut buf = Vec::new();
  put_string(&mut buf, value);
  buf
}

fn read(source: &mut impl Buf) -> Result<String, DeserializationError> {
  read_string_with(source, &CodecConfig::default())
}

#[test]
fn put_string_emits_length_then_bytes() {
  assert_eq!(written("x"), vec![0x01, b'x']);
}

#[test]
fn long_strings_use_multi_byte_length() {
  let value = "a".repeat(300);
  let buf = written(&value);

  // 300 = 0b1_0010_1100 -> 0xac 0x02
  assert_eq!(&buf[..2], &[0xac, 0x02]);
  assert_eq!(buf.len(), encoded_string_len(&value));

  let decoded = read(&mut buf.as_slice()).expect("read");
  assert_eq!(decoded, value);
}

#[rstest]
#[case("orders-queue")]
#[case("żółć-set")]
#[case("")]
fn read_string_restores_written_value(#[case] value: &str) {
  let buf = written(value);
  assert_eq!(buf.len(), encoded_string_len(value));
  let decoded = read(&mut buf.as_slice()).expect("read");
  assert_eq!(decoded, value);
}

#[test]
fn read_string_leaves_trailing_bytes() {
  let mut buf = written("first");
  buf.extend_from_slice(b"tail");

  let mut source = buf.as_slice();
  assert_eq!(read(&mut source).expect("read"), "first");
  assert_eq!(source, b"tail");
}

#[test]
fn read_string_spans_chained_chunks() {
  let buf = written("orders-queue");
  let (head, tail) = buf.split_at(4);
  let mut source = head.chain(tail);
  assert_eq!(read(&mut source).expect("read"), "orders-queue");
  assert!(!source.has_remaining());
}

#[test]
fn empty_source_is_truncated() {
  let err = read(&mut &b""[..]).expect_err("empty");
  assert_eq!(
    err,
    DeserializationError::Truncated {
      needed: 1,
      remaining: 0,
    }
  );
}

#[test]
fn short_payload_is_truncated() {
  let bytes = [0x05, b'a', b'b'];
  let err = read(&mut &bytes[..]).expect_err("short");
  assert_eq!(
    err,
    DeserializationError::Truncated {
      needed: 5,
      remaining: 2,
    }
  );
}

#[test]
fn huge_declared_length_is_truncated_before_allocating() {
  let mut bytes = Vec::new();
  encode_varint(u64::MAX, &mut bytes);
  bytes.push(b'a');
  let err = read(&mut bytes.as_slice()).expect_err("huge");
  assert!(matches!(
    err,
    DeserializationError::Truncated { remaining: 1, .. } | DeserializationError::LengthOverflow(_)
  ));
}

#[test]
fn unterminated_varint_is_rejected() {
  let bytes = [0x80u8];
  let err = read(&mut &bytes[..]).expect_err("varint");
  assert!(matches!(err, DeserializationError::InvalidLengthPrefix(_)));
}

#[test]
fn overlong_varint_is_rejected() {
  let bytes = [0xffu8; 11];
  let err = read(&mut &bytes[..]).expect_err("varint");
  assert!(matches!(err, DeserializationError::InvalidLengthPrefix(_)));
}

#[test]
fn invalid_utf8_is_rejected() {
  let bytes = [0x02u8, 0xc3, 0x28];
  let err = read(&mut &bytes[..]).expect_err("utf8");
  assert!(matches!(err, DeserializationError::InvalidUtf8(_)));
}

#[test]
fn configured_limit_is_enforced() {
  let buf = written("abcdef");

  let config = CodecConfig::new().with_max_string_len(4);
  let err = read_string_with(&mut buf.as_slice(), &config).expect_err("limit");
  assert_eq!(err, DeserializationError::LengthLimitExceeded { len: 6, limit: 4 });

  let config = CodecConfig::new().with_max_string_len(6);
  assert_eq!(read_string_with(&mut buf.as_slice(), &config).expect("read"), "abcdef");
}
