//! Length-prefixed UTF-8 strings.
//!
//! Layout:
//! ```text
//! ┌────────────────────┬──────────────────────┐
//! │ byte length varint │ UTF-8 bytes (length) │
//! └────────────────────┴──────────────────────┘
//! ```
//! No terminator and no type tag. A reader consumes exactly one field and
//! leaves anything after it in the source.

use prost::bytes::{Buf, BufMut};
use prost::encoding::{decode_varint, encode_varint, encoded_len_varint};
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::DeserializationError;

#[cfg(test)]
mod tests;

/// Number of bytes [`put_string`] emits for `value`.
pub fn encoded_string_len(value: &str) -> usize {
  encoded_len_varint(value.len() as u64) + value.len()
}

/// Appends `value` to `sink` without checking capacity first.
///
/// Capacity is checked once per value by [`BinaryCodec::encode`](crate::BinaryCodec::encode);
/// call this from [`BinaryCodec::encode_raw`](crate::BinaryCodec::encode_raw).
///
/// # Panics
/// Panics if `sink` runs out of space, like any other [`BufMut`] write.
pub fn put_string(sink: &mut impl BufMut, value: &str) {
  encode_varint(value.len() as u64, sink);
  sink.put_slice(value.as_bytes());
}

/// Reads one string written by [`put_string`], enforcing `config`'s limits.
pub fn read_string_with(source: &mut impl Buf, config: &CodecConfig) -> Result<String, DeserializationError> {
  if !source.has_remaining() {
    return Err(DeserializationError::Truncated {
      needed: 1,
      remaining: 0,
    });
  }

  let declared = decode_varint(source)?;
  let len = usize::try_from(declared).map_err(|_| DeserializationError::LengthOverflow(declared))?;

  if let Some(limit) = config.max_string_len() {
    if len > limit {
      debug!(len, limit, "rejecting string longer than configured limit");
      return Err(DeserializationError::LengthLimitExceeded { len, limit });
    }
  }

  let remaining = source.remaining();
  if len > remaining {
    return Err(DeserializationError::Truncated { needed: len, remaining });
  }

  let mut bytes = vec![0u8; len];
  source.copy_to_slice(&mut bytes);
  Ok(String::from_utf8(bytes)?)
}
