//! Encode/decode hooks invoked by the cache's serialization layer.

use prost::bytes::{Buf, BufMut};

use crate::config::CodecConfig;
use crate::error::{DeserializationError, SerializationError};

/// A value with a self-delimiting binary form.
///
/// Implementors describe their layout through [`encoded_len`](BinaryCodec::encoded_len),
/// [`encode_raw`](BinaryCodec::encode_raw) and [`decode_with`](BinaryCodec::decode_with);
/// the capacity check and the convenience entry points are provided.
pub trait BinaryCodec: Sized {
  /// Error returned by decoding. Type-level validation failures are reported
  /// through it alongside format errors.
  type Error: From<DeserializationError>;

  /// Exact number of bytes [`encode_raw`](BinaryCodec::encode_raw) writes.
  fn encoded_len(&self) -> usize;

  /// Writes the encoded form. The sink must have at least
  /// [`encoded_len`](BinaryCodec::encoded_len) bytes of remaining capacity.
  fn encode_raw(&self, sink: &mut impl BufMut);

  /// Reads exactly one value from `source`.
  fn decode_with(source: &mut impl Buf, config: &CodecConfig) -> Result<Self, Self::Error>;

  /// Appends the encoded form to `sink`, or fails without writing.
  fn encode(&self, sink: &mut impl BufMut) -> Result<(), SerializationError> {
    let required = self.encoded_len();
    let remaining = sink.remaining_mut();
    if required > remaining {
      return Err(SerializationError::InsufficientCapacity { required, remaining });
    }
    self.encode_raw(sink);
    Ok(())
  }

  fn encode_to_vec(&self) -> Vec<u8> {
    let mut buf = Vec::with_capacity(self.encoded_len());
    self.encode_raw(&mut buf);
    buf
  }

  fn decode(source: &mut impl Buf) -> Result<Self, Self::Error> {
    Self::decode_with(source, &CodecConfig::default())
  }
}
