//! Error types used across the serialization crate.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Error returned when a value cannot be written to a sink.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializationError {
  /// The sink cannot hold the encoded value. Nothing was written.
  #[error("insufficient buffer capacity: required {required} bytes, remaining {remaining}")]
  InsufficientCapacity { required: usize, remaining: usize },
}

/// Error returned when a byte source does not hold a well-formed value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeserializationError {
  /// The source ended before the value was complete.
  #[error("truncated input: needed {needed} bytes, remaining {remaining}")]
  Truncated { needed: usize, remaining: usize },
  /// The length prefix is not a valid varint.
  #[error("invalid length prefix: {0}")]
  InvalidLengthPrefix(String),
  /// The length prefix does not fit in `usize`.
  #[error("length prefix {0} overflows usize")]
  LengthOverflow(u64),
  /// The declared length is larger than the configured limit.
  #[error("declared length {len} exceeds limit {limit}")]
  LengthLimitExceeded { len: usize, limit: usize },
  /// The string payload is not valid UTF-8.
  #[error("invalid utf-8: {0}")]
  InvalidUtf8(#[from] FromUtf8Error),
  /// The bytes decoded fine but violate the target type's invariants.
  #[error("invalid value: {0}")]
  Invalid(String),
}

impl DeserializationError {
  /// Constructs a validation error from the provided message.
  #[must_use]
  pub fn invalid(message: impl Into<String>) -> Self {
    DeserializationError::Invalid(message.into())
  }
}

impl From<prost::DecodeError> for DeserializationError {
  fn from(err: prost::DecodeError) -> Self {
    DeserializationError::InvalidLengthPrefix(err.to_string())
  }
}
