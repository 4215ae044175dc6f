use nexus_cache_serialization_rs::DeserializationError;
use thiserror::Error;

use crate::deferred::KeyState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
  #[error("{operation} is not permitted while the key is {state}")]
  InvalidState { operation: &'static str, state: KeyState },
  #[error("malformed input: {0}")]
  MalformedInput(#[from] DeserializationError),
}
