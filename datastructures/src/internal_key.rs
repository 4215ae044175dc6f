use std::fmt;

use nexus_cache_serialization_rs::{
  encoded_string_len, put_string, read_string_with, BinaryCodec, CodecConfig, DeserializationError,
};
use prost::bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;
use tracing::trace;

use crate::affinity::{AffinityKeyMapped, CacheInternalKey};
use crate::deferred::DeferredInternalKey;
use crate::error::KeyError;
use crate::hash::stable_hash;


const EMPTY_NAME: &str = "internal key name must not be empty";

/// Key under which a cache-backed data structure is stored.
///
/// Equality, `Hash` and [`hash_code`](InternalKey::hash_code) depend on the
/// name only, and the name is the affinity field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InternalKey {
  name: String,
}

assert_impl_all!(InternalKey: Send, Sync, Clone, Eq, std::hash::Hash);

impl InternalKey {
  /// Creates a key for the data structure called `name`.
  ///
  /// Fails with [`KeyError::InvalidArgument`] when `name` is empty.
  pub fn new(name: impl Into<String>) -> Result<Self, KeyError> {
    let name = name.into();
    if name.is_empty() {
      return Err(KeyError::InvalidArgument(EMPTY_NAME));
    }
    Ok(Self { name })
  }

  /// Starts a key whose name is supplied later by a single decode.
  pub fn deferred() -> DeferredInternalKey {
    DeferredInternalKey::new()
  }

  /// Logical name of the data structure. This is also the affinity field:
  /// partitioners place the key from this value alone.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Hash of the name that stays the same across processes, for
  /// hash-partitioned data that is persisted or replicated.
  pub fn hash_code(&self) -> u64 {
    stable_hash(self.name.as_bytes())
  }

  /// Consumes the key and returns its name.
  pub fn into_name(self) -> String {
    self.name
  }
}

impl AffinityKeyMapped for InternalKey {
  fn affinity_key(&self) -> &str {
    &self.name
  }
}

impl CacheInternalKey for InternalKey {
  fn name(&self) -> &str {
    &self.name
  }
}

impl BinaryCodec for InternalKey {
  type Error = KeyError;

  fn encoded_len(&self) -> usize {
    encoded_string_len(&self.name)
  }

  fn encode_raw(&self, sink: &mut impl BufMut) {
    put_string(sink, &self.name);
  }

  fn decode_with(source: &mut impl Buf, config: &CodecConfig) -> Result<Self, Self::Error> {
    let name = read_string_with(source, config)?;
    if name.is_empty() {
      return Err(DeserializationError::invalid(EMPTY_NAME).into());
    }
    trace!(name = %name, "decoded internal key");
    Ok(Self { name })
  }
}

impl fmt::Display for InternalKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "InternalKey [name={}]", self.name)
  }
}

impl TryFrom<String> for InternalKey {
  type Error = KeyError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    Self::new(name)
  }
}

impl TryFrom<&str> for InternalKey {
  type Error = KeyError;

  fn try_from(name: &str) -> Result<Self, Self::Error> {
    Self::new(name)
  }
}

impl TryFrom<Option<String>> for InternalKey {
  type Error = KeyError;

  fn try_from(name: Option<String>) -> Result<Self, Self::Error> {
    name
      .ok_or(KeyError::InvalidArgument("internal key name is required"))
      .and_then(Self::new)
  }
}

impl TryFrom<Option<&str>> for InternalKey {
  type Error = KeyError;

  fn try_from(name: Option<&str>) -> Result<Self, Self::Error> {
    Self::try_from(name.map(str::to_owned))
  }
}

impl From<InternalKey> for String {
  fn from(key: InternalKey) -> Self {
    key.name
  }
}
