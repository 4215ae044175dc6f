//! Construct-empty-then-decode path for [`InternalKey`].
//!
//! Serialization layers that allocate a value before its bytes are available
//! start from a [`DeferredInternalKey`]. It moves through
//!
//! ```text
//! Uninitialized --decode ok--> Ready
//!       |
//!       +------decode err--> Discarded
//! ```
//!
//! exactly once. Only `decode` is accepted while `Uninitialized`; only the
//! read-only operations are accepted once `Ready`; nothing is accepted once
//! `Discarded`.

use std::fmt;

use nexus_cache_serialization_rs::{BinaryCodec, CodecConfig};
use prost::bytes::Buf;
use tracing::debug;

use crate::error::KeyError;
use crate::internal_key::InternalKey;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
  Uninitialized,
  Ready,
  Discarded,
}

impl fmt::Display for KeyState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      KeyState::Uninitialized => "uninitialized",
      KeyState::Ready => "ready",
      KeyState::Discarded => "discarded",
    };
    f.write_str(label)
  }
}

#[derive(Debug, Default)]
enum Slot {
  #[default]
  Uninitialized,
  Ready(InternalKey),
  Discarded,
}

/// An [`InternalKey`] waiting for its name to be decoded.
///
/// Not a key itself: it has no `PartialEq` or `Hash`, and [`into_key`](Self::into_key)
/// is the only way to obtain a value that can be stored or shared. Every
/// accessor other than [`state`](Self::state) fails with
/// [`KeyError::InvalidState`] unless the key is `Ready`.
#[derive(Debug, Default)]
pub struct DeferredInternalKey {
  slot: Slot,
}

impl DeferredInternalKey {
  /// Creates an `Uninitialized` key.
  pub fn new() -> Self {
    Self::default()
  }

  /// Current state. Valid in every state.
  pub fn state(&self) -> KeyState {
    match self.slot {
      Slot::Uninitialized => KeyState::Uninitialized,
      Slot::Ready(_) => KeyState::Ready,
      Slot::Discarded => KeyState::Discarded,
    }
  }

  /// Populates the name from `source` using the default [`CodecConfig`].
  pub fn decode(&mut self, source: &mut impl Buf) -> Result<&InternalKey, KeyError> {
    self.decode_with(source, &CodecConfig::default())
  }

  /// Populates the name from `source`.
  ///
  /// Outside `Uninitialized` this fails with [`KeyError::InvalidState`] and
  /// reads nothing. A decode failure leaves the key `Discarded`.
  pub fn decode_with(&mut self, source: &mut impl Buf, config: &CodecConfig) -> Result<&InternalKey, KeyError> {
    if !matches!(self.slot, Slot::Uninitialized) {
      return Err(self.invalid_state("decode"));
    }
    match InternalKey::decode_with(source, config) {
      Ok(key) => {
        self.slot = Slot::Ready(key);
        self.key()
      }
      Err(err) => {
        debug!(error = %err, "discarding internal key after failed decode");
        self.slot = Slot::Discarded;
        Err(err)
      }
    }
  }

  /// Borrows the decoded key.
  pub fn key(&self) -> Result<&InternalKey, KeyError> {
    self.ready("key")
  }

  /// Name of the decoded key, which is also its affinity field.
  pub fn name(&self) -> Result<&str, KeyError> {
    self.ready("name").map(InternalKey::name)
  }

  /// See [`InternalKey::hash_code`].
  pub fn hash_code(&self) -> Result<u64, KeyError> {
    self.ready("hash_code").map(InternalKey::hash_code)
  }

  /// Compares the decoded key with `other` by name.
  pub fn equals(&self, other: &InternalKey) -> Result<bool, KeyError> {
    self.ready("equals").map(|key| key == other)
  }

  /// Clones the decoded key.
  pub fn duplicate(&self) -> Result<InternalKey, KeyError> {
    self.ready("duplicate").cloned()
  }

  /// Debug description of the decoded key, as produced by its `Display`.
  pub fn describe(&self) -> Result<String, KeyError> {
    self.ready("describe").map(ToString::to_string)
  }

  /// Takes the decoded key, ready to be stored or shared.
  pub fn into_key(self) -> Result<InternalKey, KeyError> {
    let state = self.state();
    match self.slot {
      Slot::Ready(key) => Ok(key),
      _ => Err(KeyError::InvalidState {
        operation: "into_key",
        state,
      }),
    }
  }

  fn ready(&self, operation: &'static str) -> Result<&InternalKey, KeyError> {
    match &self.slot {
      Slot::Ready(key) => Ok(key),
      _ => Err(self.invalid_state(operation)),
    }
  }

  fn invalid_state(&self, operation: &'static str) -> KeyError {
    KeyError::InvalidState {
      operation,
      state: self.state(),
    }
  }
}
