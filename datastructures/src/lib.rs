//! Keys addressing cache-backed data structures (queues, sets, atomics) that
//! are stored as ordinary entries of a key-value cache.
//!
//! [`InternalKey`] names one data-structure instance. Its name is the only
//! input to equality, hashing and affinity mapping, and its binary form is a
//! single length-prefixed string (see [`BinaryCodec`]).

mod affinity;
mod deferred;
mod error;
mod hash;
mod internal_key;

pub use crate::affinity::{AffinityKeyMapped, CacheInternalKey};
pub use crate::deferred::{DeferredInternalKey, KeyState};
pub use crate::error::KeyError;
pub use crate::internal_key::InternalKey;
pub use nexus_cache_serialization_rs::{BinaryCodec, CodecConfig, DeserializationError, SerializationError};
