//! Binary encoding conventions shared by Nexus Cache key types.
//!
//! Values are written to [`prost::bytes::BufMut`] sinks and read back from
//! [`prost::bytes::Buf`] sources. Strings are self-delimiting: a protobuf
//! varint byte length followed by that many bytes of UTF-8.

mod codec;
mod config;
mod error;
mod string;

pub use crate::codec::BinaryCodec;
pub use crate::config::CodecConfig;
pub use crate::error::{DeserializationError, SerializationError};
pub use crate::string::{encoded_string_len, put_string, read_string_with};
