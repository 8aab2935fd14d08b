//! Value codecs
//!
//! Providers store bytes; a codec decides how a typed value becomes those
//! bytes and back. The typed cache uses [`JsonCodec`] unless told otherwise.
//!
//! | Codec | Values | Stored as |
//! |-------|--------|-----------|
//! | [`JsonCodec`] | any serde type | JSON |
//! | [`BytesCodec`] | `Vec<u8>` | raw bytes |
//! | [`TextCodec`] | `String` | UTF-8 |
//! | [`PlainCodec`] | integers, floats, `bool` | decimal text, bool as `1`/`0` |
//! | [`BincodeCodec`] | any serde type | bincode |

use cachetic_domain::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Conversion between a typed value and its cached bytes
pub trait Codec<T>: Send + Sync {
    /// Short name used in error messages
    fn name(&self) -> &'static str;

    /// Turn a value into bytes
    fn encode(&self, value: &T) -> Result<Vec<u8>>;

    /// Rebuild a value from bytes
    fn decode(&self, bytes: &[u8]) -> Result<T>;
}

/// JSON via serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value)
            .map_err(|e| Error::codec_with_source("json", format!("Failed to serialize: {e}"), e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::codec_with_source("json", format!("Failed to deserialize: {e}"), e))
    }
}

/// Raw bytes, stored unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesCodec;

impl Codec<Vec<u8>> for BytesCodec {
    fn name(&self) -> &'static str {
        "bytes"
    }

    fn encode(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(value.clone())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

/// UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl Codec<String> for TextCodec {
    fn name(&self) -> &'static str {
        "text"
    }

    fn encode(&self, value: &String) -> Result<Vec<u8>> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::codec_with_source("text", "Cached value is not valid UTF-8", e))
    }
}

/// Scalar that has a plain decimal text form
pub trait PlainValue: Sized {
    /// Text stored in the cache
    fn to_plain(&self) -> String;

    /// Parse the stored text
    fn from_plain(text: &str) -> std::result::Result<Self, String>;
}

macro_rules! impl_plain_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PlainValue for $ty {
                fn to_plain(&self) -> String {
                    self.to_string()
                }

                fn from_plain(text: &str) -> std::result::Result<Self, String> {
                    text.trim().parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_plain_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl PlainValue for bool {
    fn to_plain(&self) -> String {
        if *self { "1" } else { "0" }.to_string()
    }

    // Anything other than "0" reads as true
    fn from_plain(text: &str) -> std::result::Result<Self, String> {
        Ok(text.trim() != "0")
    }
}

/// Numbers and booleans as decimal text
///
/// Integers and floats use their `Display` form. Booleans are written as
/// `1` or `0`; on read every value except `0` is true.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCodec;

impl<T: PlainValue> Codec<T> for PlainCodec {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        Ok(value.to_plain().into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::codec_with_source("plain", "Cached value is not valid UTF-8", e))?;
        T::from_plain(text)
            .map_err(|e| Error::codec("plain", format!("Cannot parse '{text}': {e}")))
    }
}

/// Compact binary form via bincode
///
/// For Rust-only values that have no meaningful JSON shape. The format is
/// not self-describing, so readers must use the same type as the writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl<T> Codec<T> for BincodeCodec
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        "bincode"
    }

    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        bincode::serialize(value).map_err(|e| {
            Error::codec_with_source("bincode", format!("Failed to serialize: {e}"), e)
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        bincode::deserialize(bytes).map_err(|e| {
            Error::codec_with_source("bincode", format!("Failed to deserialize: {e}"), e)
        })
    }
}
