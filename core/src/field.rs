//! `#[serde(with = "polymorph_json_core_rs::field")]` adapter.
//!
//! Routes a field through the codec active on the current thread, so that
//! containers of trait objects nested inside ordinary structs keep their
//! headers and type tags.
//!
//! A denied or null container read into a non-`Option` field fails with
//! [`CodecError::AbsentField`], in lenient mode too. Use [`or_default`] to read
//! it as `T::default()` instead.

use crate::codec::{CodecError, CodecScope, Polymorph, PolymorphCodec};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

fn active_codec() -> Result<PolymorphCodec, CodecError> {
  CodecScope::current().ok_or(CodecError::MissingScope)
}

fn fail<E: serde::de::Error>(err: CodecError) -> E {
  let message = err.to_string();
  CodecScope::stash(err);
  E::custom(message)
}

fn decode_field<'de, T: Polymorph, D: Deserializer<'de>>(deserializer: D) -> Result<Option<T>, D::Error> {
  let node = Value::deserialize(deserializer)?;
  active_codec()
    .and_then(|codec| codec.decode::<T>(&node))
    .map_err(fail)
}

pub fn serialize<T: Polymorph, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
  let encoded = active_codec().and_then(|codec| codec.encode(value));
  match encoded {
    Ok(node) => node.unwrap_or(Value::Null).serialize(serializer),
    Err(err) => {
      let message = err.to_string();
      CodecScope::stash(err);
      Err(S::Error::custom(message))
    }
  }
}

pub fn deserialize<'de, T: Polymorph, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
  match decode_field::<T, D>(deserializer)? {
    Some(value) => Ok(value),
    None => Err(fail(CodecError::AbsentField(std::any::type_name::<T>().to_string()))),
  }
}

/// Same wire form as [`field`](super); an absent value reads as `T::default()`.
pub mod or_default {
  use crate::codec::Polymorph;
  use serde::{Deserializer, Serializer};

  pub fn serialize<T: Polymorph, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    super::serialize(value, serializer)
  }

  pub fn deserialize<'de, T: Polymorph + Default, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let decoded = super::decode_field::<T, D>(deserializer)?;
    if decoded.is_none() {
      tracing::debug!(field_type = std::any::type_name::<T>(), "absent field, using default");
    }
    Ok(decoded.unwrap_or_default())
  }
}
