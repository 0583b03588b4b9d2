use crate::codec::container_codec::json_kind;
use crate::codec::{CodecError, Polymorph, PolymorphCodec};
use crate::shape::{LeafKind, Shape};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

impl PolymorphCodec {
  /// Writes a leaf through the document model as is, without a type tag.
  pub fn write_leaf<T: Serialize>(&self, value: &T) -> Result<Value, CodecError> {
    Ok(serde_json::to_value(value)?)
  }

  /// Reads a leaf; null is absent and a node of the wrong kind is a population failure.
  pub fn read_leaf<T: DeserializeOwned>(&self, node: &Value) -> Result<Option<T>, CodecError> {
    if node.is_null() {
      return Ok(None);
    }
    match serde_json::from_value::<T>(node.clone()) {
      Ok(value) => Ok(Some(value)),
      Err(err) => self.recover(CodecError::PopulationFailure(format!(
        "cannot read {} from {}: {}",
        std::any::type_name::<T>(),
        json_kind(node),
        err
      ))),
    }
  }
}

macro_rules! leaf_polymorph {
  ($kind:ident => $($ty:ty),+ $(,)?) => {
    $(
      impl Polymorph for $ty {
        fn shape() -> Shape {
          Shape::Leaf(LeafKind::$kind)
        }

        fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
          codec.write_leaf(self).map(Some)
        }

        fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
          codec.read_leaf(node)
        }
      }
    )+
  };
}

leaf_polymorph!(Bool => bool);
leaf_polymorph!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
leaf_polymorph!(Float => f32, f64);
leaf_polymorph!(Char => char);
leaf_polymorph!(Text => String);
leaf_polymorph!(DateTime => chrono::NaiveDateTime, chrono::NaiveDate, chrono::DateTime<chrono::Utc>);
leaf_polymorph!(DateTimeOffset => chrono::DateTime<chrono::FixedOffset>);
leaf_polymorph!(Duration => std::time::Duration);
leaf_polymorph!(Decimal => rust_decimal::Decimal);
leaf_polymorph!(Uuid => uuid::Uuid);
leaf_polymorph!(Uri => url::Url);
