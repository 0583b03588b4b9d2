use crate::codec::{CodecError, PolymorphCodec};
use crate::identity::TypeSignature;
use crate::registry::AbstractType;
use crate::shape::Shape;
use serde_json::Value;
use std::any::TypeId;

/// Per-static-type hooks the codec dispatches through.
///
/// `encode` returns `None` when the value is omitted (a denied container);
/// `decode` returns `None` when the node resolves to an absent value.
pub trait Polymorph: Sized + 'static {
  fn shape() -> Shape;

  fn signature() -> TypeSignature {
    TypeSignature::of::<Self>()
  }

  /// Signature of the element type for containers, `None` otherwise.
  fn element_signature() -> Option<TypeSignature> {
    None
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError>;

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError>;
}

impl<T: Polymorph> Polymorph for Option<T> {
  fn shape() -> Shape {
    Shape::Nullable(Box::new(T::shape()))
  }

  fn signature() -> TypeSignature {
    T::signature()
  }

  fn element_signature() -> Option<TypeSignature> {
    T::element_signature()
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
    match self {
      Some(value) => value.encode(codec),
      None => Ok(Some(Value::Null)),
    }
  }

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
    if node.is_null() {
      return Ok(Some(None));
    }
    Ok(Some(T::decode(codec, node)?))
  }
}

impl<A: AbstractType + ?Sized> Polymorph for Box<A> {
  fn shape() -> Shape {
    Shape::Abstract(A::identity())
  }

  fn signature() -> TypeSignature {
    TypeSignature::new(A::identity(), TypeId::of::<A>())
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
    codec.write_tagged::<A>(self.as_ref()).map(Some)
  }

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
    codec.read_tagged::<A>(node)
  }
}
