use crate::codec::{CodecError, Pair, Polymorph, PolymorphCodec};
use crate::identity::{TypeIdentity, TypeSignature};
use crate::shape::Shape;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

macro_rules! sequence_polymorph {
  ($($container:ident),+) => {
    $(
      impl<T: Polymorph> Polymorph for $container<T> {
        fn shape() -> Shape {
          Shape::Sequence {
            container: TypeIdentity::unbound::<Self>(),
            element: Box::new(T::shape()),
          }
        }

        fn element_signature() -> Option<TypeSignature> {
          Some(T::signature())
        }

        fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
          codec.write_sequence::<Self, T>(self.iter())
        }

        fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
          codec.read_sequence::<Self, T>(node)
        }
      }
    )+
  };
}

sequence_polymorph!(Vec, VecDeque, LinkedList);

impl<T: Polymorph, const N: usize> Polymorph for [T; N] {
  fn shape() -> Shape {
    Shape::Array(Box::new(T::shape()))
  }

  fn element_signature() -> Option<TypeSignature> {
    Some(T::signature())
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
    codec.write_sequence::<Self, T>(self.iter())
  }

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
    codec.read_sequence::<Self, T>(node)
  }
}

impl<K, V, S> Polymorph for HashMap<K, V, S>
where
  K: Polymorph + Eq + Hash,
  V: Polymorph,
  S: BuildHasher + Default + 'static,
{
  fn shape() -> Shape {
    Shape::Map {
      container: TypeIdentity::unbound::<Self>(),
      key: Box::new(K::shape()),
      value: Box::new(V::shape()),
    }
  }

  fn element_signature() -> Option<TypeSignature> {
    Some(Pair::<K, V>::signature())
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
    codec.write_map::<Self, K, V>(self.iter())
  }

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
    codec.read_map::<Self, K, V>(node)
  }
}

impl<K: Polymorph + Ord, V: Polymorph> Polymorph for BTreeMap<K, V> {
  fn shape() -> Shape {
    Shape::Map {
      container: TypeIdentity::unbound::<Self>(),
      key: Box::new(K::shape()),
      value: Box::new(V::shape()),
    }
  }

  fn element_signature() -> Option<TypeSignature> {
    Some(Pair::<K, V>::signature())
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
    codec.write_map::<Self, K, V>(self.iter())
  }

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
    codec.read_map::<Self, K, V>(node)
  }
}
