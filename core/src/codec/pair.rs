use crate::codec::{CodecError, Polymorph, PolymorphCodec};
use crate::shape::Shape;
use serde_json::Value;

/// A key/value record, written as the two-slot array `[key, value]`.
///
/// Inclusion policy applies per slot, not to the record: a slot whose abstract
/// type is denied is written as `null` while the record itself stays present
/// (`["k", null]`). Tuples behave the same way. A denied headed container, by
/// contrast, is written as `null` as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<K, V> {
  pub key: K,
  pub value: V,
}

impl<K, V> Pair<K, V> {
  pub fn new(key: K, value: V) -> Self {
    Self { key, value }
  }

  pub fn into_tuple(self) -> (K, V) {
    (self.key, self.value)
  }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
  fn from((key, value): (K, V)) -> Self {
    Self::new(key, value)
  }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
  fn from(pair: Pair<K, V>) -> Self {
    pair.into_tuple()
  }
}

impl<K: Polymorph, V: Polymorph> Polymorph for Pair<K, V> {
  fn shape() -> Shape {
    Shape::Pair {
      key: Box::new(K::shape()),
      value: Box::new(V::shape()),
    }
  }

  fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
    codec.write_pair(&self.key, &self.value).map(Some)
  }

  fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
    Ok(codec.read_pair::<K, V>(node)?.map(Pair::from))
  }
}
