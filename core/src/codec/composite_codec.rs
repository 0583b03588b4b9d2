use crate::codec::container_codec::json_kind;
use crate::codec::{CodecError, Polymorph, PolymorphCodec};
use serde_json::Value;

impl PolymorphCodec {
  /// Writes one slot of a composite record. A denied abstract slot is written as null.
  pub fn write_slot<S: Polymorph>(&self, slot: &S) -> Result<Value, CodecError> {
    if self.slot_denied::<S>() {
      return Ok(Value::Null);
    }
    Ok(slot.encode(self)?.unwrap_or(Value::Null))
  }

  /// Reads one slot of a composite record. A denied abstract slot reads as null.
  pub fn read_slot<S: Polymorph>(&self, node: &Value) -> Result<Option<S>, CodecError> {
    if self.slot_denied::<S>() {
      return S::decode(self, &Value::Null);
    }
    S::decode(self, node)
  }

  pub fn write_pair<K: Polymorph, V: Polymorph>(&self, key: &K, value: &V) -> Result<Value, CodecError> {
    Ok(Value::Array(vec![self.write_slot(key)?, self.write_slot(value)?]))
  }

  pub fn read_pair<K: Polymorph, V: Polymorph>(&self, node: &Value) -> Result<Option<(K, V)>, CodecError> {
    let Some(slots) = self.record_slots(node, 2)? else {
      return Ok(None);
    };
    let Some(key) = self.read_slot::<K>(&slots[0])? else {
      return Ok(None);
    };
    let Some(value) = self.read_slot::<V>(&slots[1])? else {
      return Ok(None);
    };
    Ok(Some((key, value)))
  }

  /// Slots of a composite record of the given arity, or `None` when the record is absent.
  pub fn record_slots<'a>(&self, node: &'a Value, arity: usize) -> Result<Option<&'a [Value]>, CodecError> {
    match node {
      Value::Null => Ok(None),
      Value::Array(slots) if slots.len() == arity => Ok(Some(slots.as_slice())),
      Value::Array(slots) => self.recover(CodecError::PopulationFailure(format!(
        "expected a record of {} slots, found {}",
        arity,
        slots.len()
      ))),
      other => self.recover(CodecError::PopulationFailure(format!(
        "expected a record of {} slots, found {}",
        arity,
        json_kind(other)
      ))),
    }
  }

  fn slot_denied<S: Polymorph>(&self) -> bool {
    if self.policy().is_unrestricted() {
      return false;
    }
    S::shape()
      .abstract_identity()
      .is_some_and(|identity| !self.policy().allowed(identity))
  }
}
