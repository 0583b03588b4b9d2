//! Bridge between `Serialize`/`Deserialize` types and the document tree.

use crate::codec::{CodecError, CodecScope, TYPE_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Document node of `value`. Nested codec errors surface intact.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> Result<Value, CodecError> {
  serde_json::to_value(value).map_err(|err| CodecScope::take_stashed().unwrap_or_else(|| CodecError::from(err)))
}

/// Overlays the members of `node` onto `target`.
///
/// Members missing from `node` keep their current values and the reserved type
/// tag is ignored. On failure `target` is left untouched.
pub fn populate<T: Serialize + DeserializeOwned>(target: &mut T, node: &Value) -> Result<(), CodecError> {
  let Value::Object(source) = node else {
    return Err(CodecError::PopulationFailure("expected an object".to_string()));
  };
  let mut merged = match to_document(target)? {
    Value::Object(fields) => fields,
    _ => serde_json::Map::new(),
  };
  for (name, value) in source {
    if name != TYPE_KEY {
      merged.insert(name.clone(), value.clone());
    }
  }
  let populated = T::deserialize(Value::Object(merged))
    .map_err(|err| CodecScope::take_stashed().unwrap_or_else(|| CodecError::PopulationFailure(err.to_string())))?;
  *target = populated;
  Ok(())
}
