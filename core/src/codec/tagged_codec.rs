use crate::codec::container_codec::json_kind;
use crate::codec::{CodecError, PolymorphCodec};
use crate::identity::TypeIdentity;
use crate::registry::{AbstractType, Constructible, Polymorphic};
use serde_json::Value;

/// Reserved member naming the runtime type of a tagged element.
pub const TYPE_KEY: &str = "$type";

impl PolymorphCodec {
  /// Writes `value` as an object carrying its runtime type identity.
  pub fn write_tagged<A: AbstractType + ?Sized>(&self, value: &A) -> Result<Value, CodecError> {
    let identity = value.runtime_identity();
    match value.document()? {
      Value::Object(mut fields) => {
        fields.insert(TYPE_KEY.to_string(), Value::String(identity.to_wire()));
        Ok(Value::Object(fields))
      }
      other => Err(CodecError::ShapeMismatch(format!(
        "{} must be written as an object, found {}",
        identity,
        json_kind(&other)
      ))),
    }
  }

  /// Resolves the type tag of `node`, constructs that type and populates it.
  pub fn read_tagged<A: AbstractType + ?Sized>(&self, node: &Value) -> Result<Option<Box<A>>, CodecError> {
    let fields = match node {
      Value::Null => return Ok(None),
      Value::Object(fields) => fields,
      other => {
        return self.recover(CodecError::PopulationFailure(format!(
          "tagged element must be an object, found {}",
          json_kind(other)
        )))
      }
    };
    let identity = match fields.get(TYPE_KEY) {
      Some(Value::String(wire)) => TypeIdentity::parse(wire),
      Some(other) => Err(CodecError::MalformedIdentity(other.to_string())),
      None => Err(CodecError::MalformedIdentity(format!("missing `{}`", TYPE_KEY))),
    };
    let descriptor = match identity.and_then(|identity| self.registry().resolve(&identity)) {
      Ok(descriptor) => descriptor,
      Err(err) => return self.recover(err),
    };
    let mut instance = match descriptor.construct() {
      Ok(instance) => instance,
      Err(err) => return self.recover(err),
    };
    if let Err(err) = instance.populate(node) {
      self.keep_default(descriptor.identity(), err)?;
    }
    match descriptor.cast::<A>(instance) {
      Ok(value) => Ok(Some(value)),
      Err(err) => self.recover(err),
    }
  }

  /// Writes a value whose declared type is concrete; no tag is attached.
  pub fn write_concrete<T: Polymorphic>(&self, value: &T) -> Result<Value, CodecError> {
    value.to_document()
  }

  pub fn read_concrete<T: Constructible>(&self, node: &Value) -> Result<Option<T>, CodecError> {
    if node.is_null() {
      return Ok(None);
    }
    let mut instance = T::default();
    if let Err(err) = instance.populate(node) {
      self.keep_default(&T::static_identity(), err)?;
    }
    Ok(Some(instance))
  }

  /// Lenient population failures keep the default-constructed instance.
  fn keep_default(&self, identity: &TypeIdentity, err: CodecError) -> Result<(), CodecError> {
    if self.config().skip_unresolved_types && err.is_recoverable() {
      tracing::warn!(identity = %identity, error = %err, "population failed, keeping defaults");
      return Ok(());
    }
    Err(err)
  }
}
