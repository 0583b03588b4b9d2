use crate::codec::CodecError;
use crate::identity::TypeIdentity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ELEMENT_KEY: &str = "$element";
pub const CONTAINER_KEY: &str = "$container";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HeaderRecord {
  #[serde(rename = "$element")]
  element: String,
  #[serde(rename = "$container")]
  container: String,
}

/// First record of every polymorphic container on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
  element: TypeIdentity,
  container: TypeIdentity,
}

impl ContainerHeader {
  pub fn new(element: TypeIdentity, container: TypeIdentity) -> Self {
    Self { element, container }
  }

  pub fn element(&self) -> &TypeIdentity {
    &self.element
  }

  pub fn container(&self) -> &TypeIdentity {
    &self.container
  }

  pub fn to_value(&self) -> Value {
    let mut record = serde_json::Map::with_capacity(2);
    record.insert(ELEMENT_KEY.to_string(), Value::String(self.element.to_wire()));
    record.insert(CONTAINER_KEY.to_string(), Value::String(self.container.to_wire()));
    Value::Object(record)
  }

  pub fn from_value(node: &Value) -> Result<Self, CodecError> {
    let record = HeaderRecord::deserialize(node).map_err(|err| CodecError::MalformedHeader(err.to_string()))?;
    Ok(Self {
      element: TypeIdentity::parse(&record.element)?,
      container: TypeIdentity::parse(&record.container)?,
    })
  }
}
