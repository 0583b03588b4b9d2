use crate::codec::{CodecError, FromArray, Pair, Polymorph, PolymorphCodec};
use crate::identity::{ContainerHeader, TypeIdentity};
use crate::registry::TypeDescriptor;
use crate::shape::{Classification, ContainerShape, LeafKind, ValueClassifier};
use serde_json::{Map, Value};
use std::sync::Arc;

impl PolymorphCodec {
  /// Writes an array or sequence; headed when its elements need type tags.
  pub fn write_sequence<'a, C, E>(&self, items: impl Iterator<Item = &'a E>) -> Result<Option<Value>, CodecError>
  where
    C: Polymorph,
    E: Polymorph, {
    let classification = self.classify::<C>();
    let records = items.map(|item| Ok(item.encode(self)?.unwrap_or(Value::Null)));
    if classification.is_polymorphic_container() {
      return self.write_headed(&classification, records);
    }
    Ok(Some(Value::Array(records.collect::<Result<_, CodecError>>()?)))
  }

  /// Writes a map: headed `[key, value]` records when polymorphic, a plain object otherwise.
  pub fn write_map<'a, C, K, V>(&self, entries: impl Iterator<Item = (&'a K, &'a V)>) -> Result<Option<Value>, CodecError>
  where
    C: Polymorph,
    K: Polymorph,
    V: Polymorph, {
    let classification = self.classify::<C>();
    if classification.is_polymorphic_container() {
      let records = entries.map(|(key, value)| self.write_pair(key, value));
      return self.write_headed(&classification, records);
    }
    let mut object = Map::new();
    for (key, value) in entries {
      let name = self.key_name(key)?;
      object.insert(name, value.encode(self)?.unwrap_or(Value::Null));
    }
    Ok(Some(Value::Object(object)))
  }

  fn write_headed(
    &self,
    classification: &Classification,
    records: impl Iterator<Item = Result<Value, CodecError>>,
  ) -> Result<Option<Value>, CodecError> {
    if !self.policy().allows_all(classification.abstract_types()) {
      tracing::debug!(types = ?classification.abstract_types(), "container denied by inclusion policy");
      return Ok(None);
    }
    let header = self.header_for(classification)?;
    let mut out = vec![header.to_value()];
    for record in records {
      out.push(record?);
    }
    Ok(Some(Value::Array(out)))
  }

  fn header_for(&self, classification: &Classification) -> Result<ContainerHeader, CodecError> {
    match (classification.element(), classification.container_identity()) {
      (Some(element), Some(container)) => Ok(ContainerHeader::new(element.identity().clone(), container.clone())),
      _ => Err(CodecError::ShapeMismatch(format!(
        "{:?} is not a polymorphic container",
        classification.container_shape()
      ))),
    }
  }

  /// Leaf keys are written bare; any other key is written as its JSON text.
  fn key_name<K: Polymorph>(&self, key: &K) -> Result<String, CodecError> {
    match key.encode(self)? {
      Some(Value::String(text)) => Ok(text),
      Some(other) => Ok(other.to_string()),
      None => Ok(Value::Null.to_string()),
    }
  }

  fn parse_key<K: Polymorph>(&self, name: &str) -> Result<Option<K>, CodecError> {
    if ValueClassifier::leaf_kind(&K::shape()).is_some_and(LeafKind::is_textual) {
      return K::decode(self, &Value::String(name.to_string()));
    }
    match serde_json::from_str::<Value>(name) {
      Ok(node) => K::decode(self, &node),
      Err(err) => self.recover(CodecError::PopulationFailure(format!("unreadable map key `{}`: {}", name, err))),
    }
  }

  pub fn read_sequence<C, E>(&self, node: &Value) -> Result<Option<C>, CodecError>
  where
    C: Polymorph + FromArray<E>,
    E: Polymorph, {
    let classification = self.classify::<C>();
    if classification.is_polymorphic_container() {
      return self.read_headed::<C, E>(&classification, node);
    }
    let nodes = match node {
      Value::Null => return Ok(None),
      Value::Array(nodes) => nodes,
      other => {
        return self.recover(CodecError::PopulationFailure(format!(
          "expected an array, found {}",
          json_kind(other)
        )))
      }
    };
    let items = self.read_items::<E>(nodes)?;
    self.build::<C, E>(items)
  }

  pub fn read_map<C, K, V>(&self, node: &Value) -> Result<Option<C>, CodecError>
  where
    C: Polymorph + FromArray<Pair<K, V>>,
    K: Polymorph,
    V: Polymorph, {
    let classification = self.classify::<C>();
    if classification.is_polymorphic_container() {
      return self.read_headed::<C, Pair<K, V>>(&classification, node);
    }
    let object = match node {
      Value::Null => return Ok(None),
      Value::Object(object) => object,
      other => {
        return self.recover(CodecError::PopulationFailure(format!(
          "expected an object, found {}",
          json_kind(other)
        )))
      }
    };
    let mut entries = Vec::with_capacity(object.len());
    for (name, value) in object {
      let (Some(key), Some(value)) = (self.parse_key::<K>(name)?, V::decode(self, value)?) else {
        continue;
      };
      entries.push(Pair::new(key, value));
    }
    self.build::<C, Pair<K, V>>(entries)
  }

  fn read_headed<C, E>(&self, classification: &Classification, node: &Value) -> Result<Option<C>, CodecError>
  where
    C: Polymorph + FromArray<E>,
    E: Polymorph, {
    let nodes = match node {
      Value::Null => return Ok(None),
      Value::Array(nodes) if !nodes.is_empty() => nodes,
      Value::Array(_) => return self.recover(CodecError::MalformedHeader("container has no header".to_string())),
      other => {
        return self.recover(CodecError::MalformedHeader(format!(
          "expected a headed array, found {}",
          json_kind(other)
        )))
      }
    };
    let header = match ContainerHeader::from_value(&nodes[0]) {
      Ok(header) => header,
      Err(err) => return self.recover(err),
    };
    let element = match self.registry().resolve(header.element()) {
      Ok(element) => element,
      Err(err) => return self.recover(err),
    };
    let expected = self.header_for(classification)?;
    if classification.element().map(|signature| signature.type_id()) != element.type_id() {
      return self.recover(CodecError::ConstructionFailure(format!(
        "header element {} does not match requested element {}",
        header.element(),
        expected.element()
      )));
    }
    let container = match self.registry().resolve(header.container()) {
      Ok(container) => Some(container),
      Err(err) if self.config().skip_unresolved_types && err.is_recoverable() => {
        tracing::warn!(container = %header.container(), error = %err, "unresolved container, building requested type");
        None
      }
      Err(err) => return Err(err),
    };
    if !self.policy().allows_all(classification.abstract_types()) {
      tracing::debug!(element = %header.element(), "container denied by inclusion policy");
      return Ok(None);
    }
    let items = self.read_items::<E>(&nodes[1..])?;
    if let Some(container) = container {
      if let Err(err) = check_arity(classification, &container, expected.container()) {
        return self.recover(err);
      }
    }
    self.build::<C, E>(items)
  }

  fn read_items<E: Polymorph>(&self, nodes: &[Value]) -> Result<Vec<E>, CodecError> {
    let mut items = Vec::with_capacity(nodes.len());
    for node in nodes {
      if let Some(item) = E::decode(self, node)? {
        items.push(item);
      }
    }
    Ok(items)
  }

  fn build<C: FromArray<E>, E>(&self, items: Vec<E>) -> Result<Option<C>, CodecError> {
    match C::from_array(items) {
      Ok(container) => Ok(Some(container)),
      Err(err) => self.recover(err),
    }
  }
}

/// The header's container must take as many type arguments as the requested one.
fn check_arity(
  classification: &Classification,
  container: &Arc<TypeDescriptor>,
  requested: &TypeIdentity,
) -> Result<(), CodecError> {
  let expected = match classification.container_shape() {
    ContainerShape::Array => return Ok(()),
    ContainerShape::Sequence => 1,
    ContainerShape::Map => 2,
    other => {
      return Err(CodecError::ShapeMismatch(format!("{:?} cannot be read as a container", other)));
    }
  };
  match container.container_arity() {
    Some(arity) if arity.type_arguments() == expected => Ok(()),
    Some(arity) => Err(CodecError::ConstructionFailure(format!(
      "{} takes {} type arguments, {} takes {}",
      container.identity(),
      arity.type_arguments(),
      requested,
      expected
    ))),
    None => Err(CodecError::ConstructionFailure(format!(
      "{} is not a container type",
      container.identity()
    ))),
  }
}

pub(crate) fn json_kind(node: &Value) -> &'static str {
  match node {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
