use crate::registry::TypeDescriptor;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Snapshot of every type registered under one module name.
#[derive(Debug)]
pub struct TypeModule {
  name: String,
  types: BTreeMap<String, Arc<TypeDescriptor>>,
}

impl TypeModule {
  pub fn new(name: impl Into<String>, types: BTreeMap<String, Arc<TypeDescriptor>>) -> Self {
    Self {
      name: name.into(),
      types,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn get(&self, type_name: &str) -> Option<Arc<TypeDescriptor>> {
    self.types.get(type_name).cloned()
  }

  pub fn type_names(&self) -> impl Iterator<Item = &str> {
    self.types.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}
