use crate::identity::TypeIdentity;
use crate::registry::{TypeDescriptor, TypeModule};
use dashmap::DashMap;
use polymorph_json_utils_rs::collections::DashMapExtension;
use std::sync::Arc;

/// Memoized module loads and type lookups. Only successful resolutions are kept.
#[derive(Debug, Default)]
pub struct ResolutionCache {
  modules: DashMap<String, Arc<TypeModule>>,
  types: DashMap<(String, String), Arc<TypeDescriptor>>,
}

impl ResolutionCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn module(&self, name: &str) -> Option<Arc<TypeModule>> {
    self.modules.get(name).map(|entry| entry.value().clone())
  }

  /// Publishes `module`; when another thread got there first its module wins.
  pub fn store_module(&self, module: Arc<TypeModule>) -> Arc<TypeModule> {
    self.modules.load_or_store(module.name().to_string(), module).0
  }

  pub fn descriptor(&self, identity: &TypeIdentity) -> Option<Arc<TypeDescriptor>> {
    self
      .types
      .get(&(identity.module().to_string(), identity.type_name().to_string()))
      .map(|entry| entry.value().clone())
  }

  pub fn store_descriptor(&self, identity: &TypeIdentity, descriptor: Arc<TypeDescriptor>) -> Arc<TypeDescriptor> {
    let key = (identity.module().to_string(), identity.type_name().to_string());
    self.types.load_or_store(key, descriptor).0
  }

  /// Drops everything cached for `module`.
  pub fn invalidate_module(&self, module: &str) {
    self.modules.remove(module);
    self.types.retain(|(cached_module, _), _| cached_module != module);
  }

  pub fn clear(&self) {
    self.modules.clear();
    self.types.clear();
  }

  pub fn module_count(&self) -> usize {
    self.modules.len()
  }

  pub fn type_count(&self) -> usize {
    self.types.len()
  }
}
