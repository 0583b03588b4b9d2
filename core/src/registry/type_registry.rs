use crate::codec::{CodecError, Polymorph};
use crate::identity::{TypeIdentity, TypeSignature};
use crate::registry::{
  AbstractType, Constructible, ContainerArity, RegistryError, ResolutionCache, TypeDescriptor, TypeKind, TypeModule,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide catalogue of identities the codec can resolve.
///
/// Resolution goes module first, then type name. Both steps are memoized in a
/// [`ResolutionCache`] unless the registry was built with caching disabled.
///
/// Module scans and the cache stores that follow them run under a shared
/// `registration` guard; inserts and their invalidation run under the exclusive
/// one. A snapshot taken before an insert is therefore never published after it.
#[derive(Debug)]
pub struct TypeRegistry {
  entries: DashMap<TypeIdentity, Arc<TypeDescriptor>>,
  registration: RwLock<()>,
  cache: ResolutionCache,
  cache_enabled: bool,
  module_loads: AtomicUsize,
}

impl TypeRegistry {
  pub fn new(cache_enabled: bool) -> Self {
    let registry = Self {
      entries: DashMap::new(),
      registration: RwLock::new(()),
      cache: ResolutionCache::new(),
      cache_enabled,
      module_loads: AtomicUsize::new(0),
    };
    registry.register_builtin_containers();
    registry
  }

  fn register_builtin_containers(&self) {
    let builtins = [
      (TypeIdentity::array(), ContainerArity::Array),
      (TypeIdentity::unbound::<Vec<()>>(), ContainerArity::Sequence),
      (TypeIdentity::unbound::<VecDeque<()>>(), ContainerArity::Sequence),
      (TypeIdentity::unbound::<LinkedList<()>>(), ContainerArity::Sequence),
      (TypeIdentity::unbound::<HashMap<(), ()>>(), ContainerArity::Map),
      (TypeIdentity::unbound::<BTreeMap<(), ()>>(), ContainerArity::Map),
    ];
    for (identity, arity) in builtins {
      self
        .entries
        .insert(identity.clone(), Arc::new(TypeDescriptor::container(identity, arity)));
    }
  }

  pub fn cache_enabled(&self) -> bool {
    self.cache_enabled
  }

  /// Registers a concrete type. Registering the same type twice is a no-op.
  pub fn register<T: Constructible>(&self) -> Result<(), RegistryError> {
    self.insert(TypeDescriptor::constructible::<T>())
  }

  pub fn register_abstract<A: AbstractType + ?Sized>(&self) -> Result<(), RegistryError> {
    self.insert(TypeDescriptor::abstract_type::<A>())
  }

  /// Registers a user-defined generic container family under `identity`.
  pub fn register_container(&self, identity: TypeIdentity, arity: ContainerArity) -> Result<(), RegistryError> {
    self.insert(TypeDescriptor::container(identity, arity))
  }

  /// Makes an element type seen by the codec resolvable by its identity.
  pub(crate) fn declare(&self, signature: &TypeSignature) {
    if let Err(err) = self.insert(TypeDescriptor::declared(signature)) {
      tracing::warn!(identity = %signature.identity(), error = %err, "element identity collides with a registered type");
    }
  }

  fn scanning(&self) -> RwLockReadGuard<'_, ()> {
    self.registration.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn registering(&self) -> RwLockWriteGuard<'_, ()> {
    self.registration.write().unwrap_or_else(PoisonError::into_inner)
  }

  fn insert(&self, descriptor: TypeDescriptor) -> Result<(), RegistryError> {
    let _guard = self.registering();
    let identity = descriptor.identity().clone();
    match self.entries.entry(identity.clone()) {
      Entry::Occupied(mut occupied) => {
        let existing = occupied.get();
        if existing.type_id() != descriptor.type_id() {
          return Err(RegistryError::DuplicateIdentity(identity));
        }
        let upgrade = matches!(existing.kind(), TypeKind::Declared) && !matches!(descriptor.kind(), TypeKind::Declared);
        if !upgrade {
          return Ok(());
        }
        occupied.insert(Arc::new(descriptor));
      }
      Entry::Vacant(vacant) => {
        vacant.insert(Arc::new(descriptor));
      }
    }
    tracing::debug!(identity = %identity, "registered type");
    self.cache.invalidate_module(identity.module());
    Ok(())
  }

  pub fn identity_of<T: Polymorph>() -> TypeIdentity {
    T::signature().identity().clone()
  }

  pub fn contains(&self, identity: &TypeIdentity) -> bool {
    self.entries.contains_key(identity)
  }

  /// Resolves a wire identity to its descriptor.
  pub fn resolve(&self, identity: &TypeIdentity) -> Result<Arc<TypeDescriptor>, CodecError> {
    if self.cache_enabled {
      if let Some(descriptor) = self.cache.descriptor(identity) {
        tracing::trace!(identity = %identity, "type cache hit");
        return Ok(descriptor);
      }
    }
    let _guard = self.scanning();
    let module = self.load_module_scanning(identity.module())?;
    let descriptor = module
      .get(identity.type_name())
      .ok_or_else(|| CodecError::UnresolvedType {
        module: identity.module().to_string(),
        type_name: identity.type_name().to_string(),
      })?;
    if self.cache_enabled {
      return Ok(self.cache.store_descriptor(identity, descriptor));
    }
    Ok(descriptor)
  }

  /// Loads the snapshot of every type registered under `name`.
  pub fn load_module(&self, name: &str) -> Result<Arc<TypeModule>, CodecError> {
    let _guard = self.scanning();
    self.load_module_scanning(name)
  }

  /// Caller holds the `scanning` guard.
  fn load_module_scanning(&self, name: &str) -> Result<Arc<TypeModule>, CodecError> {
    if self.cache_enabled {
      if let Some(module) = self.cache.module(name) {
        return Ok(module);
      }
    }
    self.module_loads.fetch_add(1, Ordering::Relaxed);
    let types = self
      .entries
      .iter()
      .filter(|entry| entry.key().module() == name)
      .map(|entry| (entry.key().type_name().to_string(), entry.value().clone()))
      .collect::<BTreeMap<_, _>>();
    if types.is_empty() {
      tracing::debug!(module = name, "module not found");
      return Err(CodecError::UnresolvedModule(name.to_string()));
    }
    tracing::debug!(module = name, types = types.len(), "loaded module");
    let module = Arc::new(TypeModule::new(name, types));
    if self.cache_enabled {
      return Ok(self.cache.store_module(module));
    }
    Ok(module)
  }

  /// Number of module scans performed so far.
  pub fn module_loads(&self) -> usize {
    self.module_loads.load(Ordering::Relaxed)
  }

  pub fn modules(&self) -> BTreeSet<String> {
    self.entries.iter().map(|entry| entry.key().module().to_string()).collect()
  }

  pub fn clear_cache(&self) {
    self.cache.clear();
  }

  pub fn cached_modules(&self) -> usize {
    self.cache.module_count()
  }

  pub fn cached_types(&self) -> usize {
    self.cache.type_count()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for TypeRegistry {
  fn default() -> Self {
    Self::new(true)
  }
}

static_assertions::assert_impl_all!(TypeRegistry: Send, Sync);
