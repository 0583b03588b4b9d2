use crate::codec::{CodecError, CodecScope, Config, ConfigOption, Polymorph};
use crate::policy::InclusionPolicy;
use crate::registry::{Constructible, RegistryError, TypeRegistry};
use crate::shape::{Classification, ContainerShapeResolver};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug)]
struct CodecInner {
  config: Config,
  registry: Arc<TypeRegistry>,
  resolver: ContainerShapeResolver,
  policy: InclusionPolicy,
}

/// Polymorphic container codec. Cheap to clone; clones share caches and registry.
#[derive(Debug, Clone)]
pub struct PolymorphCodec {
  inner: Arc<CodecInner>,
}

impl PolymorphCodec {
  pub fn new(config: Config) -> Self {
    let registry = Arc::new(TypeRegistry::new(config.cache_enabled));
    Self::with_registry(config, registry)
  }

  pub fn from_options(options: impl IntoIterator<Item = ConfigOption>) -> Self {
    Self::new(Config::from(options))
  }

  /// Builds a codec on top of a registry shared with other codecs.
  pub fn with_registry(config: Config, registry: Arc<TypeRegistry>) -> Self {
    let policy = InclusionPolicy::from_config(&config);
    let resolver = ContainerShapeResolver::new(config.cache_enabled);
    Self {
      inner: Arc::new(CodecInner {
        config,
        registry,
        resolver,
        policy,
      }),
    }
  }

  pub fn config(&self) -> &Config {
    &self.inner.config
  }

  pub fn registry(&self) -> &Arc<TypeRegistry> {
    &self.inner.registry
  }

  pub fn policy(&self) -> &InclusionPolicy {
    &self.inner.policy
  }

  pub fn register<T: Constructible>(&self) -> Result<(), RegistryError> {
    self.inner.registry.register::<T>()
  }

  pub fn to_value<T: Polymorph>(&self, value: &T) -> Result<Value, CodecError> {
    let encoded = self.scoped(|| self.encode(value))?;
    Ok(encoded.unwrap_or(Value::Null))
  }

  pub fn from_value<T: Polymorph>(&self, node: &Value) -> Result<Option<T>, CodecError> {
    self.scoped(|| self.decode::<T>(node))
  }

  pub fn to_string<T: Polymorph>(&self, value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&self.to_value(value)?)?)
  }

  pub fn to_string_pretty<T: Polymorph>(&self, value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(&self.to_value(value)?)?)
  }

  pub fn from_str<T: Polymorph>(&self, text: &str) -> Result<Option<T>, CodecError> {
    let node: Value = serde_json::from_str(text)?;
    self.from_value(&node)
  }

  /// Encodes without entering a scope; for use from inside an active top-level call.
  pub fn encode<T: Polymorph>(&self, value: &T) -> Result<Option<Value>, CodecError> {
    value.encode(self)
  }

  pub fn decode<T: Polymorph>(&self, node: &Value) -> Result<Option<T>, CodecError> {
    T::decode(self, node)
  }

  /// Classification of `T`, declaring its element identity on first sight.
  pub fn classify<T: Polymorph>(&self) -> Arc<Classification> {
    let (classification, computed) = self.inner.resolver.lookup::<T>();
    if computed && classification.is_polymorphic_container() {
      if let Some(element) = classification.element() {
        self.inner.registry.declare(element);
      }
    }
    classification
  }

  pub fn cached_classifications(&self) -> usize {
    self.inner.resolver.len()
  }

  pub fn clear_caches(&self) {
    self.inner.resolver.clear();
    self.inner.registry.clear_cache();
  }

  /// Lenient mode turns a recoverable error into an absent value.
  pub(crate) fn recover<T>(&self, err: CodecError) -> Result<Option<T>, CodecError> {
    if self.inner.config.skip_unresolved_types && err.is_recoverable() {
      tracing::warn!(error = %err, "skipping value");
      return Ok(None);
    }
    Err(err)
  }

  fn scoped<R>(&self, f: impl FnOnce() -> Result<R, CodecError>) -> Result<R, CodecError> {
    let scope = CodecScope::enter(self);
    let result = f();
    match (result, scope.take_error()) {
      (Err(_), Some(first)) => Err(first),
      (result, _) => result,
    }
  }
}

static_assertions::assert_impl_all!(PolymorphCodec: Send, Sync, Clone);
