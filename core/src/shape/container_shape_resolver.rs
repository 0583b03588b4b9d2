use crate::codec::Polymorph;
use crate::shape::Classification;
use dashmap::DashMap;
use polymorph_json_utils_rs::collections::DashMapExtension;
use std::any::TypeId;
use std::sync::Arc;

/// Classifies static types and memoizes the result per `TypeId`.
#[derive(Debug)]
pub struct ContainerShapeResolver {
  cache: DashMap<TypeId, Arc<Classification>>,
  cache_enabled: bool,
}

impl ContainerShapeResolver {
  pub fn new(cache_enabled: bool) -> Self {
    Self {
      cache: DashMap::new(),
      cache_enabled,
    }
  }

  pub fn classify<T: Polymorph>(&self) -> Arc<Classification> {
    self.lookup::<T>().0
  }

  /// Returns the classification and whether it was computed by this call.
  pub(crate) fn lookup<T: Polymorph>(&self) -> (Arc<Classification>, bool) {
    if !self.cache_enabled {
      return (Arc::new(Self::compute::<T>()), true);
    }
    let (classification, loaded) = self
      .cache
      .load_or_store_with(TypeId::of::<T>(), || Arc::new(Self::compute::<T>()));
    if loaded {
      tracing::trace!(type_name = std::any::type_name::<T>(), "classification cache hit");
    } else {
      tracing::debug!(
        type_name = std::any::type_name::<T>(),
        shape = ?classification.container_shape(),
        polymorphic = classification.is_polymorphic(),
        "classified type"
      );
    }
    (classification, !loaded)
  }

  fn compute<T: Polymorph>() -> Classification {
    Classification::from_shape(&T::shape(), T::element_signature())
  }

  pub fn len(&self) -> usize {
    self.cache.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cache.is_empty()
  }

  pub fn clear(&self) {
    self.cache.clear();
  }
}
