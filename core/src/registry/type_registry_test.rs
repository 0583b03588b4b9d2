#[cfg(test)]
mod tests {
  use crate::codec::CodecError;
  use crate::identity::{TypeIdentity, TypeSignature};
  use crate::registry::{AbstractType, Constructible, ContainerArity, RegistryError, TypeKind, TypeRegistry};
  use crate::test_support::{init_tracing, Animal, Bike, Cat, Dog, Kennel, Vehicle};
  use rstest::*;
  use std::any::TypeId;
  use std::collections::{BTreeMap, HashMap, VecDeque};
  use std::sync::Barrier;

  #[fixture]
  fn registry() -> TypeRegistry {
    init_tracing();
    let registry = TypeRegistry::new(true);
    registry.register::<Dog>().unwrap();
    registry.register::<Cat>().unwrap();
    registry
  }

  #[rstest]
  fn test_resolve_registered_type(registry: TypeRegistry) {
    let descriptor = registry.resolve(&Dog::static_identity()).unwrap();
    assert!(descriptor.is_constructible());
    assert_eq!(descriptor.type_id(), Some(TypeId::of::<Dog>()));
    assert_eq!(descriptor.contracts(), vec![&<dyn Animal>::identity()]);
  }

  #[rstest]
  fn test_construct_and_cast(registry: TypeRegistry) {
    let descriptor = registry.resolve(&Cat::static_identity()).unwrap();
    let instance = descriptor.construct().unwrap();
    let animal = descriptor.cast::<dyn Animal>(instance).unwrap();
    assert_eq!(animal.as_any().downcast_ref::<Cat>(), Some(&Cat { lives: 9 }));
  }

  #[rstest]
  fn test_cast_to_undeclared_contract_fails(registry: TypeRegistry) {
    let descriptor = registry.resolve(&Dog::static_identity()).unwrap();
    let instance = descriptor.construct().unwrap();
    let result = descriptor.cast::<dyn Vehicle>(instance);
    assert!(matches!(result, Err(CodecError::ConstructionFailure(_))));
  }

  #[rstest]
  fn test_unknown_module_and_type(registry: TypeRegistry) {
    let missing_module = TypeIdentity::new("nowhere", "nowhere::Ghost");
    assert_eq!(
      registry.resolve(&missing_module).unwrap_err(),
      CodecError::UnresolvedModule("nowhere".to_string())
    );
    let module = Dog::static_identity().module().to_string();
    let missing_type = TypeIdentity::new(module.clone(), format!("{}::Ghost", module));
    let err = registry.resolve(&missing_type).unwrap_err();
    assert!(err.is_resolution_failure());
    assert!(matches!(err, CodecError::UnresolvedType { .. }));
  }

  #[rstest]
  fn test_module_is_loaded_once(registry: TypeRegistry) {
    let before = registry.module_loads();
    for _ in 0..5 {
      registry.resolve(&Dog::static_identity()).unwrap();
      registry.resolve(&Cat::static_identity()).unwrap();
    }
    assert_eq!(registry.module_loads(), before + 1);
    assert_eq!(registry.cached_modules(), 1);
    assert_eq!(registry.cached_types(), 2);
  }

  #[test]
  fn test_disabled_cache_reloads_modules() {
    let registry = TypeRegistry::new(false);
    registry.register::<Dog>().unwrap();
    registry.resolve(&Dog::static_identity()).unwrap();
    registry.resolve(&Dog::static_identity()).unwrap();
    assert_eq!(registry.module_loads(), 2);
    assert_eq!(registry.cached_modules(), 0);
    assert_eq!(registry.cached_types(), 0);
  }

  #[rstest]
  fn test_registration_invalidates_cached_module(registry: TypeRegistry) {
    registry.resolve(&Dog::static_identity()).unwrap();
    assert!(registry.resolve(&Bike::static_identity()).is_err());
    registry.register::<Bike>().unwrap();
    assert!(registry.resolve(&Bike::static_identity()).is_ok());
    registry.clear_cache();
    assert_eq!(registry.cached_modules(), 0);
  }

  #[rstest]
  fn test_registration_is_idempotent(registry: TypeRegistry) {
    let count = registry.len();
    registry.register::<Dog>().unwrap();
    assert_eq!(registry.len(), count);
  }

  #[rstest]
  fn test_duplicate_identity_is_rejected(registry: TypeRegistry) {
    let identity = Dog::static_identity();
    let result = registry.register_container(identity.clone(), ContainerArity::Sequence);
    assert_eq!(result, Err(RegistryError::DuplicateIdentity(identity)));
  }

  #[rstest]
  fn test_declared_element_upgrades_to_abstract(registry: TypeRegistry) {
    registry.declare(&TypeSignature::new(<dyn Animal>::identity(), TypeId::of::<dyn Animal>()));
    let declared = registry.resolve(&<dyn Animal>::identity()).unwrap();
    assert!(matches!(declared.kind(), TypeKind::Declared));
    registry.register_abstract::<dyn Animal>().unwrap();
    let upgraded = registry.resolve(&<dyn Animal>::identity()).unwrap();
    assert!(matches!(upgraded.kind(), TypeKind::Abstract));
    assert!(upgraded.construct().is_err());
  }

  #[rstest]
  #[case(TypeIdentity::unbound::<Vec<()>>(), ContainerArity::Sequence)]
  #[case(TypeIdentity::unbound::<VecDeque<()>>(), ContainerArity::Sequence)]
  #[case(TypeIdentity::unbound::<HashMap<(), ()>>(), ContainerArity::Map)]
  #[case(TypeIdentity::unbound::<BTreeMap<(), ()>>(), ContainerArity::Map)]
  #[case(TypeIdentity::array(), ContainerArity::Array)]
  fn test_builtin_containers(#[case] identity: TypeIdentity, #[case] arity: ContainerArity) {
    let registry = TypeRegistry::default();
    let descriptor = registry.resolve(&identity).unwrap();
    assert_eq!(descriptor.container_arity(), Some(arity));
  }

  #[test]
  fn test_identity_of_abstract_box() {
    assert_eq!(
      TypeRegistry::identity_of::<Box<dyn Animal>>(),
      <dyn Animal>::identity()
    );
    assert_eq!(TypeRegistry::identity_of::<Option<Dog>>(), Dog::static_identity());
  }

  #[test]
  fn test_registration_racing_module_scans_stays_resolvable() {
    init_tracing();
    let module = Dog::static_identity().module().to_string();
    for _ in 0..50 {
      let registry = TypeRegistry::new(true);
      registry.register::<Kennel>().unwrap();
      let barrier = Barrier::new(2);
      std::thread::scope(|scope| {
        scope.spawn(|| {
          barrier.wait();
          for _ in 0..20 {
            let _ = registry.load_module(&module);
            let _ = registry.resolve(&Dog::static_identity());
          }
        });
        scope.spawn(|| {
          barrier.wait();
          registry.register::<Dog>().unwrap();
          registry.register::<Cat>().unwrap();
          registry.register::<Bike>().unwrap();
        });
      });
      for identity in [Dog::static_identity(), Cat::static_identity(), Bike::static_identity()] {
        assert!(registry.resolve(&identity).is_ok(), "{identity} unresolved after registration");
      }
      assert_eq!(registry.load_module(&module).unwrap().len(), 4);
    }
  }
}
