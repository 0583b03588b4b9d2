use crate::codec::CodecError;
use crate::identity::TypeIdentity;
use crate::registry::CastRegistrar;
use serde_json::Value;
use std::any::Any;
use std::fmt::Debug;

/// Object-safe view of a concrete type that can sit behind an abstract contract.
///
/// Usually derived with `#[derive(Polymorphic)]`. Abstract contracts are traits
/// with `Polymorphic` as a supertrait.
pub trait Polymorphic: Any + Send + Sync + Debug {
  /// Identity of the runtime (concrete) type.
  fn type_identity(&self) -> TypeIdentity;

  /// Document node for this value, without a type tag.
  fn to_document(&self) -> Result<Value, CodecError>;

  /// Overlays the fields present in `node` onto this value.
  fn populate(&mut self, node: &Value) -> Result<(), CodecError>;

  fn as_any(&self) -> &(dyn Any + Send + Sync);

  fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

/// A concrete type with a zero-argument constructor, registrable by identity.
pub trait Constructible: Polymorphic + Default + Sized {
  fn static_identity() -> TypeIdentity;

  /// Declares the abstract contracts this type can be read back as.
  fn register_casts(_casts: &mut CastRegistrar<Self>) {}
}

/// An abstract contract, implemented for `dyn Trait` by [`abstract_type!`](crate::abstract_type).
pub trait AbstractType: Send + Sync + 'static {
  fn identity() -> TypeIdentity;

  fn runtime_identity(&self) -> TypeIdentity;

  /// Untagged document of the runtime value.
  fn document(&self) -> Result<Value, CodecError>;
}

/// Upcast from a concrete type to one of its abstract contracts.
pub trait Implements<A: AbstractType + ?Sized> {
  fn upcast(self: Box<Self>) -> Box<A>;
}

/// Declares traits as abstract contracts usable as `Box<dyn Trait>` elements.
///
/// ```ignore
/// pub trait Shape: Polymorphic {}
/// abstract_type!(Shape);
/// ```
#[macro_export]
macro_rules! abstract_type {
  ($($contract:ident),+ $(,)?) => {
    $(
      impl $crate::AbstractType for dyn $contract {
        fn identity() -> $crate::TypeIdentity {
          $crate::TypeIdentity::from_path(concat!(module_path!(), "::", stringify!($contract)))
        }

        fn runtime_identity(&self) -> $crate::TypeIdentity {
          $crate::Polymorphic::type_identity(self)
        }

        fn document(&self) -> ::std::result::Result<$crate::__private::Value, $crate::CodecError> {
          $crate::Polymorphic::to_document(self)
        }
      }
    )+
  };
}
