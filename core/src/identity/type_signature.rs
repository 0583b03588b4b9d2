use crate::identity::TypeIdentity;
use std::any::TypeId;

/// A wire identity bound to the in-process `TypeId` it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSignature {
  identity: TypeIdentity,
  type_id: TypeId,
}

impl TypeSignature {
  pub fn new(identity: TypeIdentity, type_id: TypeId) -> Self {
    Self { identity, type_id }
  }

  pub fn of<T: ?Sized + 'static>() -> Self {
    Self::new(TypeIdentity::of::<T>(), TypeId::of::<T>())
  }

  pub fn identity(&self) -> &TypeIdentity {
    &self.identity
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }
}
