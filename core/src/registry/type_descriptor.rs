use crate::codec::CodecError;
use crate::identity::{TypeIdentity, TypeSignature};
use crate::registry::{AbstractType, CastEntry, CastRegistrar, Constructible, Polymorphic};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// Generic container family a registered container identity stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerArity {
  /// Fixed-size array: one type argument, length checked on construction.
  Array,
  /// Growable sequence: one type argument.
  Sequence,
  /// Key/value map: two type arguments.
  Map,
}

impl ContainerArity {
  pub fn type_arguments(self) -> usize {
    match self {
      ContainerArity::Array | ContainerArity::Sequence => 1,
      ContainerArity::Map => 2,
    }
  }
}

pub enum TypeKind {
  Constructible {
    construct: fn() -> Box<dyn Polymorphic>,
    casts: HashMap<TypeId, CastEntry>,
  },
  Abstract,
  Container(ContainerArity),
  /// Known by identity only (element types of containers the codec has classified).
  Declared,
}

impl Debug for TypeKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      TypeKind::Constructible { casts, .. } => f
        .debug_struct("Constructible")
        .field("contracts", &casts.values().map(CastEntry::contract).collect::<Vec<_>>())
        .finish(),
      TypeKind::Abstract => f.write_str("Abstract"),
      TypeKind::Container(arity) => f.debug_tuple("Container").field(arity).finish(),
      TypeKind::Declared => f.write_str("Declared"),
    }
  }
}

/// What the registry knows about one identity.
#[derive(Debug)]
pub struct TypeDescriptor {
  identity: TypeIdentity,
  type_id: Option<TypeId>,
  kind: TypeKind,
}

fn construct_boxed<T: Constructible>() -> Box<dyn Polymorphic> {
  Box::new(T::default())
}

impl TypeDescriptor {
  pub fn constructible<T: Constructible>() -> Self {
    let mut registrar = CastRegistrar::<T>::new();
    T::register_casts(&mut registrar);
    Self {
      identity: T::static_identity(),
      type_id: Some(TypeId::of::<T>()),
      kind: TypeKind::Constructible {
        construct: construct_boxed::<T>,
        casts: registrar.into_entries().into_iter().collect(),
      },
    }
  }

  pub fn abstract_type<A: AbstractType + ?Sized>() -> Self {
    Self {
      identity: A::identity(),
      type_id: Some(TypeId::of::<A>()),
      kind: TypeKind::Abstract,
    }
  }

  pub fn container(identity: TypeIdentity, arity: ContainerArity) -> Self {
    Self {
      identity,
      type_id: None,
      kind: TypeKind::Container(arity),
    }
  }

  pub fn declared(signature: &TypeSignature) -> Self {
    Self {
      identity: signature.identity().clone(),
      type_id: Some(signature.type_id()),
      kind: TypeKind::Declared,
    }
  }

  pub fn identity(&self) -> &TypeIdentity {
    &self.identity
  }

  pub fn type_id(&self) -> Option<TypeId> {
    self.type_id
  }

  pub fn kind(&self) -> &TypeKind {
    &self.kind
  }

  pub fn is_constructible(&self) -> bool {
    matches!(self.kind, TypeKind::Constructible { .. })
  }

  pub fn container_arity(&self) -> Option<ContainerArity> {
    match self.kind {
      TypeKind::Container(arity) => Some(arity),
      _ => None,
    }
  }

  /// Abstract contracts this type declared on registration.
  pub fn contracts(&self) -> Vec<&TypeIdentity> {
    match &self.kind {
      TypeKind::Constructible { casts, .. } => casts.values().map(CastEntry::contract).collect(),
      _ => Vec::new(),
    }
  }

  /// Creates a default instance of the described type.
  pub fn construct(&self) -> Result<Box<dyn Polymorphic>, CodecError> {
    match &self.kind {
      TypeKind::Constructible { construct, .. } => Ok(construct()),
      other => Err(CodecError::ConstructionFailure(format!(
        "{} is not constructible ({:?})",
        self.identity, other
      ))),
    }
  }

  /// Converts an instance of the described type into the abstract contract `A`.
  pub fn cast<A: AbstractType + ?Sized>(&self, instance: Box<dyn Polymorphic>) -> Result<Box<A>, CodecError> {
    let entry = match &self.kind {
      TypeKind::Constructible { casts, .. } => casts.get(&TypeId::of::<A>()),
      _ => None,
    };
    let caster = entry
      .and_then(CastEntry::caster::<A>)
      .ok_or_else(|| {
        CodecError::ConstructionFailure(format!("{} does not implement {}", self.identity, A::identity()))
      })?;
    let any: Box<dyn Any + Send + Sync> = instance.into_any();
    caster.cast(any).ok_or_else(|| {
      CodecError::ConstructionFailure(format!("instance is not a {}", self.identity))
    })
  }
}
