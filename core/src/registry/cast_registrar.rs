use crate::identity::TypeIdentity;
use crate::registry::{AbstractType, Constructible, Implements};
use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased conversion from a constructed instance into `Box<A>`.
pub struct Caster<A: ?Sized> {
  cast: fn(Box<dyn Any + Send + Sync>) -> Option<Box<A>>,
}

impl<A: ?Sized + 'static> Caster<A> {
  pub fn cast(&self, instance: Box<dyn Any + Send + Sync>) -> Option<Box<A>> {
    (self.cast)(instance)
  }
}

/// A registered upcast, keyed in its descriptor by the contract's `TypeId`.
#[derive(Clone)]
pub struct CastEntry {
  contract: TypeIdentity,
  caster: Arc<dyn Any + Send + Sync>,
}

impl CastEntry {
  pub fn contract(&self) -> &TypeIdentity {
    &self.contract
  }

  pub(crate) fn caster<A: ?Sized + 'static>(&self) -> Option<&Caster<A>> {
    self.caster.downcast_ref::<Caster<A>>()
  }
}

/// Collects the casts a [`Constructible`] type offers while it is being registered.
pub struct CastRegistrar<T> {
  entries: Vec<(TypeId, CastEntry)>,
  _phantom: PhantomData<fn() -> T>,
}

impl<T: Constructible> CastRegistrar<T> {
  pub(crate) fn new() -> Self {
    Self {
      entries: Vec::new(),
      _phantom: PhantomData,
    }
  }

  pub fn implements<A>(&mut self) -> &mut Self
  where
    A: AbstractType + ?Sized,
    T: Implements<A>, {
    let caster: Caster<A> = Caster { cast: cast_into::<T, A> };
    self.entries.push((
      TypeId::of::<A>(),
      CastEntry {
        contract: A::identity(),
        caster: Arc::new(caster),
      },
    ));
    self
  }

  pub(crate) fn into_entries(self) -> Vec<(TypeId, CastEntry)> {
    self.entries
  }
}

fn cast_into<T, A>(instance: Box<dyn Any + Send + Sync>) -> Option<Box<A>>
where
  T: Implements<A> + 'static,
  A: AbstractType + ?Sized, {
  instance.downcast::<T>().ok().map(<T as Implements<A>>::upcast)
}
