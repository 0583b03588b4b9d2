use crate::{abstract_type, ConfigOption, Polymorphic, PolymorphCodec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

pub trait Animal: Polymorphic {}
pub trait Vehicle: Polymorphic {}

abstract_type!(Animal, Vehicle);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(Animal))]
pub struct Dog {
  pub name: String,
  pub age: u32,
}

impl Animal for Dog {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(Animal))]
pub struct Cat {
  pub lives: u8,
}

impl Default for Cat {
  fn default() -> Self {
    Self { lives: 9 }
  }
}

impl Animal for Cat {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(Vehicle))]
pub struct Bike {
  pub gears: u8,
}

impl Vehicle for Bike {}

/// Concrete type holding nested polymorphic fields.
#[derive(Debug, Default, Serialize, Deserialize, Polymorphic)]
pub struct Kennel {
  pub label: String,
  #[serde(with = "crate::field")]
  pub residents: Vec<Box<dyn Animal>>,
  #[serde(with = "crate::field")]
  pub by_owner: Option<HashMap<String, Box<dyn Animal>>>,
}

/// Like [`Kennel`], but an absent resident list reads as empty.
#[derive(Debug, Default, Serialize, Deserialize, Polymorphic)]
pub struct Roster {
  pub label: String,
  #[serde(with = "crate::field::or_default")]
  pub members: Vec<Box<dyn Animal>>,
}

pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

pub fn codec(options: impl IntoIterator<Item = ConfigOption>) -> PolymorphCodec {
  let codec = PolymorphCodec::from_options(options);
  register_all(&codec);
  codec
}

pub fn register_all(codec: &PolymorphCodec) {
  for result in [
    codec.register::<Dog>(),
    codec.register::<Cat>(),
    codec.register::<Bike>(),
    codec.register::<Kennel>(),
    codec.register::<Roster>(),
    codec.registry().register_abstract::<dyn Animal>(),
    codec.registry().register_abstract::<dyn Vehicle>(),
  ] {
    assert!(result.is_ok());
  }
}

pub fn dog(name: &str, age: u32) -> Box<dyn Animal> {
  Box::new(Dog {
    name: name.to_string(),
    age,
  })
}

pub fn cat(lives: u8) -> Box<dyn Animal> {
  Box::new(Cat { lives })
}

pub fn as_dog(animal: &dyn Animal) -> Option<&Dog> {
  animal.as_any().downcast_ref::<Dog>()
}

pub fn as_cat(animal: &dyn Animal) -> Option<&Cat> {
  animal.as_any().downcast_ref::<Cat>()
}
