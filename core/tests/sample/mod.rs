#![allow(dead_code)]

use polymorph_json_core_rs::{abstract_type, field, ConfigOption, Pair, Polymorphic, PolymorphCodec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

pub trait IBar: Polymorphic {}
pub trait IFoo: Polymorphic {}

abstract_type!(IBar, IFoo);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(IFoo))]
pub struct A {
  pub a: String,
}

impl IFoo for A {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(IFoo))]
pub struct B {
  pub b: i32,
}

impl IFoo for B {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(IBar))]
pub struct C {
  pub a: i32,
}

impl Default for C {
  fn default() -> Self {
    Self { a: 12 }
  }
}

impl IBar for C {}

#[derive(Debug, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(IBar))]
#[serde(rename_all = "camelCase")]
pub struct D {
  pub b: String,
  #[serde(rename = "Foo", with = "field")]
  pub foo: Option<Box<dyn IFoo>>,
  #[serde(skip)]
  pub ignored_string: String,
  pub dict_test: HashMap<String, String>,
}

impl Default for D {
  fn default() -> Self {
    Self {
      b: "sample data".to_string(),
      foo: None,
      ignored_string: String::new(),
      dict_test: HashMap::from([("1".to_string(), "a".to_string()), ("2".to_string(), "b".to_string())]),
    }
  }
}

impl IBar for D {}

#[derive(Debug, Default, Serialize, Deserialize, Polymorphic)]
#[polymorph(implements(IBar))]
#[serde(rename_all = "camelCase")]
pub struct E {
  #[serde(with = "field")]
  pub bars: Option<Vec<Box<dyn IBar>>>,
  #[serde(with = "field")]
  pub foos: Option<HashMap<String, Box<dyn IFoo>>>,
  #[serde(with = "field")]
  pub key_value_pair_test: Option<Vec<Pair<String, Box<dyn IFoo>>>>,
  #[serde(with = "field")]
  pub tuple_test: Option<Vec<(Box<dyn IFoo>, i32)>>,
}

impl IBar for E {}

/// Required polymorphic field next to a plain one.
#[derive(Debug, Default, Serialize, Deserialize, Polymorphic)]
pub struct Holder {
  pub name: String,
  #[serde(with = "field")]
  pub foos: Vec<Box<dyn IFoo>>,
}

#[derive(Debug, Default, Serialize, Deserialize, Polymorphic)]
pub struct DefaultedHolder {
  pub name: String,
  #[serde(with = "field::or_default")]
  pub foos: Vec<Box<dyn IFoo>>,
}

pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

pub fn codec(options: impl IntoIterator<Item = ConfigOption>) -> PolymorphCodec {
  init_tracing();
  let codec = PolymorphCodec::from_options(options);
  codec.register::<A>().unwrap();
  codec.register::<B>().unwrap();
  codec.register::<C>().unwrap();
  codec.register::<D>().unwrap();
  codec.register::<E>().unwrap();
  codec
}

pub fn bar_as<T: Polymorphic>(bar: &dyn IBar) -> Option<&T> {
  bar.as_any().downcast_ref::<T>()
}

pub fn foo_as<T: Polymorphic>(foo: &dyn IFoo) -> Option<&T> {
  foo.as_any().downcast_ref::<T>()
}

pub fn c(a: i32) -> Box<dyn IBar> {
  Box::new(C { a })
}

pub fn a(a: &str) -> Box<dyn IFoo> {
  Box::new(A { a: a.to_string() })
}

pub fn b(b: i32) -> Box<dyn IFoo> {
  Box::new(B { b })
}
