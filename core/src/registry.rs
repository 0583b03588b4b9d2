mod cast_registrar;
mod polymorphic;
mod registry_error;
mod resolution_cache;
mod type_descriptor;
mod type_module;
mod type_registry;
mod type_registry_test;

pub use self::{
  cast_registrar::*, polymorphic::*, registry_error::*, resolution_cache::*, type_descriptor::*, type_module::*,
  type_registry::*,
};
