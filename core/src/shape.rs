mod container_shape;
mod container_shape_resolver;
#[allow(clippy::module_inception)]
mod shape;
mod value_classifier;
mod value_classifier_test;

pub use self::{container_shape::*, container_shape_resolver::*, shape::*, value_classifier::*};
