//! Polymorphic container codec for JSON.
//!
//! Sequences, arrays, maps, pairs and tuples whose element type is a trait
//! object (`Box<dyn Trait>`) are written with a container header and per-element
//! type tags, and rebuilt into the right concrete types on read.

extern crate self as polymorph_json_core_rs;

pub mod codec;
pub mod document;
pub mod field;
pub mod identity;
pub mod policy;
pub mod registry;
pub mod shape;

pub use codec::*;
pub use identity::*;
pub use policy::*;
pub use registry::*;
pub use shape::*;

// Re-exports for derive macros
pub use polymorph_json_derive_rs::Polymorphic;

#[doc(hidden)]
pub mod __private {
  pub use serde_json::Value;
}

#[cfg(test)]
mod test_support;
