mod container_header;
mod type_identity;
mod type_signature;

pub use self::{container_header::*, type_identity::*, type_signature::*};
