use crate::codec::CodecError;
use std::fmt::{Display, Formatter};

/// Module identity used for types whose path carries no crate segment (primitives, tuples, arrays).
pub const BUILTIN_MODULE: &str = "core";

/// Separator between the module and type-name parts of the wire form.
pub const IDENTITY_SEPARATOR: char = '\\';

/// Stable `(module, type-name)` pair naming a type across process boundaries.
///
/// The module part is the crate segment of the type path, the type name is the
/// full path (`shapes::geometry::Circle`). The wire form is `module\type-name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeIdentity {
  module: String,
  type_name: String,
}

impl TypeIdentity {
  pub fn new(module: impl Into<String>, type_name: impl Into<String>) -> Self {
    Self {
      module: module.into(),
      type_name: type_name.into(),
    }
  }

  /// Builds an identity from a Rust type path such as `my_crate::shapes::Circle`.
  pub fn from_path(path: &str) -> Self {
    let path = path.strip_prefix("dyn ").unwrap_or(path).trim();
    let module = match path.find("::") {
      Some(idx) if is_plain_segment(&path[..idx]) => &path[..idx],
      _ => BUILTIN_MODULE,
    };
    Self::new(module, path)
  }

  /// Identity of `T` including its generic arguments.
  pub fn of<T: ?Sized>() -> Self {
    Self::from_path(std::any::type_name::<T>())
  }

  /// Identity of the generic shape of `T`, with its type arguments stripped.
  pub fn unbound<T: ?Sized>() -> Self {
    let name = std::any::type_name::<T>();
    if name.starts_with('[') {
      return Self::array();
    }
    let base = name.split('<').next().unwrap_or(name);
    Self::from_path(base)
  }

  /// Identity shared by every fixed-size array shape.
  pub fn array() -> Self {
    Self::new(BUILTIN_MODULE, "[]")
  }

  /// Parses the `module\type-name` wire form.
  pub fn parse(wire: &str) -> Result<Self, CodecError> {
    match wire.split_once(IDENTITY_SEPARATOR) {
      Some((module, type_name)) if !module.is_empty() && !type_name.is_empty() => {
        Ok(Self::new(module, type_name))
      }
      _ => Err(CodecError::MalformedIdentity(wire.to_string())),
    }
  }

  pub fn module(&self) -> &str {
    &self.module
  }

  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  pub fn to_wire(&self) -> String {
    format!("{}{}{}", self.module, IDENTITY_SEPARATOR, self.type_name)
  }
}

fn is_plain_segment(segment: &str) -> bool {
  !segment.is_empty() && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl Display for TypeIdentity {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}{}{}", self.module, IDENTITY_SEPARATOR, self.type_name)
  }
}
