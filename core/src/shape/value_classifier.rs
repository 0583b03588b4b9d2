use crate::codec::Polymorph;
use crate::shape::Shape;
use std::fmt::{Display, Formatter};

/// Self-describing value kinds that round-trip through the document model untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
  Bool,
  Integer,
  Float,
  Char,
  Text,
  DateTime,
  DateTimeOffset,
  Duration,
  Decimal,
  Uuid,
  Uri,
}

impl LeafKind {
  /// Whether a leaf of this kind can name a member of a JSON object.
  pub fn is_key_compatible(self) -> bool {
    !matches!(self, LeafKind::Float | LeafKind::Duration)
  }

  /// Whether the document form of this kind is a JSON string.
  pub fn is_textual(self) -> bool {
    !matches!(
      self,
      LeafKind::Bool | LeafKind::Integer | LeafKind::Float | LeafKind::Duration
    )
  }
}

impl Display for LeafKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      LeafKind::Bool => "bool",
      LeafKind::Integer => "integer",
      LeafKind::Float => "float",
      LeafKind::Char => "char",
      LeafKind::Text => "text",
      LeafKind::DateTime => "date-time",
      LeafKind::DateTimeOffset => "date-time-offset",
      LeafKind::Duration => "duration",
      LeafKind::Decimal => "decimal",
      LeafKind::Uuid => "uuid",
      LeafKind::Uri => "uri",
    };
    f.write_str(name)
  }
}

pub struct ValueClassifier;

impl ValueClassifier {
  pub fn is_leaf(shape: &Shape) -> bool {
    matches!(shape.unwrap_nullable(), Shape::Leaf(_))
  }

  pub fn leaf_kind(shape: &Shape) -> Option<LeafKind> {
    match shape.unwrap_nullable() {
      Shape::Leaf(kind) => Some(*kind),
      _ => None,
    }
  }

  pub fn is_leaf_type<T: Polymorph>() -> bool {
    Self::is_leaf(&T::shape())
  }
}
