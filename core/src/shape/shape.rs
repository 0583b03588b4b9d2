use crate::identity::TypeIdentity;
use crate::shape::LeafKind;

/// Static description of a type as the codec sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
  Leaf(LeafKind),
  /// A structured type with a single known concrete implementation.
  Concrete,
  /// An abstract contract (`dyn Trait`); values need a type tag.
  Abstract(TypeIdentity),
  Nullable(Box<Shape>),
  Array(Box<Shape>),
  Sequence {
    container: TypeIdentity,
    element: Box<Shape>,
  },
  Map {
    container: TypeIdentity,
    key: Box<Shape>,
    value: Box<Shape>,
  },
  Pair {
    key: Box<Shape>,
    value: Box<Shape>,
  },
  Tuple(Vec<Shape>),
}

impl Shape {
  /// Strips any number of `Nullable` wrappers.
  pub fn unwrap_nullable(&self) -> &Shape {
    match self {
      Shape::Nullable(inner) => inner.unwrap_nullable(),
      other => other,
    }
  }

  pub fn is_composite(&self) -> bool {
    matches!(self.unwrap_nullable(), Shape::Pair { .. } | Shape::Tuple(_))
  }

  pub fn is_abstract(&self) -> bool {
    matches!(self.unwrap_nullable(), Shape::Abstract(_))
  }

  /// The abstract identity of this slot when it is (nullable) abstract.
  pub fn abstract_identity(&self) -> Option<&TypeIdentity> {
    match self.unwrap_nullable() {
      Shape::Abstract(identity) => Some(identity),
      _ => None,
    }
  }

  /// Whether a value of this shape, sitting in a container slot, needs type tags.
  ///
  /// Nested containers carry their own headers and do not count.
  pub fn requires_tagging(&self) -> bool {
    match self.unwrap_nullable() {
      Shape::Abstract(_) => true,
      Shape::Pair { key, value } => key.requires_tagging() || value.requires_tagging(),
      Shape::Tuple(slots) => slots.iter().any(Shape::requires_tagging),
      _ => false,
    }
  }

  /// Abstract identities reachable from this slot without crossing into a nested container.
  pub fn abstract_identities(&self) -> Vec<TypeIdentity> {
    let mut found = Vec::new();
    self.collect_abstract_identities(&mut found);
    found
  }

  fn collect_abstract_identities(&self, found: &mut Vec<TypeIdentity>) {
    match self.unwrap_nullable() {
      Shape::Abstract(identity) => {
        if !found.contains(identity) {
          found.push(identity.clone());
        }
      }
      Shape::Pair { key, value } => {
        key.collect_abstract_identities(found);
        value.collect_abstract_identities(found);
      }
      Shape::Tuple(slots) => slots.iter().for_each(|slot| slot.collect_abstract_identities(found)),
      _ => {}
    }
  }
}
