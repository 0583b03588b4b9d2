use crate::identity::{TypeIdentity, TypeSignature};
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerShape {
  Array,
  Sequence,
  Map,
  Pair,
  Tuple(usize),
  NotAContainer,
}

impl ContainerShape {
  pub fn is_composite(self) -> bool {
    matches!(self, ContainerShape::Pair | ContainerShape::Tuple(_))
  }
}

/// Cached outcome of classifying one static type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
  container: ContainerShape,
  polymorphic: bool,
  container_identity: Option<TypeIdentity>,
  element: Option<TypeSignature>,
  element_shape: Option<Shape>,
  abstract_types: Vec<TypeIdentity>,
}

impl Classification {
  pub fn not_a_container() -> Self {
    Self {
      container: ContainerShape::NotAContainer,
      polymorphic: false,
      container_identity: None,
      element: None,
      element_shape: None,
      abstract_types: Vec::new(),
    }
  }

  /// Classifies `shape`; `element` is the signature of the element type when the shape is a container.
  ///
  /// Sequences of pairs or tuples are always headed. Arrays and maps are headed
  /// only when their elements reach an abstract slot.
  pub fn from_shape(shape: &Shape, element: Option<TypeSignature>) -> Self {
    match shape {
      Shape::Nullable(inner) => Self::from_shape(inner, element),
      Shape::Array(item) => Self::container(
        ContainerShape::Array,
        TypeIdentity::array(),
        item,
        element,
        item.requires_tagging(),
      ),
      Shape::Sequence { container, element: item } => Self::container(
        ContainerShape::Sequence,
        container.clone(),
        item,
        element,
        item.requires_tagging() || item.is_composite(),
      ),
      Shape::Map { container, key, value } => {
        let entry = Shape::Pair {
          key: key.clone(),
          value: value.clone(),
        };
        Self::container(ContainerShape::Map, container.clone(), &entry, element, entry.requires_tagging())
      }
      Shape::Pair { key, value } => Self {
        container: ContainerShape::Pair,
        polymorphic: key.requires_tagging() || value.requires_tagging(),
        container_identity: None,
        element: None,
        element_shape: None,
        abstract_types: shape.abstract_identities(),
      },
      Shape::Tuple(slots) => Self {
        container: ContainerShape::Tuple(slots.len()),
        polymorphic: slots.iter().any(Shape::requires_tagging),
        container_identity: None,
        element: None,
        element_shape: None,
        abstract_types: shape.abstract_identities(),
      },
      Shape::Leaf(_) | Shape::Concrete | Shape::Abstract(_) => Self::not_a_container(),
    }
  }

  fn container(
    container: ContainerShape,
    identity: TypeIdentity,
    item: &Shape,
    element: Option<TypeSignature>,
    polymorphic: bool,
  ) -> Self {
    Self {
      container,
      polymorphic,
      container_identity: Some(identity),
      element,
      element_shape: Some(item.clone()),
      abstract_types: item.abstract_identities(),
    }
  }

  pub fn container_shape(&self) -> ContainerShape {
    self.container
  }

  /// True for containers whose elements carry type tags behind a header.
  pub fn is_polymorphic_container(&self) -> bool {
    self.polymorphic
      && matches!(
        self.container,
        ContainerShape::Array | ContainerShape::Sequence | ContainerShape::Map
      )
  }

  pub fn is_polymorphic(&self) -> bool {
    self.polymorphic
  }

  pub fn container_identity(&self) -> Option<&TypeIdentity> {
    self.container_identity.as_ref()
  }

  pub fn element(&self) -> Option<&TypeSignature> {
    self.element.as_ref()
  }

  pub fn element_shape(&self) -> Option<&Shape> {
    self.element_shape.as_ref()
  }

  /// Abstract types governing inclusion, in declaration order.
  pub fn abstract_types(&self) -> &[TypeIdentity] {
    &self.abstract_types
  }
}
