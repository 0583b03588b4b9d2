#[cfg(test)]
mod tests {
  use crate::codec::Polymorph;
  use crate::shape::{LeafKind, Shape, ValueClassifier};
  use crate::test_support::{Animal, Dog};
  use rstest::rstest;

  fn leaf_kind_of<T: Polymorph>() -> Option<LeafKind> {
    ValueClassifier::leaf_kind(&T::shape())
  }

  #[rstest]
  #[case::boolean(leaf_kind_of::<bool>(), LeafKind::Bool)]
  #[case::integer(leaf_kind_of::<u64>(), LeafKind::Integer)]
  #[case::float(leaf_kind_of::<f64>(), LeafKind::Float)]
  #[case::text(leaf_kind_of::<String>(), LeafKind::Text)]
  #[case::date_time(leaf_kind_of::<chrono::NaiveDateTime>(), LeafKind::DateTime)]
  #[case::date_time_offset(leaf_kind_of::<chrono::DateTime<chrono::FixedOffset>>(), LeafKind::DateTimeOffset)]
  #[case::duration(leaf_kind_of::<std::time::Duration>(), LeafKind::Duration)]
  #[case::decimal(leaf_kind_of::<rust_decimal::Decimal>(), LeafKind::Decimal)]
  #[case::uuid(leaf_kind_of::<uuid::Uuid>(), LeafKind::Uuid)]
  #[case::uri(leaf_kind_of::<url::Url>(), LeafKind::Uri)]
  #[case::nullable_text(leaf_kind_of::<Option<String>>(), LeafKind::Text)]
  fn test_leaf_kinds(#[case] actual: Option<LeafKind>, #[case] expected: LeafKind) {
    assert_eq!(actual, Some(expected));
  }

  #[test]
  fn test_structured_types_are_not_leaves() {
    assert!(!ValueClassifier::is_leaf_type::<Dog>());
    assert!(!ValueClassifier::is_leaf_type::<Box<dyn Animal>>());
    assert!(!ValueClassifier::is_leaf_type::<Vec<i32>>());
    assert!(!ValueClassifier::is_leaf_type::<(i32, String)>());
    assert!(ValueClassifier::is_leaf(&Shape::Nullable(Box::new(Shape::Leaf(LeafKind::Char)))));
  }

  #[test]
  fn test_key_compatibility() {
    assert!(LeafKind::Text.is_key_compatible());
    assert!(LeafKind::Uuid.is_key_compatible());
    assert!(!LeafKind::Float.is_key_compatible());
    assert_eq!(LeafKind::DateTimeOffset.to_string(), "date-time-offset");
  }

  #[rstest]
  #[case(LeafKind::Text, true)]
  #[case(LeafKind::Decimal, true)]
  #[case(LeafKind::Uri, true)]
  #[case(LeafKind::Integer, false)]
  #[case(LeafKind::Bool, false)]
  #[case(LeafKind::Duration, false)]
  fn test_textual_kinds(#[case] kind: LeafKind, #[case] textual: bool) {
    assert_eq!(kind.is_textual(), textual);
  }
}
