#[cfg(test)]
mod tests {
  use crate::codec::{CodecError, ConfigOption, PolymorphCodec, TYPE_KEY};
  use crate::registry::Constructible;
  use crate::test_support::{as_cat, as_dog, cat, codec, dog, init_tracing, Animal, Cat, Dog, Kennel};
  use crate::Polymorphic;
  use rstest::*;
  use serde::{Deserialize, Serialize};
  use serde_json::{json, Value};
  use std::collections::HashMap;

  #[derive(Debug, Default, Serialize, Deserialize, Polymorphic)]
  #[polymorph(implements(Animal))]
  struct Pebble(u8);

  impl Animal for Pebble {}

  #[fixture]
  fn lenient() -> PolymorphCodec {
    init_tracing();
    codec([])
  }

  #[fixture]
  fn strict() -> PolymorphCodec {
    init_tracing();
    codec([ConfigOption::with_strict()])
  }

  #[rstest]
  fn test_single_abstract_value_round_trips(lenient: PolymorphCodec) {
    let node = lenient.to_value(&cat(5)).unwrap();
    assert_eq!(node, json!({ "lives": 5, TYPE_KEY: Cat::static_identity().to_wire() }));
    let read = lenient.from_value::<Box<dyn Animal>>(&node).unwrap().unwrap();
    assert_eq!(as_cat(read.as_ref()), Some(&Cat { lives: 5 }));
    assert_eq!(read.type_identity(), Cat::static_identity());
  }

  #[rstest]
  fn test_null_reads_as_absent(lenient: PolymorphCodec) {
    assert!(lenient.from_value::<Box<dyn Animal>>(&Value::Null).unwrap().is_none());
    let nullable = lenient.from_value::<Option<Box<dyn Animal>>>(&Value::Null).unwrap();
    assert!(matches!(nullable, Some(None)));
    assert_eq!(lenient.to_value::<Option<Box<dyn Animal>>>(&None).unwrap(), Value::Null);
  }

  #[rstest]
  #[case::missing_tag(json!({ "lives": 1 }))]
  #[case::tag_without_separator(json!({ "lives": 1, TYPE_KEY: "Cat" }))]
  #[case::tag_not_a_string(json!({ "lives": 1, TYPE_KEY: 7 }))]
  fn test_malformed_tags(lenient: PolymorphCodec, strict: PolymorphCodec, #[case] node: Value) {
    assert!(lenient.from_value::<Box<dyn Animal>>(&node).unwrap().is_none());
    let err = strict.from_value::<Box<dyn Animal>>(&node).unwrap_err();
    assert!(matches!(err, CodecError::MalformedIdentity(_)));
  }

  #[rstest]
  fn test_non_object_element(lenient: PolymorphCodec, strict: PolymorphCodec) {
    assert!(lenient.from_value::<Box<dyn Animal>>(&json!(3)).unwrap().is_none());
    let err = strict.from_value::<Box<dyn Animal>>(&json!("cat")).unwrap_err();
    assert!(matches!(err, CodecError::PopulationFailure(_)));
  }

  #[rstest]
  fn test_population_failure_keeps_defaults_when_lenient(lenient: PolymorphCodec, strict: PolymorphCodec) {
    let node = json!({ "lives": "many", TYPE_KEY: Cat::static_identity().to_wire() });
    let read = lenient.from_value::<Box<dyn Animal>>(&node).unwrap().unwrap();
    assert_eq!(as_cat(read.as_ref()), Some(&Cat::default()));
    let err = strict.from_value::<Box<dyn Animal>>(&node).unwrap_err();
    assert!(matches!(err, CodecError::PopulationFailure(_)));
  }

  #[rstest]
  fn test_missing_members_keep_defaults(lenient: PolymorphCodec) {
    let node = json!({ "name": "solo", TYPE_KEY: Dog::static_identity().to_wire() });
    let read = lenient.from_value::<Box<dyn Animal>>(&node).unwrap().unwrap();
    assert_eq!(as_dog(read.as_ref()), Some(&Dog { name: "solo".to_string(), age: 0 }));
  }

  #[rstest]
  fn test_concrete_values_are_untagged(lenient: PolymorphCodec) {
    let node = lenient.to_value(&Dog { name: "rex".to_string(), age: 2 }).unwrap();
    assert_eq!(node, json!({ "name": "rex", "age": 2 }));
    let read = lenient.from_value::<Dog>(&json!({ "age": 6 })).unwrap();
    assert_eq!(read, Some(Dog { name: String::new(), age: 6 }));
  }

  #[rstest]
  fn test_non_object_document_is_a_shape_mismatch(lenient: PolymorphCodec) {
    assert!(lenient.register::<Pebble>().is_ok());
    let pebble: Box<dyn Animal> = Box::new(Pebble(3));
    let err = lenient.to_value(&pebble).unwrap_err();
    assert!(matches!(err, CodecError::ShapeMismatch(_)));
  }

  #[rstest]
  fn test_nested_fields_round_trip(lenient: PolymorphCodec) {
    let mut by_owner: HashMap<String, Box<dyn Animal>> = HashMap::new();
    by_owner.insert("ann".to_string(), cat(8));
    let kennel = Kennel {
      label: "north".to_string(),
      residents: vec![dog("rex", 3), cat(1)],
      by_owner: Some(by_owner),
    };
    let node = lenient.to_value(&kennel).unwrap();
    assert_eq!(node["residents"].as_array().map(Vec::len), Some(3));
    let read = lenient.from_value::<Kennel>(&node).unwrap().unwrap();
    assert_eq!(read.label, "north");
    assert_eq!(as_dog(read.residents[0].as_ref()).map(|d| d.age), Some(3));
    let owners = read.by_owner.unwrap_or_default();
    assert_eq!(owners.get("ann").and_then(|a| as_cat(a.as_ref())).map(|c| c.lives), Some(8));
  }

  #[rstest]
  fn test_nested_errors_surface_intact(strict: PolymorphCodec) {
    let kennel = Kennel {
      label: "south".to_string(),
      residents: vec![cat(1)],
      by_owner: None,
    };
    let mut node = strict.to_value(&kennel).unwrap();
    node["residents"][1][TYPE_KEY] = json!("missing\\missing::Wolf");
    let err = strict.from_value::<Kennel>(&node).unwrap_err();
    assert_eq!(err, CodecError::UnresolvedModule("missing".to_string()));
  }

  #[rstest]
  fn test_nested_resolution_failures_degrade_when_lenient(lenient: PolymorphCodec) {
    let kennel = Kennel {
      label: "east".to_string(),
      residents: vec![cat(1), cat(2)],
      by_owner: None,
    };
    let mut node = lenient.to_value(&kennel).unwrap();
    node["residents"][1][TYPE_KEY] = json!("missing\\missing::Wolf");
    let read = lenient.from_value::<Kennel>(&node).unwrap().unwrap();
    assert_eq!(read.residents.len(), 1);
    assert_eq!(as_cat(read.residents[0].as_ref()).map(|c| c.lives), Some(2));
  }
}
