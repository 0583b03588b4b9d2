use crate::codec::{CodecError, Polymorph, PolymorphCodec};
use crate::shape::Shape;
use serde_json::Value;

// Tuples of arity 1 to 8 are positional records; denied slots are written as in `Pair`.
macro_rules! tuple_polymorph {
  ($arity:expr => $($name:ident : $idx:tt),+) => {
    impl<$($name: Polymorph),+> Polymorph for ($($name,)+) {
      fn shape() -> Shape {
        Shape::Tuple(vec![$($name::shape()),+])
      }

      fn encode(&self, codec: &PolymorphCodec) -> Result<Option<Value>, CodecError> {
        let slots = vec![$(codec.write_slot::<$name>(&self.$idx)?),+];
        Ok(Some(Value::Array(slots)))
      }

      fn decode(codec: &PolymorphCodec, node: &Value) -> Result<Option<Self>, CodecError> {
        let Some(slots) = codec.record_slots(node, $arity)? else {
          return Ok(None);
        };
        Ok(Some(($(
          match codec.read_slot::<$name>(&slots[$idx])? {
            Some(slot) => slot,
            None => return Ok(None),
          },
        )+)))
      }
    }
  };
}

tuple_polymorph!(1 => T0: 0);
tuple_polymorph!(2 => T0: 0, T1: 1);
tuple_polymorph!(3 => T0: 0, T1: 1, T2: 2);
tuple_polymorph!(4 => T0: 0, T1: 1, T2: 2, T3: 3);
tuple_polymorph!(5 => T0: 0, T1: 1, T2: 2, T3: 3, T4: 4);
tuple_polymorph!(6 => T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5);
tuple_polymorph!(7 => T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6);
tuple_polymorph!(8 => T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7);
