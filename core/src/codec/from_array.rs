use crate::codec::{CodecError, Pair};
use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Builds a container from the flat array of elements read off the wire.
pub trait FromArray<E>: Sized {
  fn from_array(items: Vec<E>) -> Result<Self, CodecError>;
}

impl<T> FromArray<T> for Vec<T> {
  fn from_array(items: Vec<T>) -> Result<Self, CodecError> {
    Ok(items)
  }
}

impl<T> FromArray<T> for VecDeque<T> {
  fn from_array(items: Vec<T>) -> Result<Self, CodecError> {
    Ok(items.into())
  }
}

impl<T> FromArray<T> for LinkedList<T> {
  fn from_array(items: Vec<T>) -> Result<Self, CodecError> {
    Ok(items.into_iter().collect())
  }
}

impl<T, const N: usize> FromArray<T> for [T; N] {
  fn from_array(items: Vec<T>) -> Result<Self, CodecError> {
    items.try_into().map_err(|items: Vec<T>| {
      CodecError::ConstructionFailure(format!("expected {} elements, found {}", N, items.len()))
    })
  }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> FromArray<Pair<K, V>> for HashMap<K, V, S> {
  fn from_array(items: Vec<Pair<K, V>>) -> Result<Self, CodecError> {
    Ok(items.into_iter().map(Pair::into_tuple).collect())
  }
}

impl<K: Ord, V> FromArray<Pair<K, V>> for BTreeMap<K, V> {
  fn from_array(items: Vec<Pair<K, V>>) -> Result<Self, CodecError> {
    Ok(items.into_iter().map(Pair::into_tuple).collect())
  }
}
