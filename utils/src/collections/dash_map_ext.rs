use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

pub trait DashMapExtension<K: Eq + Hash, V: Clone> {
  /// Returns the stored value and `true`, or stores `value` and returns it with `false`.
  fn load_or_store(&self, key: K, value: V) -> (V, bool);

  /// Like [`DashMapExtension::load_or_store`], but only computes the value when the key is vacant.
  fn load_or_store_with<F>(&self, key: K, f: F) -> (V, bool)
  where
    F: FnOnce() -> V;
}

impl<K: Eq + Hash, V: Clone> DashMapExtension<K, V> for DashMap<K, V> {
  fn load_or_store(&self, key: K, value: V) -> (V, bool) {
    match self.entry(key) {
      Entry::Occupied(entry) => (entry.get().clone(), true),
      Entry::Vacant(entry) => (entry.insert(value).clone(), false),
    }
  }

  fn load_or_store_with<F>(&self, key: K, f: F) -> (V, bool)
  where
    F: FnOnce() -> V, {
    if let Some(found) = self.get(&key) {
      return (found.value().clone(), true);
    }
    // computed outside the shard lock; a racing writer wins and our value is dropped
    let value = f();
    self.load_or_store(key, value)
  }
}
