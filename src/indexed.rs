use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::collections::HashMap;

use rustc_hash::FxHasher;

use crate::{
    Handle, IntoKeys, IntoValues, Iter, IterMut, Keys, Locate, Result, Values, ValuesMut, VecMap,
};

/// A [`VecMap`] with a hash index from every key to its first position.
///
/// `IndexedVecMap` offers the same lookups as [`VecMap`], with the same first-match-wins
/// semantics for duplicate keys, but resolves keys in `O(1)` on average instead of scanning.
///
/// The trade-off is explicit: every key is stored twice, once in the list and once in the
/// index, so keys must be `Clone` and `Hash`, and every insertion pays a hash and a clone.
/// For a handful of keys the plain [`VecMap`] is usually faster.
///
/// The index hashes with [`FxHasher`] unless another `S` is chosen.
///
/// ### Example
/// ```rust
/// use vecmap::IndexedVecMap;
///
/// let mut map: IndexedVecMap<i32, char> = IndexedVecMap::new();
/// map.insert(1, 'c');
///
/// *map.get_or_insert_default(1) = 'e';
/// *map.get_or_insert_default(10) = 'g';
///
/// assert_eq!(map.get(&1), Some(&'e'));
/// assert_eq!(map.get(&10), Some(&'g'));
/// assert_eq!(map.len(), 2);
/// ```
pub struct IndexedVecMap<K, V, S = BuildHasherDefault<FxHasher>> {
    pub(crate) list: VecMap<K, V>,
    pub(crate) index: HashMap<K, usize, S>,
}

impl<K, V, S: Default> Default for IndexedVecMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S: Default> IndexedVecMap<K, V, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> IndexedVecMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            list: VecMap::new(),
            index: HashMap::with_hasher(hash_builder),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            list: VecMap::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// The underlying list, in insertion order and duplicates included.
    pub fn as_list(&self) -> &VecMap<K, V> {
        &self.list
    }

    pub fn into_list(self) -> VecMap<K, V> {
        self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes all pairs; every [`Handle`] taken before the call becomes stale.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> Iter<K, V> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        self.list.iter_mut()
    }

    pub fn keys(&self) -> Keys<K> {
        self.list.keys()
    }

    pub fn into_keys(self) -> IntoKeys<K> {
        self.list.into_keys()
    }

    pub fn values(&self) -> Values<V> {
        self.list.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<V> {
        self.list.values_mut()
    }

    pub fn into_values(self) -> IntoValues<V> {
        self.list.into_values()
    }

    /// Retrieves a reference to the value for a key or a [`Handle`], failing on a miss.
    pub fn try_get(&self, key: impl Locate<Self>) -> Result<&V> {
        let position = self.resolve(key)?;
        Ok(&self.list.values[position])
    }

    /// Retrieves a mutable reference to the value for a key or a [`Handle`], failing on a
    /// miss without touching the map.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::{Error, IndexedVecMap};
    ///
    /// let mut map: IndexedVecMap<i32, char> = IndexedVecMap::new();
    /// map.insert(1, 'c');
    ///
    /// assert_eq!(map.try_get_mut(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn try_get_mut(&mut self, key: impl Locate<Self>) -> Result<&mut V> {
        let position = self.resolve(key)?;
        Ok(self.list.value_at_mut(position))
    }

    pub fn get(&self, key: impl Locate<Self>) -> Option<&V> {
        let position = key.locate(self).ok()?;
        Some(&self.list.values[position])
    }

    pub fn get_mut(&mut self, key: impl Locate<Self>) -> Option<&mut V> {
        let position = key.locate(self).ok()?;
        Some(self.list.value_at_mut(position))
    }

    pub fn get_key_value(&self, key: impl Locate<Self>) -> Option<(&K, &V)> {
        let position = key.locate(self).ok()?;
        Some((&self.list.keys[position], &self.list.values[position]))
    }

    pub fn get_key_value_mut(&mut self, key: impl Locate<Self>) -> Option<(&K, &mut V)> {
        let position = key.locate(self).ok()?;
        Some((&self.list.keys[position], &mut self.list.values[position]))
    }

    pub fn contains_key(&self, key: impl Locate<Self>) -> bool {
        key.locate(self).is_ok()
    }

    pub fn get_cloned(&self, key: impl Locate<Self>) -> Option<V>
    where
        V: Clone,
    {
        self.get(key).cloned()
    }

    /// Overwrites the value for an existing key or [`Handle`], returning the previous value.
    pub fn set(&mut self, key: impl Locate<Self>, value: V) -> Result<V> {
        let slot = self.try_get_mut(key)?;
        Ok(core::mem::replace(slot, value))
    }

    fn resolve(&self, key: impl Locate<Self>) -> Result<usize> {
        key.locate(self).map_err(|error| {
            log::debug!("indexed lookup among {} entries failed: {error}", self.len());
            error
        })
    }
}

impl<K, V, S> IndexedVecMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Appends a key-value pair, even if the key is already present.
    ///
    /// The index keeps pointing at the first occurrence of the key, so lookups keep returning
    /// the first value, exactly like [`VecMap::insert`].
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::IndexedVecMap;
    ///
    /// let mut map: IndexedVecMap<&str, i32> = IndexedVecMap::new();
    /// map.insert("key1", 1);
    /// let second = map.insert("key1", 2);
    ///
    /// assert_eq!(map.get("key1"), Some(&1));
    /// assert_eq!(map.get(second), Some(&2));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Handle {
        let position = self.list.len();
        self.index.entry(key.clone()).or_insert(position);
        self.list.push(key, value)
    }

    /// Returns a mutable reference to the value under `key`, appending `(key, default())`
    /// first if the key is missing.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let handle = self.insert(key, default());
                log::trace!("appended missing key at position {}", handle.position());
                handle.position()
            }
        };

        self.list.value_at_mut(position)
    }

    /// Returns a mutable reference to the value under `key`, appending `(key, V::default())`
    /// first if the key is missing. A miss grows the map by exactly one entry.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    pub fn handle<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        Some(Handle::new(position, self.list.generation))
    }

    pub fn reserve(&mut self, additional: usize) {
        self.list.reserve(additional);
        self.index.reserve(additional);
    }
}

impl<K, V, S> From<VecMap<K, V>> for IndexedVecMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from(list: VecMap<K, V>) -> Self {
        let mut index = HashMap::with_capacity_and_hasher(list.len(), S::default());
        for (position, key) in list.keys().enumerate() {
            index.entry(key.clone()).or_insert(position);
        }

        Self { list, index }
    }
}

impl<K, V, S> FromIterator<(K, V)> for IndexedVecMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut this = Self::default();
        this.extend(iter);
        this
    }
}

impl<K, V, S> Extend<(K, V)> for IndexedVecMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let pairs = iter.into_iter();

        let (lower, _) = pairs.size_hint();
        self.reserve(lower);

        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for IndexedVecMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, pairs: T) {
        self.extend(pairs.into_iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K, V, S> IntoIterator for IndexedVecMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = crate::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a IndexedVecMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut IndexedVecMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for IndexedVecMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            index: self.index.clone(),
        }
    }

    /// Handles taken from `self` before the call become stale.
    fn clone_from(&mut self, source: &Self) {
        self.list.clone_from(&source.list);
        self.index.clone_from(&source.index);
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for IndexedVecMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

/// The index is derived from the list, so only the lists are compared.
impl<K: PartialEq, V: PartialEq, S> PartialEq for IndexedVecMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<K: Eq, V: Eq, S> Eq for IndexedVecMap<K, V, S> {}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::RandomState;

    use crate::{vecmap, Error, IndexedVecMap, VecMap};

    type Map<K, V> = IndexedVecMap<K, V>;

    #[test]
    fn new_creates_empty_map() {
        let sut: Map<&str, &str> = Map::new();
        assert!(sut.is_empty(), "Expected the map to be empty");
    }

    #[test]
    fn custom_hasher_is_accepted() {
        let mut sut: IndexedVecMap<&str, i32, RandomState> =
            IndexedVecMap::with_capacity_and_hasher(4, RandomState::new());
        sut.insert("key1", 1);

        assert_eq!(sut.get("key1"), Some(&1));
    }

    #[test]
    fn insert_keeps_first_occurrence_indexed() {
        let mut sut: Map<&str, &str> = Map::new();
        sut.insert("key1", "value1");
        sut.insert("key2", "value2");
        sut.insert("key1", "value3");

        assert_eq!(sut.len(), 3);
        assert_eq!(sut.get("key1"), Some(&"value1"));
        assert_eq!(sut.handle("key1").map(|h| h.position()), Some(0));
    }

    #[test]
    fn get_or_insert_default_grows_by_one_on_miss() {
        let mut sut: Map<i32, char> = Map::new();

        assert_eq!(*sut.get_or_insert_default(3), char::default());
        assert_eq!(sut.len(), 1);

        *sut.get_or_insert_default(3) = 'x';
        assert_eq!(*sut.get_or_insert_default(3), 'x');
        assert_eq!(sut.len(), 1);
    }

    #[test]
    fn try_get_mut_on_empty_map_fails() {
        let mut sut: Map<i32, char> = Map::new();
        assert_eq!(sut.try_get_mut(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn clear_resets_index_and_stales_handles() {
        let mut sut: Map<&str, i32> = Map::new();
        let k1 = sut.insert("key1", 1);

        sut.clear();

        assert!(!sut.contains_key("key1"));
        assert_eq!(sut.try_get(k1), Err(Error::StaleHandle { position: 0 }));

        sut.insert("key2", 2);
        assert_eq!(sut.get("key2"), Some(&2));
        assert_eq!(sut.handle("key2").map(|h| h.position()), Some(0));
    }

    #[test]
    fn from_vecmap_indexes_first_occurrences() {
        let list = vecmap! { "key1" => 1, "key2" => 2, "key1" => 3 };
        let sut: Map<_, _> = Map::from(list);

        assert_eq!(sut.get("key1"), Some(&1));
        assert_eq!(sut.get("key2"), Some(&2));
        assert_eq!(sut.len(), 3);
    }

    #[test]
    fn set_and_get_cloned() {
        let mut sut: Map<&str, i32> = [("key1", 1)].into_iter().collect();

        assert_eq!(sut.set("key1", 5), Ok(1));
        assert_eq!(sut.get_cloned("key1"), Some(5));
        assert_eq!(sut.set("key2", 5), Err(Error::KeyNotFound));
    }

    #[test]
    fn equality_ignores_hasher_state() {
        let l: Map<&str, i32> = [("key1", 1), ("key2", 2)].into_iter().collect();
        let r = l.clone();

        assert_eq!(l, r);
        assert_eq!(l.as_list(), r.as_list());
        assert_eq!(format!("{:?}", l), r#"{"key1": 1, "key2": 2}"#);
    }

    #[test]
    fn into_list_preserves_order() {
        let sut: Map<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();

        assert_eq!(
            sut.into_list().into_iter().collect::<Vec<_>>(),
            [("b", 2), ("a", 1)]
        );
    }

    #[test]
    fn mutation_through_iterators() {
        let mut sut: Map<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();

        sut.values_mut().for_each(|v| *v += 1);
        for (_, v) in sut.iter_mut() {
            *v *= 10;
        }

        assert_eq!(sut.values().copied().collect::<Vec<_>>(), [20, 30]);
        assert_eq!(sut.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!((&sut).into_iter().count(), 2);
    }

    #[test]
    fn clone_from_invalidates_handles() {
        let mut linear = vecmap! { "old" => 1 };
        let mut sut: Map<&str, i32> = [("old", 1)].into_iter().collect();
        let linear_handle = linear.handle("old").expect("Expected a valid handle for 'old'");
        let handle = sut.handle("old").expect("Expected a valid handle for 'old'");

        linear.clone_from(&vecmap! { "new" => 2 });
        sut.clone_from(&[("new", 2)].into_iter().collect());

        assert_eq!(linear.get(linear_handle), None);
        assert_eq!(sut.get(handle), None, "Expected the handle to be stale after clone_from");
        assert_eq!(sut.try_get(handle), Err(Error::StaleHandle { position: 0 }));
        assert_eq!(sut.get("new"), Some(&2));
        assert!(!sut.contains_key("old"));
    }

    #[test]
    fn consuming_iterators() {
        let sut: Map<&str, i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

        assert_eq!(sut.clone().into_keys().collect::<Vec<_>>(), ["a", "b", "a"]);
        assert_eq!(sut.into_values().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn mutable_reference_iteration() {
        let mut sut: Map<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();

        for (_, v) in &mut sut {
            *v += 1;
        }

        assert_eq!(sut.get("a"), Some(&2));
        assert_eq!(sut.get("b"), Some(&3));
    }

    #[test]
    fn extend_from_borrowed_pairs_keeps_index_in_sync() {
        let source: VecMap<&str, i32> = vecmap! { "a" => 1, "b" => 2 };
        let mut sut: Map<&str, i32> = [("b", 0)].into_iter().collect();

        sut.extend(&source);

        assert_eq!(sut.len(), 3);
        assert_eq!(sut.get("a"), Some(&1));
        assert_eq!(sut.get("b"), Some(&0), "Expected the first pair to win");
        assert_eq!(sut.handle("a").map(|h| h.position()), Some(1));
    }

    #[test]
    fn get_key_value_mut_writes_through() {
        let mut sut: Map<&str, i32> = [("a", 1)].into_iter().collect();

        if let Some((k, v)) = sut.get_key_value_mut("a") {
            assert_eq!(*k, "a");
            *v = 7;
        }

        assert_eq!(sut.get("a"), Some(&7));
        assert!(sut.get_key_value_mut("b").is_none());
    }
}
