//! # vecmap
//!
//! `vecmap` is a Rust crate for small **vector maps**: key-value containers backed by two
//! parallel `Vec`s, one for keys and one for values, searched linearly.
//!
//! Items are stored in insertion order and are never removed one at a time, so every entry
//! keeps its position for the whole life of the map. That makes positions usable as
//! [`Handle`]s with `O(1)` access, while key lookups scan the keys from the front.
//!
//! ## Lookup flavours
//!
//! The map deliberately separates three kinds of lookup:
//! - **pure lookups** ([`VecMap::get`], [`VecMap::get_mut`], [`VecMap::contains_key`]) return an
//!   `Option` and never touch the structure of the map;
//! - **lookup-or-insert** ([`VecMap::get_or_insert_default`], [`VecMap::entry`]) appends a fresh
//!   entry on a miss, growing the map by exactly one;
//! - **fail-on-miss** ([`VecMap::try_get`], [`VecMap::try_get_mut`], [`VecMap::set`]) report a
//!   missing key as [`Error::KeyNotFound`].
//!
//! [`VecMap::insert`] appends unconditionally. Inserting a key twice keeps both pairs, and every
//! lookup resolves to the *first* one.
//!
//! Linear scans are hard to beat for a handful of keys, but they degrade as the map grows.
//! [`IndexedVecMap`] keeps the same interface (see [`Associative`]) and adds a hash index from
//! each key to its first position, trading a second copy of every key for `O(1)` lookups.
//!
//! ### Example
//! ```rust
//! use vecmap::{Error, VecMap};
//!
//! let mut map = VecMap::new();
//! map.insert(1, 'c');
//!
//! *map.get_or_insert_default(1) = 'e';
//! *map.get_or_insert_default(10) = 'g';
//!
//! assert_eq!(map.get(&1), Some(&'e'));
//! assert_eq!(map.get(&10), Some(&'g'));
//! assert_eq!(map.len(), 2);
//!
//! assert_eq!(map.try_get_mut(&2), Err(Error::KeyNotFound));
//! assert_eq!(map.len(), 2);
//! ```
//!
//! Besides the maps, the crate carries two small companions: [`predicate`], a compile-time
//! predicate over const generics, and [`complex`], a converting constructor for complex numbers.

mod associative;
mod entry;
mod error;
mod handle;
mod indexed;
mod iter;
mod macros;
mod sailed;

pub mod complex;
pub mod predicate;

pub use associative::Associative;
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::{Error, Result};
pub use handle::Handle;
pub use indexed::IndexedVecMap;
pub use iter::{IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};

use sailed::Locate;

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A vector map, backed by parallel `Vec`s of keys and values.
///
/// `VecMap` preserves insertion order and requires keys to implement only `Eq`. Every key
/// lookup is a linear scan in which the first matching key wins.
///
/// ### Example
/// ```rust
/// use vecmap::VecMap;
///
/// let mut map = VecMap::new();
/// map.insert("key1", "value1");
/// map.insert("key2", "value2");
///
/// assert_eq!(map.get("key1"), Some(&"value1"));
/// ```
///
/// Use `VecMap` for small datasets, or when the key type does not implement `Hash` or `Ord`.
pub struct VecMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    generation: u64,
}

impl<K, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<K, V> Default for VecMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> VecMap<K, V> {
    /// Creates a new, empty `VecMap`.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let map: VecMap<&str, &str> = VecMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            generation: 0,
        }
    }

    /// Creates a new `VecMap` with room for at least `capacity` pairs before reallocating.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let map: VecMap<&str, &str> = VecMap::with_capacity(10);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Appends a key-value pair to the `VecMap`.
    ///
    /// The pair is appended even if the key is already present. Lookups always resolve to the
    /// first pair with a matching key, so a later duplicate is only reachable through iteration
    /// or through the returned [`Handle`].
    ///
    /// ### Parameters
    /// - `key`: The key to append.
    /// - `value`: The value to associate with the key.
    ///
    /// ### Returns
    /// - A `Handle` addressing the appended pair.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", "value1");
    /// let second = map.insert("key1", "value2");
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("key1"), Some(&"value1"));
    /// assert_eq!(map.get(second), Some(&"value2"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Handle {
        self.push(key, value)
    }

    /// Returns an entry for the specified key, allowing for in-place lookup-or-insert.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    ///
    /// map.entry("key1").or_insert("value1");
    /// map.entry("key1").and_modify(|v| *v = "new_value");
    ///
    /// assert_eq!(map.get("key1"), Some(&"new_value"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<K, V>
    where
        K: Eq,
    {
        if let Some(position) = self.position(&key) {
            return Entry::Occupied(OccupiedEntry::new(self, position));
        }

        Entry::Vacant(VacantEntry::new(self, key))
    }

    /// Returns a mutable reference to the value under `key`, appending `(key, V::default())`
    /// first if the key is missing.
    ///
    /// This accessor always succeeds, but a miss grows the map by one entry: do not use it
    /// for pure lookups, use [`VecMap::get`] instead.
    /// Time complexity is O(n).
    ///
    /// ### Parameters
    /// - `key`: The key to look up or insert. Must implement `Eq`.
    ///
    /// ### Returns
    /// - A mutable reference to the existing value, or to the freshly defaulted one.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map: VecMap<i32, char> = VecMap::new();
    ///
    /// assert_eq!(*map.get_or_insert_default(1), '\0');
    /// assert_eq!(map.len(), 1);
    ///
    /// *map.get_or_insert_default(1) = 'e';
    /// assert_eq!(*map.get_or_insert_default(1), 'e');
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        K: Eq,
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Like [`VecMap::get_or_insert_default`], but the missing value is produced by `default`.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.get_or_insert_with("key1", Vec::new).push(1);
    /// map.get_or_insert_with("key1", Vec::new).push(2);
    ///
    /// assert_eq!(map.get("key1"), Some(&vec![1, 2]));
    /// ```
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        K: Eq,
        F: FnOnce() -> V,
    {
        self.entry(key).or_insert_with(default)
    }

    /// Retrieves a reference to the value for a key or a [`Handle`], failing on a miss.
    ///
    /// ### Returns
    /// - `Ok(&V)` if the key exists in the `VecMap`.
    /// - `Err(Error::KeyNotFound)` if no key matches.
    /// - `Err(Error::StaleHandle { .. })` if a handle outlived a [`VecMap::clear`].
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::{Error, VecMap};
    ///
    /// let mut map = VecMap::new();
    /// map.insert(1, 'c');
    ///
    /// assert_eq!(map.try_get(&1), Ok(&'c'));
    /// assert_eq!(map.try_get(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn try_get(&self, key: impl Locate<Self>) -> Result<&V> {
        let position = self.resolve(key)?;
        Ok(&self.values[position])
    }

    /// Retrieves a mutable reference to the value for a key or a [`Handle`], failing on a miss.
    ///
    /// Unlike [`VecMap::get_or_insert_default`], a miss leaves the map untouched.
    /// Time complexity is O(n) for keys and O(1) for handles.
    ///
    /// ### Returns
    /// - `Ok(&mut V)` if the key exists in the `VecMap`.
    /// - `Err(Error::KeyNotFound)` if no key matches.
    /// - `Err(Error::StaleHandle { .. })` if a handle outlived a [`VecMap::clear`].
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::{Error, VecMap};
    ///
    /// let mut map = VecMap::new();
    /// map.insert(1, 'c');
    ///
    /// *map.try_get_mut(&1)? = 'e';
    /// assert_eq!(map.get(&1), Some(&'e'));
    ///
    /// assert_eq!(map.try_get_mut(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_get_mut(&mut self, key: impl Locate<Self>) -> Result<&mut V> {
        let position = self.resolve(key)?;
        Ok(&mut self.values[position])
    }

    /// Retrieves a reference to the value associated with a key or a [`Handle`].
    ///
    /// This is a pure lookup: a miss returns `None` and never grows the map.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// let k1 = map.insert("key1", "value1");
    ///
    /// assert_eq!(map.get("key1"), Some(&"value1"));
    /// assert_eq!(map.get(k1), Some(&"value1"));
    /// assert!(map.get("key2").is_none());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get(&self, key: impl Locate<Self>) -> Option<&V> {
        let position = key.locate(self).ok()?;
        Some(&self.values[position])
    }

    /// Retrieves a mutable reference to the value associated with a key or a [`Handle`].
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", 1);
    ///
    /// if let Some(value) = map.get_mut("key1") {
    ///     *value += 1;
    /// }
    ///
    /// assert_eq!(map.get("key1"), Some(&2));
    /// assert!(map.get_mut("key2").is_none());
    /// ```
    pub fn get_mut(&mut self, key: impl Locate<Self>) -> Option<&mut V> {
        let position = key.locate(self).ok()?;
        Some(&mut self.values[position])
    }

    /// Retrieves references to the stored key and its value.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", "value1");
    ///
    /// assert_eq!(map.get_key_value("key1"), Some((&"key1", &"value1")));
    /// assert!(map.get_key_value("key2").is_none());
    /// ```
    pub fn get_key_value(&self, key: impl Locate<Self>) -> Option<(&K, &V)> {
        let position = key.locate(self).ok()?;
        Some((&self.keys[position], &self.values[position]))
    }

    /// Retrieves the stored key and a mutable reference to its value.
    pub fn get_key_value_mut(&mut self, key: impl Locate<Self>) -> Option<(&K, &mut V)> {
        let position = key.locate(self).ok()?;
        Some((&self.keys[position], &mut self.values[position]))
    }

    /// Checks whether a key is present, or whether a [`Handle`] is still valid.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// let k1 = map.insert("key1", "value1");
    ///
    /// assert!(map.contains_key("key1"));
    /// assert!(map.contains_key(k1));
    /// assert!(!map.contains_key("key2"));
    ///
    /// map.clear();
    /// assert!(!map.contains_key(k1));
    /// ```
    pub fn contains_key(&self, key: impl Locate<Self>) -> bool {
        key.locate(self).is_ok()
    }

    /// Returns a copy of the value for a key or a [`Handle`].
    ///
    /// The copy carries no borrow of the map, so the map may be mutated while it is held.
    pub fn get_cloned(&self, key: impl Locate<Self>) -> Option<V>
    where
        V: Clone,
    {
        self.get(key).cloned()
    }

    /// Overwrites the value for an existing key or [`Handle`], returning the previous value.
    ///
    /// A miss is reported as an error and nothing is inserted.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::{Error, VecMap};
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", 1);
    ///
    /// assert_eq!(map.set("key1", 2), Ok(1));
    /// assert_eq!(map.get_cloned("key1"), Some(2));
    /// assert_eq!(map.set("key2", 3), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: impl Locate<Self>, value: V) -> Result<V> {
        let slot = self.try_get_mut(key)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Resolves a key to a [`Handle`] for its first occurrence.
    ///
    /// The handle remains valid until the map is cleared, and accessing the entry through it
    /// skips the linear scan.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", "value1");
    ///
    /// let k1 = map.handle("key1").unwrap();
    /// map.insert("key2", "value2");
    ///
    /// assert_eq!(k1.position(), 0);
    /// assert_eq!(map.get(k1), Some(&"value1"));
    /// assert!(map.handle("key3").is_none());
    /// ```
    pub fn handle<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let position = self.position(key)?;
        Some(Handle::new(position, self.generation))
    }

    pub(crate) fn push(&mut self, key: K, value: V) -> Handle {
        let position = self.keys.len();
        self.keys.push(key);
        self.values.push(value);
        Handle::new(position, self.generation)
    }

    pub(crate) fn value_at_mut(&mut self, position: usize) -> &mut V {
        &mut self.values[position]
    }

    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.keys.iter().position(|k| k.borrow() == key)
    }

    pub(crate) fn check(&self, handle: Handle) -> Result<usize> {
        if handle.generation == self.generation && handle.position < self.len() {
            Ok(handle.position)
        } else {
            Err(Error::StaleHandle {
                position: handle.position,
            })
        }
    }

    fn resolve(&self, key: impl Locate<Self>) -> Result<usize> {
        key.locate(self).map_err(|error| {
            log::debug!("lookup among {} entries failed: {error}", self.len());
            error
        })
    }
}

impl<K, V> Extend<(K, V)> for VecMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let pairs = iter.into_iter();

        let (lower, _) = pairs.size_hint();
        self.reserve(lower);

        for (key, value) in pairs {
            self.push(key, value);
        }
    }
}

impl<'a, K: Clone, V: Clone> Extend<(&'a K, &'a V)> for VecMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, pairs: T) {
        self.extend(pairs.into_iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K, V> VecMap<K, V> {
    /// Shrinks the capacity of both backing vectors as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Shrinks the capacity to at least `min_capacity`, never below the current length.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.keys.shrink_to(min_capacity);
        self.values.shrink_to(min_capacity);
    }

    /// Reserves capacity for at least `additional` more pairs.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map: VecMap<&str, i32> = VecMap::new();
    /// map.reserve(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
    }

    /// Reserves capacity for exactly `additional` more pairs, without over-allocating.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.keys.reserve_exact(additional);
        self.values.reserve_exact(additional);
    }

    /// Returns the number of pairs the `VecMap` can hold without reallocating.
    pub fn capacity(&self) -> usize {
        usize::min(self.keys.capacity(), self.values.capacity())
    }

    /// Returns the number of pairs in the `VecMap`, duplicates included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the `VecMap` holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes all pairs, keeping the allocated capacity.
    ///
    /// Every [`Handle`] taken before the call becomes stale.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::{Error, VecMap};
    ///
    /// let mut map = VecMap::new();
    /// let k1 = map.insert("key1", 1);
    ///
    /// map.clear();
    /// map.insert("key1", 2);
    ///
    /// assert!(matches!(map.try_get(k1), Err(Error::StaleHandle { position: 0 })));
    /// assert_eq!(map.get("key1"), Some(&2));
    /// ```
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        self.generation = self.generation.wrapping_add(1);
        log::debug!("cleared map, now at generation {}", self.generation);
    }

    /// Returns an iterator over the keys, in insertion order.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", 1);
    /// map.insert("key2", 2);
    ///
    /// let keys: Vec<_> = map.keys().collect();
    /// assert_eq!(&keys[..], &[&"key1", &"key2"]);
    /// ```
    pub fn keys(&self) -> Keys<K> {
        Keys::from_delegate(self.keys.iter())
    }

    /// Consumes the `VecMap`, returning its keys in insertion order.
    pub fn into_keys(self) -> IntoKeys<K> {
        IntoKeys::from_delegate(self.keys.into_iter())
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> Values<V> {
        Values::from_delegate(self.values.iter())
    }

    /// Returns an iterator over mutable references to the values, in insertion order.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", 1);
    /// map.insert("key2", 2);
    ///
    /// for value in map.values_mut() {
    ///     *value *= 2;
    /// }
    ///
    /// let values: Vec<_> = map.values().collect();
    /// assert_eq!(&values[..], &[&2, &4]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<V> {
        ValuesMut::from_delegate(self.values.iter_mut())
    }

    /// Consumes the `VecMap`, returning its values in insertion order.
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues::from_delegate(self.values.into_iter())
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    ///
    /// Duplicate keys appended through [`VecMap::insert`] are all yielded.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", 1);
    /// map.insert("key2", 2);
    /// map.insert("key1", 3);
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(&pairs[..], &[(&"key1", &1), (&"key2", &2), (&"key1", &3)]);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter::from_delegate(self.keys.iter().zip(self.values.iter()))
    }

    /// Returns an iterator over the pairs with mutable references to the values.
    ///
    /// ### Example
    /// ```rust
    /// use vecmap::VecMap;
    ///
    /// let mut map = VecMap::new();
    /// map.insert("key1", 1);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value += 10;
    /// }
    ///
    /// assert_eq!(map.get("key1"), Some(&11));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut::from_delegate(self.keys.iter().zip(self.values.iter_mut()))
    }
}

impl<K, V> IntoIterator for VecMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_delegate(self.keys.into_iter().zip(self.values))
    }
}

impl<'a, K, V> IntoIterator for &'a VecMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut VecMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Clone, V: Clone> Clone for VecMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
            generation: self.generation,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.keys.clone_from(&source.keys);
        self.values.clone_from(&source.values);
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for VecMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same pairs in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for VecMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq> Eq for VecMap<K, V> {}

impl<K: Hash, V: Hash> Hash for VecMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|pair| pair.hash(state));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{BuildHasher, BuildHasherDefault};

    use crate::{vecmap, Error, VecMap};

    #[test]
    fn vecmap_macro() {
        let sut = vecmap! {
            "k1" => "v1",
            "k2" => "v2",
            "k1" => "w1",
        };

        assert_eq!(
            sut.into_iter().collect::<Vec<_>>(),
            [("k1", "v1"), ("k2", "v2"), ("k1", "w1")]
        );
    }

    #[test]
    fn empty_vecmap_macro() {
        let sut: VecMap<i32, i32> = vecmap! {};
        assert!(sut.is_empty(), "Expected the map to be empty");
    }

    #[test]
    fn hash() {
        let hasher_builder = BuildHasherDefault::<DefaultHasher>::default();

        let l = vecmap! { "x" => 1, "y" => 2 };
        let mut r = vecmap! { "x" => 1, "y" => 2 };
        assert_eq!(hasher_builder.hash_one(&l), hasher_builder.hash_one(&r));

        r.insert("z", 3);
        assert_ne!(hasher_builder.hash_one(&l), hasher_builder.hash_one(&r));
    }

    #[test]
    fn new_creates_empty_vecmap() {
        let sut: VecMap<&str, &str> = VecMap::new();
        assert!(sut.is_empty(), "Expected the map to be empty");
        assert_eq!(sut.len(), 0, "Expected the length of the map to be 0");
    }

    #[test]
    fn default_creates_empty_vecmap() {
        let sut: VecMap<&str, &str> = VecMap::default();
        assert!(sut.is_empty(), "Expected the map to be empty");
        assert_eq!(sut.len(), 0, "Expected the length of the map to be 0");
    }

    #[test]
    fn with_capacity_creates_vecmap_with_specified_capacity() {
        let capacity = 10;
        let sut: VecMap<&str, &str> = VecMap::with_capacity(capacity);
        assert!(sut.is_empty(), "Expected the map to be empty");
        assert!(
            sut.capacity() >= capacity,
            "Expected the map to have a capacity of at least {}",
            capacity
        );
    }

    #[test]
    fn insert_appends_duplicate_keys() {
        let mut sut = VecMap::new();
        sut.insert("key1", "value1");
        sut.insert("key1", "value2");

        assert_eq!(sut.len(), 2, "Expected both pairs to be stored");
        assert_eq!(
            sut.get("key1"),
            Some(&"value1"),
            "Expected the first inserted pair to win"
        );
    }

    #[test]
    fn insert_returns_handle_to_appended_pair() {
        let mut sut = VecMap::new();
        let first = sut.insert("key1", "value1");
        let second = sut.insert("key1", "value2");

        assert_eq!(first.position(), 0);
        assert_eq!(second.position(), 1);
        assert_eq!(sut.get(second), Some(&"value2"));
        assert_eq!(sut.get_key_value(second), Some((&"key1", &"value2")));
    }

    #[test]
    fn get_or_insert_default_on_fresh_map_grows_by_one() {
        let mut sut: VecMap<i32, char> = VecMap::new();

        let value = sut.get_or_insert_default(7);
        assert_eq!(*value, char::default(), "Expected a defaulted value");
        assert_eq!(sut.len(), 1, "Expected the map to grow by exactly one");
    }

    #[test]
    fn get_or_insert_default_observes_previous_write() {
        let mut sut: VecMap<&str, i32> = VecMap::new();

        *sut.get_or_insert_default("key1") = 42;
        assert_eq!(
            *sut.get_or_insert_default("key1"),
            42,
            "Expected the second call to observe the overwritten value"
        );
        assert_eq!(sut.len(), 1);
    }

    #[test]
    fn get_or_insert_default_updates_first_duplicate() {
        let mut sut = VecMap::new();
        sut.insert(1, 'a');
        sut.insert(1, 'b');

        *sut.get_or_insert_default(1) = 'z';

        assert_eq!(
            sut.into_iter().collect::<Vec<_>>(),
            [(1, 'z'), (1, 'b')],
            "Expected only the first pair to be updated"
        );
    }

    #[test]
    fn mixed_insert_and_lookup_scenario() {
        let mut sut = VecMap::new();
        sut.insert(1, 'c');
        *sut.get_or_insert_default(1) = 'e';
        *sut.get_or_insert_default(10) = 'g';

        assert_eq!(sut.get(&1), Some(&'e'));
        assert_eq!(sut.get(&10), Some(&'g'));
        assert_eq!(sut.len(), 2);
    }

    #[test]
    fn get_or_insert_with_only_calls_default_on_miss() {
        let mut sut = VecMap::new();
        sut.insert("key1", 1);

        *sut.get_or_insert_with("key1", || panic!("default must not run on a hit")) += 1;
        *sut.get_or_insert_with("key2", || 10) += 1;

        assert_eq!(sut.get("key1"), Some(&2));
        assert_eq!(sut.get("key2"), Some(&11));
    }

    #[test]
    fn try_get_mut_on_empty_map_fails() {
        let mut sut: VecMap<i32, char> = VecMap::new();
        assert_eq!(sut.try_get_mut(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn try_get_mut_miss_leaves_map_untouched() {
        let mut sut = VecMap::new();
        sut.insert(1, 'c');

        assert_eq!(sut.try_get_mut(&2), Err(Error::KeyNotFound));
        assert_eq!(sut.len(), 1, "Expected the failed lookup not to grow the map");
    }

    #[test]
    fn try_get_mut_allows_overwriting() {
        let mut sut = VecMap::new();
        sut.insert("key1", "value1");

        if let Ok(value) = sut.try_get_mut("key1") {
            *value = "new_value";
        }

        assert_eq!(sut.try_get("key1"), Ok(&"new_value"));
    }

    #[test]
    fn get_nonexistent_key() {
        let sut: VecMap<&str, &str> = VecMap::new();

        let result = sut.get("nonexistent");
        assert!(result.is_none(), "Expected None for a non-existent key");
        assert!(sut.is_empty(), "Expected a pure lookup not to grow the map");
    }

    #[test]
    fn get_key_value_mut_existing_key() {
        let mut sut = VecMap::new();
        sut.insert("key1", 1);

        if let Some((key, value)) = sut.get_key_value_mut("key1") {
            assert_eq!(key, &"key1", "Expected 'key1' as the retrieved key");
            *value = 2;
        } else {
            panic!("Expected to retrieve key-value pair for 'key1'");
        }

        assert_eq!(sut.get("key1"), Some(&2));
    }

    #[test]
    fn handle_survives_growth() {
        let mut sut = VecMap::new();
        sut.insert("key1", "value1");
        let k1 = sut
            .handle("key1")
            .expect("Expected a valid handle for 'key1'");

        for i in 0..100 {
            sut.insert("filler", if i % 2 == 0 { "even" } else { "odd" });
        }

        assert_eq!(sut.get(k1), Some(&"value1"));
        assert!(sut.contains_key(k1));
    }

    #[test]
    fn handle_is_stale_after_clear() {
        let mut sut = VecMap::new();
        let k1 = sut.insert("key1", "value1");

        sut.clear();
        sut.insert("key1", "value2");

        assert_eq!(sut.try_get(k1), Err(Error::StaleHandle { position: 0 }));
        assert!(sut.get(k1).is_none());
        assert_eq!(sut.set(k1, "value3"), Err(Error::StaleHandle { position: 0 }));
    }

    #[test]
    fn handle_out_of_bounds_is_stale() {
        let mut other = VecMap::new();
        other.insert("a", 1);
        let handle = other.insert("b", 2);

        let sut: VecMap<&str, i32> = VecMap::new();
        assert_eq!(sut.try_get(handle), Err(Error::StaleHandle { position: 1 }));
    }

    #[test]
    fn entry_insert_new_key() {
        let mut sut = VecMap::new();

        sut.entry("key1").or_insert("value1");

        assert_eq!(
            sut.get("key1"),
            Some(&"value1"),
            "Expected 'key1' to be inserted with 'value1'"
        );
    }

    #[test]
    fn entry_insert_if_not_exists() {
        let mut sut = VecMap::new();

        sut.entry("key1").or_insert("value1");
        sut.entry("key1").or_insert("other_value");

        assert_eq!(
            sut.get("key1"),
            Some(&"value1"),
            "Expected 'key1' to remain 'value1' after re-insertion attempt"
        );
        assert_eq!(sut.len(), 1);
    }

    #[test]
    fn get_cloned_and_set() {
        let mut sut = VecMap::new();
        sut.insert("key1", String::from("value1"));

        let copy = sut.get_cloned("key1");
        sut.insert("key2", String::from("value2"));

        assert_eq!(copy.as_deref(), Some("value1"));
        assert_eq!(
            sut.set("key1", String::from("new_value")),
            Ok(String::from("value1"))
        );
        assert_eq!(sut.get("key1").map(String::as_str), Some("new_value"));
        assert_eq!(sut.set("key3", String::new()), Err(Error::KeyNotFound));
    }

    #[test]
    fn extend_appends_items() {
        let mut sut = VecMap::new();
        sut.insert("key1", 1);

        sut.extend(vec![("key2", 2), ("key1", 3)]);

        assert_eq!(sut.len(), 3);
        assert_eq!(sut.get("key1"), Some(&1));
        assert_eq!(sut.get("key2"), Some(&2));
    }

    #[test]
    fn extend_with_ref_items() {
        let source = vecmap! { "key1" => 1, "key2" => 2 };
        let mut sut = VecMap::new();

        sut.extend(&source);

        assert_eq!(sut, source);
    }

    #[test]
    fn shrink_to_fit_reduces_capacity() {
        let mut sut = VecMap::with_capacity(100);
        sut.insert("key1", 1);
        sut.insert("key2", 2);

        sut.shrink_to_fit();

        assert!(sut.capacity() >= sut.len());
        assert!(sut.capacity() < 100);
    }

    #[test]
    fn shrink_to_keeps_requested_minimum() {
        let mut sut = VecMap::with_capacity(100);
        sut.insert("key1", 1);

        sut.shrink_to(10);

        assert!(sut.capacity() >= 10);
    }

    #[test]
    fn reserve_exact_increases_capacity_when_needed() {
        let mut sut: VecMap<&str, i32> = VecMap::new();
        sut.reserve_exact(10);
        assert!(sut.capacity() >= 10);
    }

    #[test]
    fn clear_leaves_capacity_untouched() {
        let mut sut = VecMap::with_capacity(10);
        sut.insert("key1", 1);
        let capacity = sut.capacity();

        sut.clear();

        assert!(sut.is_empty());
        assert_eq!(sut.capacity(), capacity);
    }

    #[test]
    fn keys_and_values_follow_insertion_order() {
        let sut = vecmap! { "key2" => 2, "key1" => 1, "key3" => 3 };

        assert_eq!(sut.keys().collect::<Vec<_>>(), [&"key2", &"key1", &"key3"]);
        assert_eq!(sut.values().collect::<Vec<_>>(), [&2, &1, &3]);
    }

    #[test]
    fn into_keys_and_into_values_consume_the_map() {
        let sut = vecmap! { "key1" => 1, "key2" => 2 };
        assert_eq!(sut.clone().into_keys().collect::<Vec<_>>(), ["key1", "key2"]);
        assert_eq!(sut.into_values().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn iter_mut_allows_modifying_values() {
        let mut sut = vecmap! { "key1" => 1, "key2" => 2 };

        for (_, value) in &mut sut {
            *value *= 10;
        }

        assert_eq!(
            (&sut).into_iter().collect::<Vec<_>>(),
            [(&"key1", &10), (&"key2", &20)]
        );
    }

    #[test]
    fn iterators_are_double_ended_and_exact_size() {
        let sut = vecmap! { "key1" => 1, "key2" => 2, "key3" => 3 };

        let mut iter = sut.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some((&"key3", &3)));
        assert_eq!(iter.next(), Some((&"key1", &1)));
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn clone_creates_an_exact_copy() {
        let sut = vecmap! { "key1" => 1, "key2" => 2 };
        let copy = sut.clone();

        assert_eq!(sut, copy);
    }

    #[test]
    fn clone_from_invalidates_handles() {
        let mut sut = vecmap! { "key1" => 1 };
        let k1 = sut.handle("key1").expect("Expected a valid handle for 'key1'");

        sut.clone_from(&vecmap! { "key2" => 2 });

        assert!(!sut.contains_key(k1));
    }

    #[test]
    fn lists_with_different_order_are_not_equal() {
        let l = vecmap! { "key1" => 1, "key2" => 2 };
        let r = vecmap! { "key2" => 2, "key1" => 1 };

        assert_ne!(l, r);
    }

    #[test]
    fn debug_format_preserves_order_of_insertion() {
        let sut = vecmap! { "key2" => 2, "key1" => 1 };
        let debug_output = format!("{:?}", sut);

        assert_eq!(debug_output, r#"{"key2": 2, "key1": 1}"#);
    }

    #[test]
    fn debug_format_displays_empty_map() {
        let sut: VecMap<&str, i32> = VecMap::new();
        assert_eq!(format!("{:?}", sut), "{}");
    }
}
