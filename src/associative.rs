use core::hash::{BuildHasher, Hash};

use crate::{Handle, IndexedVecMap, Result, VecMap};

/// The interface shared by [`VecMap`] and [`IndexedVecMap`].
///
/// Both containers preserve insertion order, append duplicates on [`Associative::insert`] and
/// resolve every key lookup to the first matching pair. They differ only in how a key is
/// found: a linear scan for `VecMap`, a hash index for `IndexedVecMap`.
///
/// ### Example
/// ```rust
/// use vecmap::{Associative, Error, IndexedVecMap, VecMap};
///
/// fn tally<M: Associative<&'static str, u32>>(map: &mut M, words: &[&'static str]) {
///     for &word in words {
///         *map.get_or_insert_default(word) += 1;
///     }
/// }
///
/// let words = ["a", "b", "a"];
///
/// let mut linear = VecMap::new();
/// tally(&mut linear, &words);
///
/// let mut indexed: IndexedVecMap<_, _> = IndexedVecMap::new();
/// tally(&mut indexed, &words);
///
/// assert_eq!(Associative::get(&linear, &"a"), Some(&2));
/// assert_eq!(Associative::get(&indexed, &"a"), Some(&2));
/// assert_eq!(Associative::try_get_mut(&mut indexed, &"c"), Err(Error::KeyNotFound));
/// ```
pub trait Associative<K, V> {
    /// Appends a pair unconditionally.
    fn insert(&mut self, key: K, value: V) -> Handle;

    /// Looks a key up, appending a defaulted value on a miss.
    fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default;

    /// Looks a key up, failing with [`Error::KeyNotFound`](crate::Error::KeyNotFound) on a miss.
    fn try_get_mut(&mut self, key: &K) -> Result<&mut V>;

    fn get(&self, key: &K) -> Option<&V>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq, V> Associative<K, V> for VecMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Handle {
        VecMap::insert(self, key, value)
    }

    fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        VecMap::get_or_insert_default(self, key)
    }

    fn try_get_mut(&mut self, key: &K) -> Result<&mut V> {
        VecMap::try_get_mut(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        VecMap::get(self, key)
    }

    fn len(&self) -> usize {
        VecMap::len(self)
    }
}

impl<K, V, S> Associative<K, V> for IndexedVecMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Handle {
        IndexedVecMap::insert(self, key, value)
    }

    fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        IndexedVecMap::get_or_insert_default(self, key)
    }

    fn try_get_mut(&mut self, key: &K) -> Result<&mut V> {
        IndexedVecMap::try_get_mut(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexedVecMap::get(self, key)
    }

    fn len(&self) -> usize {
        IndexedVecMap::len(self)
    }
}
