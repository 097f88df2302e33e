use core::fmt;

use crate::{Handle, VecMap};

/// A view into a single key of a [`VecMap`], obtained from [`VecMap::entry`].
///
/// The entry refers to the *first* pair with a matching key, so an occupied entry never
/// sees later duplicates appended through [`VecMap::insert`].
pub enum Entry<'a, K, V> {
    Vacant(VacantEntry<'a, K, V>),
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Self::Vacant(entry) => entry.insert(default),
            Self::Occupied(entry) => entry.into_mut(),
        }
    }

    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Self::Vacant(entry) => entry.insert(default()),
            Self::Occupied(entry) => entry.into_mut(),
        }
    }

    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Self::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
            Self::Occupied(entry) => entry.into_mut(),
        }
    }

    pub fn key(&self) -> &K {
        match self {
            Self::Vacant(entry) => entry.key(),
            Self::Occupied(entry) => entry.key(),
        }
    }

    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Self::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }

        self
    }
}

impl<'a, K, V: Default> Entry<'a, K, V> {
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vacant(entry) => f.debug_tuple("Entry").field(entry).finish(),
            Self::Occupied(entry) => f.debug_tuple("Entry").field(entry).finish(),
        }
    }
}

/// An entry whose key is already present.
pub struct OccupiedEntry<'a, K, V> {
    map: &'a mut VecMap<K, V>,
    position: usize,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(crate) fn new(map: &'a mut VecMap<K, V>, position: usize) -> Self {
        Self { map, position }
    }

    pub fn get(&self) -> &V {
        &self.map.values[self.position]
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.values[self.position]
    }

    /// Replaces the value, returning the previous one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    pub fn into_mut(self) -> &'a mut V {
        &mut self.map.values[self.position]
    }

    pub fn key(&self) -> &K {
        &self.map.keys[self.position]
    }

    pub fn handle(&self) -> Handle {
        Handle::new(self.position, self.map.generation)
    }
}

impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for OccupiedEntry<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry")
            .field("key", self.key())
            .field("value", self.get())
            .finish()
    }
}

/// An entry whose key is missing; inserting through it appends a new pair.
pub struct VacantEntry<'a, K, V> {
    map: &'a mut VecMap<K, V>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub(crate) fn new(map: &'a mut VecMap<K, V>, key: K) -> Self {
        Self { map, key }
    }

    pub fn insert(self, value: V) -> &'a mut V {
        let handle = self.map.push(self.key, value);
        log::trace!("appended missing key at position {}", handle.position());
        self.map.value_at_mut(handle.position())
    }

    /// Appends the pair and returns a [`Handle`] to it instead of a reference.
    pub fn insert_handle(self, value: V) -> Handle {
        let handle = self.map.push(self.key, value);
        log::trace!("appended missing key at position {}", handle.position());
        handle
    }

    pub fn into_key(self) -> K {
        self.key
    }

    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<'a, K: fmt::Debug, V> fmt::Debug for VacantEntry<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VacantEntry").field(self.key()).finish()
    }
}
