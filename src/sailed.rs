use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use crate::{Error, Handle, IndexedVecMap, Result, VecMap};

/// Resolves a lookup argument, either a borrowed key or a [`Handle`], to a position in `M`.
pub trait Locate<M: ?Sized> {
    fn locate(self, map: &M) -> Result<usize>;
}

impl<Q, K, V> Locate<VecMap<K, V>> for &Q
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    fn locate(self, map: &VecMap<K, V>) -> Result<usize> {
        map.position(self).ok_or(Error::KeyNotFound)
    }
}

impl<K, V> Locate<VecMap<K, V>> for Handle {
    fn locate(self, map: &VecMap<K, V>) -> Result<usize> {
        map.check(self)
    }
}

impl<Q, K, V, S> Locate<IndexedVecMap<K, V, S>> for &Q
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    fn locate(self, map: &IndexedVecMap<K, V, S>) -> Result<usize> {
        map.index.get(self).copied().ok_or(Error::KeyNotFound)
    }
}

impl<K, V, S> Locate<IndexedVecMap<K, V, S>> for Handle {
    fn locate(self, map: &IndexedVecMap<K, V, S>) -> Result<usize> {
        map.list.check(self)
    }
}
