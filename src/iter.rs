use core::fmt;
use core::iter::{FusedIterator, Zip};
use std::{slice, vec};

/// Declares an iterator wrapping `$delegate` and forwards every iterator trait to it.
macro_rules! delegate_iterator {
    ($(#[$meta:meta])* $name:ident<$($params:tt),*> => $delegate:ty, $item:ty) => {
        $(#[$meta])*
        pub struct $name<$($params),*> {
            delegate: $delegate,
        }

        impl<$($params),*> $name<$($params),*> {
            pub(crate) fn from_delegate(delegate: $delegate) -> Self {
                Self { delegate }
            }
        }

        impl<$($params),*> Iterator for $name<$($params),*> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.delegate.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.delegate.size_hint()
            }

            fn count(self) -> usize {
                self.delegate.count()
            }

            fn last(mut self) -> Option<Self::Item> {
                self.delegate.next_back()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.delegate.nth(n)
            }
        }

        impl<$($params),*> DoubleEndedIterator for $name<$($params),*> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.delegate.next_back()
            }

            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.delegate.nth_back(n)
            }
        }

        impl<$($params),*> ExactSizeIterator for $name<$($params),*> {
            fn len(&self) -> usize {
                self.delegate.len()
            }
        }

        impl<$($params),*> FusedIterator for $name<$($params),*> {}
    };
}

delegate_iterator! {
    /// Iterator over `(&K, &V)` pairs, in insertion order.
    Iter<'a, K, V> => Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>, (&'a K, &'a V)
}

delegate_iterator! {
    /// Iterator over `(&K, &mut V)` pairs, in insertion order.
    IterMut<'a, K, V> => Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>, (&'a K, &'a mut V)
}

delegate_iterator! {
    /// Owning iterator over `(K, V)` pairs, in insertion order.
    IntoIter<K, V> => Zip<vec::IntoIter<K>, vec::IntoIter<V>>, (K, V)
}

delegate_iterator! {
    Keys<'a, K> => slice::Iter<'a, K>, &'a K
}

delegate_iterator! {
    IntoKeys<K> => vec::IntoIter<K>, K
}

delegate_iterator! {
    Values<'a, V> => slice::Iter<'a, V>, &'a V
}

delegate_iterator! {
    ValuesMut<'a, V> => slice::IterMut<'a, V>, &'a mut V
}

delegate_iterator! {
    IntoValues<V> => vec::IntoIter<V>, V
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<'a, K> Clone for Keys<'a, K> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<'a, V> Clone for Values<'a, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.delegate.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, K, V> fmt::Debug for IterMut<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.len())
            .finish_non_exhaustive()
    }
}

impl<K, V> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'a, K: fmt::Debug> fmt::Debug for Keys<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keys")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<K: fmt::Debug> fmt::Debug for IntoKeys<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoKeys")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<'a, V: fmt::Debug> fmt::Debug for Values<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<'a, V: fmt::Debug> fmt::Debug for ValuesMut<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValuesMut")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<V: fmt::Debug> fmt::Debug for IntoValues<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoValues")
            .field(&self.delegate.as_slice())
            .finish()
    }
}
