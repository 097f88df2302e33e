/// Builds a [`VecMap`](crate::VecMap) by appending each pair in order.
///
/// Repeated keys are all kept, as with [`VecMap::insert`](crate::VecMap::insert).
#[macro_export]
macro_rules! vecmap {
    () => {
        $crate::VecMap::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {
        <$crate::VecMap<_, _> as ::core::iter::FromIterator<_>>::from_iter([$(($k, $v)),+])
    };
}
