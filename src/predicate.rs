//! Compile-time predicates over const generics.
//!
//! A predicate is a zero-sized type carrying its answer as an associated constant, so the
//! answer is available wherever a `const` is, including `const` assertions:
//!
//! ```rust
//! use vecmap::predicate::{BoolConstant, IsSmallPrime};
//!
//! const _: () = assert!(IsSmallPrime::<2>::VALUE);
//! const _: () = assert!(!IsSmallPrime::<1>::VALUE);
//! ```

/// A type-level boolean.
pub trait BoolConstant {
    const VALUE: bool;
}

/// A type whose [`BoolConstant::VALUE`] is always `true`.
pub struct True;

/// A type whose [`BoolConstant::VALUE`] is always `false`.
pub struct False;

impl BoolConstant for True {
    const VALUE: bool = true;
}

impl BoolConstant for False {
    const VALUE: bool = false;
}

/// Answers whether `N` is a recognized small prime.
///
/// Only `2` is recognized. Every other value yields `false`, including larger primes.
pub struct IsSmallPrime<const N: i32>;

impl<const N: i32> BoolConstant for IsSmallPrime<N> {
    const VALUE: bool = is_small_prime(N);
}

/// The runtime form of [`IsSmallPrime`].
pub const fn is_small_prime(n: i32) -> bool {
    matches!(n, 2)
}

const _: () = assert!(IsSmallPrime::<2>::VALUE && !IsSmallPrime::<1>::VALUE);
