//! Complex numbers built from mixed-type parts.
//!
//! [`make_complex`] takes its component type from the real part and converts the imaginary
//! part into it, so `make_complex(1, 5.0)` is a `Complex<i32>`.

use core::fmt;

use num_traits::{AsPrimitive, NumCast, ToPrimitive};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Renders as `(re,im)`.
impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

/// Builds a `Complex<T1>`, converting the imaginary part with `as` semantics.
///
/// Float to integer conversions truncate toward zero and saturate at the bounds of `T1`.
///
/// ### Example
/// ```rust
/// use vecmap::complex::{make_complex, Complex};
///
/// assert_eq!(make_complex(4, 5), Complex::new(4, 5));
/// assert_eq!(make_complex(3.0, 2.0), Complex::new(3.0, 2.0));
/// assert_eq!(make_complex(1, 5.7), Complex::new(1, 5));
/// ```
pub fn make_complex<T1, T2>(re: T1, im: T2) -> Complex<T1>
where
    T1: Copy + 'static,
    T2: AsPrimitive<T1>,
{
    Complex::new(re, im.as_())
}

/// Like [`make_complex`], but returns `None` when the imaginary part does not fit in `T1`.
///
/// ### Example
/// ```rust
/// use vecmap::complex::{checked_make_complex, Complex};
///
/// assert_eq!(checked_make_complex(1u8, 5.0), Some(Complex::new(1, 5)));
/// assert_eq!(checked_make_complex(1u8, 300), None);
/// ```
pub fn checked_make_complex<T1, T2>(re: T1, im: T2) -> Option<Complex<T1>>
where
    T1: NumCast,
    T2: ToPrimitive,
{
    Some(Complex::new(re, <T1 as NumCast>::from(im)?))
}

#[cfg(test)]
mod tests {
    use super::{checked_make_complex, make_complex, Complex};

    #[test]
    fn component_type_follows_real_part() {
        let a: Complex<i32> = make_complex(4, 5);
        let b: Complex<f64> = make_complex(3.0, 2.0);
        let c: Complex<i32> = make_complex(1, 5.0);

        assert_eq!(a, Complex::new(4, 5));
        assert_eq!(b, Complex::new(3.0, 2.0));
        assert_eq!(c, Complex::new(1, 5));
    }

    #[test]
    fn float_to_int_truncates_and_saturates() {
        assert_eq!(make_complex(0i8, -2.9f64).im, -2);
        assert_eq!(make_complex(0u8, 1000.0f32).im, u8::MAX);
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert_eq!(checked_make_complex(0i8, 128i32), None);
        assert_eq!(checked_make_complex(0i8, -128i32), Some(Complex::new(0, -128)));
        assert_eq!(checked_make_complex(0u32, f64::NAN), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(make_complex(4, 5).to_string(), "(4,5)");
        assert_eq!(make_complex(3.0, 2.0).to_string(), "(3,2)");
    }
}
