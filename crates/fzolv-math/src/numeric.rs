use std::fmt;

use num_traits::Num;

mod sealed {
    pub trait Sealed {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Float,
}

/// Scalar element type of the vector types: any integral or floating-point primitive.
///
/// The trait is sealed, so the set of implementors is closed. Using it as a
/// bound is how a generic item says "numbers only":
///
/// ```compile_fail
/// use fzolv_math::Vec2;
///
/// let v: Vec2<String> = Vec2::default();
/// ```
pub trait Numeric:
    Num + Copy + PartialOrd + Default + fmt::Debug + fmt::Display + sealed::Sealed + 'static
{
    const KIND: NumericKind;

    fn is_integer() -> bool {
        Self::KIND == NumericKind::Integer
    }

    fn is_float() -> bool {
        Self::KIND == NumericKind::Float
    }

    /// Widen to `f64` with `as` semantics.
    fn to_f64(self) -> f64;

    /// Narrow from `f64` with `as` semantics: integers truncate toward zero
    /// and saturate at their bounds, NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    fn floor(self) -> Self;

    fn ceil(self) -> Self;

    /// Round to the nearest integer, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    fn round(self) -> Self;
}

macro_rules! numeric_integer_impl {
    ($($t: ident),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::Integer;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                // already integral
                #[inline]
                fn floor(self) -> Self {
                    self
                }

                #[inline]
                fn ceil(self) -> Self {
                    self
                }

                #[inline]
                fn round(self) -> Self {
                    self
                }
            }
        )*
    }
}

macro_rules! numeric_float_impl {
    ($($t: ident),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::Float;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn floor(self) -> Self {
                    <$t>::floor(self)
                }

                #[inline]
                fn ceil(self) -> Self {
                    <$t>::ceil(self)
                }

                #[inline]
                fn round(self) -> Self {
                    <$t>::round(self)
                }
            }
        )*
    }
}

numeric_integer_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_float_impl!(f32, f64);
