use num_traits::{AsPrimitive, Float, Num, NumCast};

/// Primitive numeric types the statistics functions can compute in.
///
/// Elements are converted into the computation type with `as` semantics
/// (via [`AsPrimitive`]): float to integer truncates toward zero and
/// saturates, and wide integers may lose precision in floats.
pub trait Numeric: Num + NumCast + Copy + PartialOrd + 'static {
    /// Converts an element count into this type.
    ///
    /// Returns `None` when the count is not representable, such as 256 as a
    /// `u8` or 128 as an `i8`.
    fn from_count(count: usize) -> Option<Self> {
        <Self as NumCast>::from(count)
    }

    /// Square root. Integer types return the integer part of the real root.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns `|self - other|` without underflowing unsigned types.
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn sqrt(self) -> Self {
                    Float::sqrt(self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn sqrt(self) -> Self {
                    let real: f64 = self.as_();
                    real.sqrt().as_()
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
