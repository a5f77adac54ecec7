use num_traits::{CheckedAdd, CheckedMul, Zero};

/// A value type that [`Matrix::multiply`](crate::Matrix::multiply) can
/// accumulate dot products over.
///
/// Integer types report overflow instead of panicking or wrapping.
/// Floating-point types follow IEEE arithmetic and never fail.
pub trait Element: Copy + Zero {
    /// Returns `sum + a * b`, or `None` if the result is not representable.
    fn checked_mul_add(sum: Self, a: Self, b: Self) -> Option<Self>;
}

macro_rules! checked_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn checked_mul_add(sum: Self, a: Self, b: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&sum, &CheckedMul::checked_mul(&a, &b)?)
                }
            }
        )*
    };
}

checked_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl Element for f32 {
    #[inline]
    fn checked_mul_add(sum: Self, a: Self, b: Self) -> Option<Self> {
        Some(sum + a * b)
    }
}

impl Element for f64 {
    #[inline]
    fn checked_mul_add(sum: Self, a: Self, b: Self) -> Option<Self> {
        Some(sum + a * b)
    }
}
