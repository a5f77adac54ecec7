//! Integer parity predicates.

/// Returns true if `number` is divisible by two.
#[must_use]
pub fn is_even(number: i32) -> bool {
    number % 2 == 0
}

/// Returns true if `number` is not divisible by two.
///
/// Negative odd numbers are odd too.
#[must_use]
pub fn is_odd(number: i32) -> bool {
    number.rem_euclid(2) == 1
}
