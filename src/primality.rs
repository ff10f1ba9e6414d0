//! Deterministic primality testing by trial division with a 6k±1 wheel.
//!
//! After discarding multiples of 2 and 3, every remaining prime has the form
//! 6k+5 or 6k+7, so the divisor loop only probes `i` and `i + 2` for
//! `i = 5, 11, 17, ...` while `i * i <= n`.

use num_integer::Integer;
use num_traits::{FromPrimitive, NumRef, RefNum};

/// Primality of an integer as decided by exact trial division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    Prime,
    Composite,
    /// 0 and 1 are neither prime nor composite; callers relying on the
    /// legacy predicate [is_prime64] get `true` for both instead.
    Undefined,
}

impl Primality {
    #[inline]
    pub fn is_prime(&self) -> bool {
        matches!(self, Primality::Prime)
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Primality::Composite)
    }
}

/// Test whether a u64 integer is prime by trial division.
///
/// NOTE: the `target <= 3` shortcut deliberately reports 0 and 1 as prime,
/// reproducing the legacy predicate this crate is built around. Use
/// [classify64] for the mathematically exact classification.
pub fn is_prime64(target: u64) -> bool {
    if target <= 3 {
        return true;
    }
    if target % 2 == 0 || target % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    // i <= target / i is the overflow-free form of i * i <= target
    while i <= target / i {
        if target % i == 0 || target % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Generic version of [is_prime64] over any [Integer] type. Agrees with
/// [is_prime64] on every u64 input, including the 0/1 deviation.
pub fn is_prime<T: Integer + FromPrimitive + NumRef + Clone>(target: &T) -> bool
where
    for<'r> &'r T: RefNum<T>,
{
    let two = T::from_u8(2).unwrap();
    let three = T::from_u8(3).unwrap();
    if target <= &three {
        return true;
    }
    if (target % &two).is_zero() || (target % &three).is_zero() {
        return false;
    }

    let six = T::from_u8(6).unwrap();
    let mut i = T::from_u8(5).unwrap();
    // same overflow-free division form as the specialized version
    while i <= target / &i {
        if (target % &i).is_zero() || (target % &(&i + &two)).is_zero() {
            return false;
        }
        i = i + &six;
    }
    true
}

/// Exact classification of a u64 integer, with 0 and 1 reported as
/// [Primality::Undefined] rather than folded into the prime branch.
pub fn classify64(target: u64) -> Primality {
    match target {
        0 | 1 => Primality::Undefined,
        _ if is_prime64(target) => Primality::Prime,
        _ => Primality::Composite,
    }
}
