//! Least common multiple built on an exhaustive common divisor scan.

use std::ops::RangeInclusive;

/// Greatest common divisor by exhaustive scan: test every integer from 1 up
/// to `min(a, b)` and keep the last one dividing both. Deliberately not
/// Euclid's algorithm.
///
/// Panics if either input is 0 (the scan would find no divisor at all).
pub fn gcd64(a: u64, b: u64) -> u64 {
    assert!(a > 0 && b > 0, "gcd scan requires positive inputs");
    let mut gcd = 1;
    for i in 1..=a.min(b) {
        if a % i == 0 && b % i == 0 {
            gcd = i;
        }
    }
    gcd
}

/// Least common multiple of two positive integers, `a * b / gcd64(a, b)`.
pub fn lcm64(a: u64, b: u64) -> u64 {
    a * b / gcd64(a, b)
}

/// Fold [lcm64] over an inclusive range, starting from accumulator 1:
/// the smallest number evenly divisible by every integer in the range.
pub fn smallest_multiple(range: RangeInclusive<u64>) -> u64 {
    range.fold(1, lcm64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use rand::random;

    #[test]
    fn gcd64_test() {
        assert_eq!(gcd64(12, 18), 6);
        assert_eq!(gcd64(7, 13), 1);
        assert_eq!(gcd64(1, 1), 1);
        assert_eq!(gcd64(20, 20), 20);

        // the scan agrees with Euclid
        for _ in 0..100 {
            let a = random::<u64>() % 2000 + 1;
            let b = random::<u64>() % 2000 + 1;
            assert_eq!(gcd64(a, b), a.gcd(&b), "gcd64({}, {})", a, b);
        }
    }

    #[test]
    #[should_panic]
    fn gcd64_zero_test() {
        gcd64(0, 5);
    }

    #[test]
    fn lcm64_test() {
        assert_eq!(lcm64(4, 6), 12);
        assert_eq!(lcm64(1, 1), 1);
        assert_eq!(lcm64(3, 7), 21);

        for _ in 0..100 {
            let a = random::<u64>() % 500 + 1;
            let b = random::<u64>() % 500 + 1;
            let l = lcm64(a, b);
            assert_eq!(l % a, 0);
            assert_eq!(l % b, 0);
        }
    }

    #[test]
    fn smallest_multiple_test() {
        assert_eq!(smallest_multiple(2..=10), 2520);
        assert_eq!(smallest_multiple(2..=20), 232792560);
        assert_eq!(smallest_multiple(1..=1), 1);

        // every range member divides the fold result
        let m = smallest_multiple(2..=20);
        for i in 2..=20 {
            assert_eq!(m % i, 0);
        }
    }
}
