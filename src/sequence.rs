//! Sequential prime enumeration driven by the trial division oracle.

use crate::primality::is_prime64;

/// Infinite iterator over ascending primes paired with their 1-based ordinal.
///
/// Candidates start at 2 and advance by 1, so the oracle's 0/1 shortcut never
/// enters the stream. Each item is `(ordinal, prime)`: `(1, 2)`, `(2, 3)`,
/// `(3, 5)`, ...
#[derive(Debug, Clone)]
pub struct PrimeOrdinals {
    candidate: u64,
    ordinal: usize,
}

impl PrimeOrdinals {
    #[inline]
    pub fn new() -> Self {
        PrimeOrdinals {
            candidate: 2,
            ordinal: 0,
        }
    }
}

impl Default for PrimeOrdinals {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeOrdinals {
    type Item = (usize, u64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let n = self.candidate;
            self.candidate += 1;
            if is_prime64(n) {
                self.ordinal += 1;
                return Some((self.ordinal, n));
            }
        }
    }
}

/// Return the n-th prime (1-based), counting from 2.
///
/// Panics if `n` is 0.
pub fn nth_prime(n: usize) -> u64 {
    assert!(n > 0, "prime ordinals are 1-based");
    // the stream is infinite, nth always yields
    PrimeOrdinals::new().nth(n - 1).map(|(_, p)| p).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_ordinals_test() {
        let head: Vec<_> = PrimeOrdinals::new().take(5).collect();
        assert_eq!(head, vec![(1, 2), (2, 3), (3, 5), (4, 7), (5, 11)]);

        // ordinals count every prime exactly once
        for (i, (ordinal, p)) in PrimeOrdinals::new().take(100).enumerate() {
            assert_eq!(ordinal, i + 1);
            assert!(is_prime64(p));
        }
    }

    #[test]
    fn nth_prime_test() {
        assert_eq!(nth_prime(1), 2);
        assert_eq!(nth_prime(2), 3);
        assert_eq!(nth_prime(500), 3571);
        assert_eq!(nth_prime(10001), 104743);
    }

    #[test]
    #[should_panic]
    fn nth_prime_zero_test() {
        nth_prime(0);
    }
}
