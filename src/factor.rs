//! Prime factorization by trial division, reporting every division step.

use crate::primality::is_prime64;
use num_integer::Integer;
use std::collections::BTreeMap;

/// One division event during factorization: `before / divisor == after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionStep {
    pub divisor: u64,
    pub before: u64,
    pub after: u64,
}

/// Result of [factorize64]: the multiset of prime factors, the ordered
/// division steps that produced them, and the residual working value.
///
/// The residual is 1 when the target was fully factored. A prime (or < 2)
/// target is left untouched: `factors` and `steps` are empty and `residual`
/// equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub factors: BTreeMap<u64, usize>,
    pub steps: Vec<DivisionStep>,
    pub residual: u64,
}

impl Factorization {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.residual == 1
    }
}

/// Factorize a u64 integer by dividing out ascending prime candidates.
///
/// Candidates run from 2 up to (not including) the original target; each one
/// classified prime by the oracle is divided out of the working value as long
/// as it divides evenly, with one [DivisionStep] recorded per division. The
/// candidate bound stays fixed at the original target rather than the
/// shrinking working value; the loop instead exits as soon as the working
/// value reaches 1, which leaves the reported step sequence unchanged.
pub fn factorize64(target: u64) -> Factorization {
    let mut residual = target;
    let mut factors = BTreeMap::new();
    let mut steps = Vec::new();

    for p in 2..target {
        if !is_prime64(p) {
            continue;
        }
        while Integer::is_multiple_of(&residual, &p) {
            let after = residual / p;
            steps.push(DivisionStep {
                divisor: p,
                before: residual,
                after,
            });
            *factors.entry(p).or_insert(0) += 1;
            residual = after;
        }
        if residual == 1 {
            break;
        }
    }

    Factorization {
        factors,
        steps,
        residual,
    }
}
