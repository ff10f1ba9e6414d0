use num_trial::PrimeOrdinals;

/// Report primes with their ordinal until the 10001st one is found.
fn main() {
    for (ordinal, prime) in PrimeOrdinals::new().take(10001) {
        println!("Prime no{}: {}", ordinal, prime);
    }
}
