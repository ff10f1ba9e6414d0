mod factor;
mod lcm;
mod primality;
mod sequence;

pub use factor::{factorize64, DivisionStep, Factorization};
pub use lcm::{gcd64, lcm64, smallest_multiple};
pub use primality::{classify64, is_prime, is_prime64, Primality};
pub use sequence::{nth_prime, PrimeOrdinals};
