use num_trial::smallest_multiple;

/// Print the least common multiple of all integers in [2, 20].
fn main() {
    println!("{}", smallest_multiple(2..=20));
}
