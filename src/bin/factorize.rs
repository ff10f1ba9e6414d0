use anyhow::{Context, Result};
use num_trial::factorize64;
use std::io::BufRead;

/// Read one unsigned integer from stdin and report its trial division steps.
fn main() -> Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    let target: u64 = line
        .trim()
        .parse()
        .with_context(|| format!("not an unsigned integer: {:?}", line.trim()))?;

    println!("Factoring {}...", target);
    for step in factorize64(target).steps {
        println!("{} is prime.Factoring...", step.divisor);
        println!("{}/{}={}", step.before, step.divisor, step.after);
    }
    Ok(())
}
