//! Fibonacci numbers over arbitrary-precision integers.
//!
//! The sequence follows the convention F(0) = 0, F(1) = 1 and
//! F(n) = F(n - 1) + F(n - 2). Results are [BigUint]s, so no index overflows.
//!
//! - [compute_fibonacci] takes a signed index and rejects negative values with
//!   [FibonacciError::InvalidArgument].
//! - [fibonacci] takes an unsigned index and cannot fail.

use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::instrument;

pub mod error;

pub use error::FibonacciError;


/// The value type of the sequence.
pub type FibonacciNumber = BigUint;

/// Returns the `n`-th Fibonacci number, or [FibonacciError::InvalidArgument] if `n` is negative.
#[instrument(name = "compute_fibonacci", level = "trace", err(level = "debug"))]
pub fn compute_fibonacci(n: i64) -> Result<FibonacciNumber, FibonacciError> {
    let n = u64::try_from(n).map_err(|_| FibonacciError::InvalidArgument { n })?;
    Ok(fibonacci(n))
}

/// Returns the `n`-th Fibonacci number.
pub fn fibonacci(n: u64) -> FibonacciNumber {
    match n {
        0 => FibonacciNumber::zero(),
        1 => FibonacciNumber::one(),
        _ => {
            let mut a = FibonacciNumber::zero();
            let mut b = FibonacciNumber::one();
            for _ in 2..=n {
                // (a, b) = (b, a + b), reusing a's allocation for the sum
                a += &b;
                mem::swap(&mut a, &mut b);
            }
            b
        }
    }
}
