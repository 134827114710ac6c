//! Prime capacity selection.
//!
//! Bucket tables are sized to primes so that `hash % capacity` spreads
//! keys evenly even when the hash's low bits are weak. Primality is
//! tested by trial division, which is cheap for the table sizes involved
//! (at most √[`MAX_CAPACITY`] ≈ 46 341 divisions) and only runs on growth.

use crate::error::IndexError;

/// Largest supported table capacity. Prime.
pub const MAX_CAPACITY: usize = 0x7FEF_FFFD;

/// Smallest capacity a table is initialised with.
pub const MIN_CAPACITY: usize = 3;

/// Trial-division primality test.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest prime `>= min`, clamped to `[MIN_CAPACITY, MAX_CAPACITY]`.
pub fn next_prime(min: usize) -> usize {
    if min >= MAX_CAPACITY {
        return MAX_CAPACITY;
    }
    let mut candidate = min.max(MIN_CAPACITY) | 1;
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

/// Capacity to grow to from `old`: the next prime at or above `2 * old`.
///
/// Jumps straight to [`MAX_CAPACITY`] when doubling would overshoot it and
/// fails once the table is already at the maximum.
pub fn grown_capacity(old: usize) -> Result<usize, IndexError> {
    if old >= MAX_CAPACITY {
        return Err(IndexError::CapacityExceeded {
            requested: old.saturating_add(1),
            max: MAX_CAPACITY,
        });
    }
    let doubled = old.saturating_mul(2);
    if doubled > MAX_CAPACITY {
        return Ok(MAX_CAPACITY);
    }
    Ok(next_prime(doubled))
}
