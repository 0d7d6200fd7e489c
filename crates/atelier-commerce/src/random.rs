//! Injectable randomness for the checkout flow.
//!
//! Order ids and delivery estimates are the only non-deterministic inputs in
//! the whole flow. They are drawn through [`RandomSource`] so the surrounding
//! application decides where entropy comes from and tests can pin it down.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Characters an order-id suffix is drawn from.
const ORDER_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of the random values the checkout flow needs.
pub trait RandomSource {
    /// Draw `len` uppercase alphanumeric characters for an order-id suffix.
    fn order_suffix(&mut self, len: usize) -> String;

    /// Pick a day offset in `min..=max` for a delivery estimate.
    fn days_between(&mut self, min: i64, max: i64) -> i64;
}

/// Thread-local entropy, for interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn order_suffix(&mut self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| ORDER_ID_ALPHABET[rng.gen_range(0..ORDER_ID_ALPHABET.len())] as char)
            .collect()
    }

    fn days_between(&mut self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic source seeded once, for reproducible runs and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn order_suffix(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ORDER_ID_ALPHABET[self.0.gen_range(0..ORDER_ID_ALPHABET.len())] as char)
            .collect()
    }

    fn days_between(&mut self, min: i64, max: i64) -> i64 {
        self.0.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_shape() {
        let mut rng = ThreadRandom;
        let suffix = rng.order_suffix(9);
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .bytes()
            .all(|b| ORDER_ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        assert_eq!(a.order_suffix(9), b.order_suffix(9));
        assert_eq!(a.days_between(3, 7), b.days_between(3, 7));
    }

    #[test]
    fn test_days_in_range() {
        let mut rng = SeededRandom::new(42);
        for _ in 0..100 {
            let days = rng.days_between(3, 7);
            assert!((3..=7).contains(&days));
        }
    }
}
