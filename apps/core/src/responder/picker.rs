//! Reply selection sources.
//!
//! The classifier never owns randomness; it asks a [`ReplyPicker`] for an
//! index so tests can pin the choice.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Chooses one index out of `len` candidates. `len` is always at least 1.
pub trait ReplyPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    /// Picker over the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> ReplyPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always returns the same index, wrapped into range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPicker {
    index: usize,
}

impl FixedPicker {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ReplyPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.index % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_picker_wraps() {
        let mut picker = FixedPicker::new(5);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(10), 5);
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_random_picker_stays_in_range() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(7));
        for len in 1..=6 {
            for _ in 0..100 {
                assert!(picker.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut a = RandomPicker::new(StdRng::seed_from_u64(42));
        let mut b = RandomPicker::new(StdRng::seed_from_u64(42));
        let first: Vec<usize> = (0..20).map(|_| a.pick(4)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(4)).collect();
        assert_eq!(first, second);
    }
}
