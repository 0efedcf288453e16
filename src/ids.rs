// Identifier and render-seed generation.
//
// Excalidraw only needs ids that are unique within one document, so these are
// plain random numbers with no collision check. The generator is passed in
// explicitly so tests can fix the seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Six digit numeric id, used for the title and column labels.
    pub fn short_id(&mut self) -> String {
        self.rng.random_range(100_000..=999_999u32).to_string()
    }

    /// Nine digit value for `seed` and `versionNonce`.
    pub fn seed(&mut self) -> u64 {
        self.rng.random_range(100_000_000..=999_999_999u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        let mut ids = IdGenerator::seeded(7);
        for _ in 0..1000 {
            let id = ids.short_id();
            assert_eq!(id.len(), 6);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
            let s = ids.seed();
            assert!((100_000_000..=999_999_999).contains(&s));
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = IdGenerator::seeded(42);
        let mut b = IdGenerator::seeded(42);
        assert_eq!(a.short_id(), b.short_id());
        assert_eq!(a.seed(), b.seed());
    }
}
