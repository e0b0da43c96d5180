use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Seeded random source threaded through every shuffle and pick in a battle.
#[derive(Debug, Clone)]
pub struct RngState {
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform Fisher-Yates permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}
