use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Per-step random state for the collision pass.
///
/// Each grid cell draws from its own ChaCha sub-stream, derived from the
/// master seed, the step index and the cell index. Distinct cells therefore
/// never share generator state, so a parallel pass over cells would produce
/// the same trajectories as the sequential one.
#[derive(Debug, Clone, Copy)]
pub struct StepStreams {
    seed: u64,
    step: u64,
}

impl StepStreams {
    pub fn new(seed: u64, step: u64) -> Self {
        Self { seed, step }
    }

    /// Sub-stream for one grid cell.
    pub fn cell_stream(&self, cell_index: usize) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.lane_seed(cell_index as u64 + 1))
    }

    /// Sub-stream for strategies that pair across the whole ensemble.
    pub fn ensemble_stream(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.lane_seed(0))
    }

    fn lane_seed(&self, lane: u64) -> u64 {
        mix(mix(mix(self.seed).wrapping_add(self.step)).wrapping_add(lane))
    }
}

/// SplitMix64 finalizer, decorrelates nearby (seed, step, lane) triples.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
