//! Random selection used to choose a greeting shape.
//!
//! Any [`rand::Rng`] can serve as a [`Pick`] through the blanket implementation,
//! and tests can supply their own deterministic implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of index choices for picking one element out of `len`.
pub trait Pick {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> Pick for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Generator seeded from the wall clock at nanosecond resolution.
///
/// Not cryptographically secure and not reproducible.
pub fn time_seeded() -> StdRng {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    seeded(clock_seed(since_epoch))
}

/// Low 64 bits of the nanosecond count; they carry the fast-changing part of the clock.
fn clock_seed(since_epoch: Duration) -> u64 {
    (since_epoch.as_nanos() & u128::from(u64::MAX)) as u64
}

/// Generator with a fixed seed, for reproducible output.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
