//! Seed hashing and the deterministic pseudo-random stream used by the initial fill.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn hash_seed(seed: &str) -> u64 {
    xxh3_64(seed.as_bytes())
}

pub(crate) fn seeded_rng(seed: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed))
}

/// Produces a fresh seed string from the clock, the process id, and a call counter.
pub fn generate_runtime_seed() -> String {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy).to_string()
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
