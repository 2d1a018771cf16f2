use crate::{EntropyError, EntropySource};
use rand::{RngCore, rng};

/// An `EntropySource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), seeded from the
/// OS and automatically reseeded periodically. It avoids a system call per
/// refill, which makes it the better choice for high-throughput generation.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free.
///
/// ⚠️ NOTE: The underlying `ThreadRng` is not `Send` or `Sync`. This type is a
/// zero-sized wrapper that does not store the RNG; it looks up the
/// thread-local generator on each call and therefore **is** thread-safe.
///
/// The thread-local RNG panics rather than erroring if its initial OS seeding
/// fails, so this source never returns `Err`.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl EntropySource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        rng().fill_bytes(dest);
        Ok(())
    }
}
