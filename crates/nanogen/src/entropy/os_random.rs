use crate::{EntropyError, EntropySource};
use rand::{TryRngCore, rngs::OsRng};

/// An `EntropySource` that reads directly from the operating system CSPRNG
/// (`getrandom` on Linux, `BCryptGenRandom` on Windows, and so on).
///
/// Every refill is a system call, and any failure reported by the OS is
/// propagated as an [`EntropyError`]. This is the default source of
/// [`NanoGenerator`](crate::NanoGenerator).
///
/// The type is zero-sized and holds no state, so it is `Send + Sync` and may
/// be shared freely across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl EntropySource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest).map_err(EntropyError::new)
    }
}
