use crate::EntropyError;
use std::sync::Arc;

/// A source of cryptographically strong random bytes.
///
/// This abstraction allows you to plug in the operating system RNG, a
/// thread-local CSPRNG, or a scripted source in tests.
///
/// Implementations must be safe to call through a shared reference. A
/// generator shared across threads requires its source to be `Sync`, and the
/// source is responsible for any synchronisation it needs.
///
/// # Example
/// ```
/// use nanogen::{EntropyError, EntropySource};
///
/// struct Zeroes;
/// impl EntropySource for Zeroes {
///     fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
///         dest.fill(0);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0xff; 4];
/// Zeroes.fill_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [0; 4]);
/// ```
pub trait EntropySource {
    /// Overwrites every byte of `dest` with fresh random bytes.
    ///
    /// # Errors
    /// Returns an [`EntropyError`] if the source cannot supply bytes. `dest`
    /// may have been partially written in that case.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
