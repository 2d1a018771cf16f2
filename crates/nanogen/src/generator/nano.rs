#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DEFAULT_ALPHABET, DEFAULT_LENGTH, EntropyError, EntropySource, GeneratorConfig, IdGenerator,
    OsRandom, ValidationError, validate,
};

/// Smallest number of random bytes read per refill.
pub const MIN_BATCH_SIZE: usize = 8;

/// Returns the smallest all-ones mask `2^k - 1` that covers every index of an
/// alphabet with `alphabet_len` symbols.
///
/// For example, a 6 symbol alphabet (`0b110`) only needs the mask `0b111`,
/// and the default 36 symbol alphabet needs `0b111111` (63).
///
/// ```
/// assert_eq!(nanogen::bitmask(2), 0b1);
/// assert_eq!(nanogen::bitmask(36), 63);
/// assert_eq!(nanogen::bitmask(64), 63);
/// ```
pub const fn bitmask(alphabet_len: usize) -> u8 {
    let max_index = alphabet_len.saturating_sub(1);
    if max_index > u8::MAX as usize {
        return u8::MAX;
    }
    match u8::MAX.checked_shr((max_index as u8).leading_zeros()) {
        Some(mask) => mask,
        None => 0,
    }
}

/// Number of random bytes read per refill for identifiers of `length`
/// symbols.
///
/// `(length / 5) * 8` bytes, floored at [`MIN_BATCH_SIZE`]. This only tunes
/// how often the source is called; generation refills until `length` symbols
/// have been accepted whatever the batch size.
pub const fn batch_size(length: usize) -> usize {
    let step = (length / 5).saturating_mul(8);
    if step < MIN_BATCH_SIZE {
        MIN_BATCH_SIZE
    } else {
        step
    }
}

/// A random identifier generator over a custom ASCII alphabet.
///
/// The configuration is validated and its derived fields (mask and batch
/// size) are computed once at construction; after that the generator is
/// immutable. Build one at start-up and share it: [`Self::generate`] takes
/// `&self` and keeps no state between calls, so it may be called concurrently
/// as long as the entropy source `R` allows it.
///
/// ## Features
/// - ✅ Uniform, independent symbols (mask then reject, never modulo)
/// - ✅ Thread-safe with [`OsRandom`] or [`ThreadRandom`]
/// - ✅ Probabilistically unique (depends only on alphabet size and length)
/// - ❌ Not sortable, not monotonic
///
/// ## Termination
/// Bytes whose masked value falls outside the alphabet are discarded and the
/// buffer is refilled until enough symbols were accepted. There is no cap on
/// refills: capping would truncate the tail of the acceptance distribution.
/// An unbiased source finishes in about one refill; a broken source that only
/// ever yields rejected bytes stalls the caller.
///
/// [`ThreadRandom`]: crate::ThreadRandom
#[derive(Clone, Debug)]
pub struct NanoGenerator<R = OsRandom>
where
    R: EntropySource,
{
    prefix: String,
    length: usize,
    alphabet: Box<[u8]>,
    bitmask: u8,
    step: usize,
    source: R,
}

impl NanoGenerator<OsRandom> {
    /// Creates a generator backed by the operating system RNG.
    ///
    /// # Parameters
    /// - `prefix`: prepended verbatim to every identifier
    /// - `length`: number of random symbols, excluding the prefix
    /// - `alphabet`: 2 to 64 distinct ASCII bytes
    ///
    /// # Example
    /// ```
    /// use nanogen::{IdGenerator, NanoGenerator};
    ///
    /// let generator = NanoGenerator::new("tx_", 10, "0123456789").unwrap();
    /// let id = generator.generate().unwrap();
    ///
    /// assert_eq!(id.len(), 13);
    /// assert!(id[3..].bytes().all(|b| b.is_ascii_digit()));
    /// ```
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if `length` is zero or the alphabet has
    /// the wrong size, a non-ASCII byte, or a repeated byte.
    pub fn new(
        prefix: impl Into<String>,
        length: usize,
        alphabet: impl AsRef<[u8]>,
    ) -> Result<Self, ValidationError> {
        Self::with_source(prefix, length, alphabet, OsRandom)
    }

    /// Creates a generator with [`DEFAULT_ALPHABET`] and [`DEFAULT_LENGTH`].
    ///
    /// The defaults are always valid, so this cannot fail.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_prefix_and_source(prefix, OsRandom)
    }
}

impl Default for NanoGenerator<OsRandom> {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

impl TryFrom<GeneratorConfig> for NanoGenerator<OsRandom> {
    type Error = ValidationError;

    fn try_from(config: GeneratorConfig) -> Result<Self, Self::Error> {
        Self::try_from_config(config, OsRandom)
    }
}

impl<R> NanoGenerator<R>
where
    R: EntropySource,
{
    /// Creates a generator that draws its bytes from `source`.
    ///
    /// # Example
    /// ```
    /// use nanogen::{IdGenerator, NanoGenerator, ThreadRandom};
    ///
    /// let generator = NanoGenerator::with_source("", 8, "ab", ThreadRandom).unwrap();
    /// let id = generator.generate().unwrap();
    ///
    /// assert!(id.bytes().all(|b| b == b'a' || b == b'b'));
    /// ```
    ///
    /// # Errors
    /// Same as [`NanoGenerator::new`].
    pub fn with_source(
        prefix: impl Into<String>,
        length: usize,
        alphabet: impl AsRef<[u8]>,
        source: R,
    ) -> Result<Self, ValidationError> {
        let alphabet = alphabet.as_ref();
        validate(length, alphabet)?;
        Ok(Self::from_validated(
            prefix.into(),
            length,
            alphabet.into(),
            source,
        ))
    }

    /// Creates a generator with the default alphabet and length that draws
    /// its bytes from `source`.
    pub fn with_prefix_and_source(prefix: impl Into<String>, source: R) -> Self {
        debug_assert!(validate(DEFAULT_LENGTH, DEFAULT_ALPHABET.as_bytes()).is_ok());
        Self::from_validated(
            prefix.into(),
            DEFAULT_LENGTH,
            DEFAULT_ALPHABET.as_bytes().into(),
            source,
        )
    }

    /// Builds a generator from a [`GeneratorConfig`].
    ///
    /// # Errors
    /// Same as [`NanoGenerator::new`].
    pub fn try_from_config(config: GeneratorConfig, source: R) -> Result<Self, ValidationError> {
        let GeneratorConfig {
            prefix,
            length,
            alphabet,
        } = config;
        validate(length, alphabet.as_bytes())?;
        Ok(Self::from_validated(
            prefix,
            length,
            alphabet.into_bytes().into_boxed_slice(),
            source,
        ))
    }

    fn from_validated(prefix: String, length: usize, alphabet: Box<[u8]>, source: R) -> Self {
        Self {
            prefix,
            length,
            bitmask: bitmask(alphabet.len()),
            step: batch_size(length),
            alphabet,
            source,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of random symbols per identifier, excluding the prefix.
    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub const fn bitmask(&self) -> u8 {
        self.bitmask
    }

    /// Number of random bytes read per refill.
    pub const fn batch_size(&self) -> usize {
        self.step
    }

    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Generates an identifier and appends it, prefix first, to `out`.
    ///
    /// Useful in hot loops to reuse one allocation across identifiers. On
    /// error `out` is left untouched.
    ///
    /// # Example
    /// ```
    /// use nanogen::NanoGenerator;
    ///
    /// let generator = NanoGenerator::with_prefix("k");
    /// let mut buf = String::new();
    /// for _ in 0..3 {
    ///     buf.clear();
    ///     generator.generate_into(&mut buf).unwrap();
    ///     assert_eq!(buf.len(), 1 + generator.length());
    /// }
    /// ```
    ///
    /// # Errors
    /// Returns the [`EntropyError`] raised by the source. A failed read is
    /// never retried.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(length = self.length)))]
    pub fn generate_into(&self, out: &mut String) -> Result<(), EntropyError> {
        let mut id = Vec::with_capacity(self.length);
        let mut bytes = vec![0u8; self.step];
        #[cfg(feature = "tracing")]
        let mut refills = 0usize;

        'refill: loop {
            if let Err(e) = self.source.fill_bytes(&mut bytes) {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "entropy source failed");
                return Err(e);
            }
            #[cfg(feature = "tracing")]
            {
                refills += 1;
            }

            for &byte in &bytes {
                let index = usize::from(byte & self.bitmask);
                // Masked values past the end of the alphabet are rejected.
                if index < self.alphabet.len() {
                    id.push(self.alphabet[index]);
                    if id.len() == self.length {
                        break 'refill;
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(refills, "identifier complete");

        out.reserve(self.prefix.len() + self.length);
        out.push_str(&self.prefix);
        // Validated ASCII, so each byte is one char.
        out.extend(id.into_iter().map(char::from));
        Ok(())
    }
}

impl<R> IdGenerator for NanoGenerator<R>
where
    R: EntropySource,
{
    type Err = EntropyError;

    /// Returns `prefix` followed by `length` symbols drawn uniformly from the
    /// alphabet.
    fn generate(&self) -> Result<String, Self::Err> {
        let mut id = String::new();
        self.generate_into(&mut id)?;
        Ok(id)
    }
}
