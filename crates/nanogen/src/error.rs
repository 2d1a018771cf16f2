/// A result type defaulting to the crate's umbrella [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Boxed error produced by an [`EntropySource`](crate::EntropySource).
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Reasons a generator configuration is rejected at construction time.
///
/// Validation runs in a fixed order: length, alphabet size, then a single
/// pass over the alphabet. Within that pass a non-ASCII byte anywhere in the
/// alphabet takes precedence over a repeated byte, so the variant returned for
/// a given input is always the same.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The requested identifier length was zero.
    #[error("length should be greater than 0")]
    InvalidLength,

    /// The alphabet has fewer than 2 or more than 64 symbols.
    #[error("alphabet size should be in a range between 2 and 64 (got {len})")]
    InvalidAlphabetSize { len: usize },

    /// The alphabet contains a byte outside the ASCII range.
    #[error("alphabet should be ASCII (found byte {byte:#04x})")]
    NonAsciiAlphabet { byte: u8 },

    /// The alphabet contains the same byte more than once.
    #[error("alphabet should be unique (byte {byte:#04x} repeats)")]
    DuplicateAlphabetSymbol { byte: u8 },
}

/// The entropy source could not supply random bytes.
///
/// Surfaced verbatim from [`IdGenerator::generate`](crate::IdGenerator). The
/// generator never retries a failed read; the caller decides whether to retry,
/// abort or degrade.
#[derive(Debug, thiserror::Error)]
#[error("entropy source failed: {source}")]
pub struct EntropyError {
    #[source]
    source: BoxError,
}

impl EntropyError {
    /// Wraps an arbitrary error raised by an entropy source.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Consumes the wrapper and returns the underlying error.
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// All errors `nanogen` can produce.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
