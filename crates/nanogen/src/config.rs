use crate::ValidationError;

/// Alphabet used by [`NanoGenerator::with_prefix`](crate::NanoGenerator):
/// digits followed by lowercase ASCII letters (36 symbols).
pub const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random symbols in an identifier built from the defaults.
pub const DEFAULT_LENGTH: usize = 26;

/// Smallest alphabet accepted by the generator.
pub const MIN_ALPHABET_LEN: usize = 2;

/// Largest alphabet accepted by the generator.
///
/// Each random byte is masked down to at most 6 bits, so 64 symbols is the
/// widest alphabet a single byte can index.
pub const MAX_ALPHABET_LEN: usize = 64;

/// The user-facing inputs of a generator, before validation.
///
/// This is a plain data carrier: loading it from a file or the environment
/// never fails, and [`GeneratorConfig::validate`] (or building a generator
/// from it) is where invalid values are rejected.
///
/// # Example
/// ```
/// use nanogen::{GeneratorConfig, NanoGenerator};
///
/// let config = GeneratorConfig {
///     prefix: "ord_".into(),
///     length: 16,
///     alphabet: "ABCDEFGHJKMNPQRSTVWXYZ23456789".into(),
/// };
///
/// let generator: NanoGenerator = NanoGenerator::try_from(config).unwrap();
/// assert_eq!(generator.length(), 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Prepended verbatim to every identifier. Not validated and not counted
    /// toward `length`.
    pub prefix: String,
    /// Number of random symbols per identifier.
    pub length: usize,
    /// Distinct ASCII symbols identifiers are drawn from.
    pub alphabet: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            length: DEFAULT_LENGTH,
            alphabet: DEFAULT_ALPHABET.to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Checks the length and alphabet without building a generator.
    ///
    /// # Errors
    /// See [`validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.length, self.alphabet.as_bytes())
    }
}

/// Validates a target length and alphabet.
///
/// Checks run in this order and the first failure is returned:
/// 1. `length >= 1`
/// 2. `2 <= alphabet.len() <= 64`
/// 3. a single pass over the alphabet in which every byte must be ASCII and
///    no byte may repeat. A non-ASCII byte anywhere in the alphabet wins over
///    a repeat, even one found earlier in the pass.
///
/// # Errors
/// The matching [`ValidationError`] variant for the first failed check.
pub fn validate(length: usize, alphabet: &[u8]) -> Result<(), ValidationError> {
    if length < 1 {
        return Err(ValidationError::InvalidLength);
    }

    if !(MIN_ALPHABET_LEN..=MAX_ALPHABET_LEN).contains(&alphabet.len()) {
        return Err(ValidationError::InvalidAlphabetSize {
            len: alphabet.len(),
        });
    }

    // One bit per ASCII code point.
    let mut seen = 0u128;
    let mut repeated = None;
    for &byte in alphabet {
        if !byte.is_ascii() {
            return Err(ValidationError::NonAsciiAlphabet { byte });
        }
        let bit = 1u128 << byte;
        if seen & bit != 0 && repeated.is_none() {
            repeated = Some(byte);
        }
        seen |= bit;
    }

    match repeated {
        Some(byte) => Err(ValidationError::DuplicateAlphabetSymbol { byte }),
        None => Ok(()),
    }
}
