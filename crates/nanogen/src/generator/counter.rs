use crate::IdGenerator;
use core::convert::Infallible;
use portable_atomic::{AtomicU64, Ordering};

/// A deterministic stand-in for [`NanoGenerator`](crate::NanoGenerator) in
/// tests.
///
/// Returns `prefix` followed by a decimal counter left-padded with zeros to
/// `width` digits, starting at 1 and increasing by 1 on every call. A counter
/// wider than `width` is printed in full. There is no randomness and no
/// failure path.
///
/// # Example
/// ```
/// use nanogen::{CounterGenerator, IdGenerator};
///
/// let generator = CounterGenerator::new("prefix", 10);
///
/// assert_eq!(generator.generate().unwrap(), "prefix0000000001");
/// assert_eq!(generator.generate().unwrap(), "prefix0000000002");
/// ```
#[derive(Debug)]
pub struct CounterGenerator {
    prefix: String,
    width: usize,
    next: AtomicU64,
}

impl CounterGenerator {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self::starting_at(prefix, width, 1)
    }

    /// Creates a counter whose first identifier uses `first`.
    pub fn starting_at(prefix: impl Into<String>, width: usize, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            next: AtomicU64::new(first),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub const fn width(&self) -> usize {
        self.width
    }
}

impl IdGenerator for CounterGenerator {
    type Err = Infallible;

    fn generate(&self) -> Result<String, Self::Err> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(format!("{}{n:0width$}", self.prefix, width = self.width))
    }
}
