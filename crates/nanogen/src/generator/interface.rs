use core::fmt;

/// A minimal interface for generating string identifiers.
///
/// Implemented by the random [`NanoGenerator`](crate::NanoGenerator) and the
/// deterministic [`CounterGenerator`](crate::CounterGenerator), so code that
/// mints identifiers can be written once and tested against exact values.
pub trait IdGenerator {
    type Err: fmt::Debug;

    /// Returns a new identifier, prefix included.
    ///
    /// # Errors
    /// Implementation specific. An error never comes with a partial
    /// identifier.
    fn generate(&self) -> Result<String, Self::Err>;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    type Err = G::Err;

    fn generate(&self) -> Result<String, Self::Err> {
        (**self).generate()
    }
}
