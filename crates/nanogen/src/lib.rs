//! Random identifiers over a small custom alphabet.
//!
//! A [`NanoGenerator`] is built once from a prefix, a target length and an
//! ASCII alphabet of 2 to 64 distinct symbols. Every call to
//! [`IdGenerator::generate`] reads bytes from an [`EntropySource`], masks each
//! byte down to the smallest power-of-two range covering the alphabet and
//! discards values that fall outside it. The surviving indices select symbols
//! uniformly, with no modulo bias.
//!
//! ```
//! use nanogen::{IdGenerator, NanoGenerator};
//!
//! let generator = NanoGenerator::with_prefix("user_");
//! let id = generator.generate()?;
//!
//! assert!(id.starts_with("user_"));
//! assert_eq!(id.len(), "user_".len() + nanogen::DEFAULT_LENGTH);
//! # Ok::<(), nanogen::EntropyError>(())
//! ```
//!
//! Tests that need reproducible identifiers can swap in a
//! [`CounterGenerator`], which shares the [`IdGenerator`] contract.

mod config;
mod entropy;
mod error;
mod generator;

pub use crate::config::*;
pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::generator::*;
