//! General-purpose random source surface
//!
//! [`RandomSource`] is the capability callers program against: typed
//! draws plus the operations this engine deliberately refuses. Refusals
//! are ordinary `Err` values, never panics.

use super::mt64::Engine;
use thiserror::Error;

/// Errors returned by [`RandomSource`] operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: &'static str },

    #[error("Invalid argument: bound must be positive, got {bound}")]
    InvalidBound { bound: i32 },
}

/// A seeded source of typed random values
pub trait RandomSource {
    /// f64 in [0.0, 1.0)
    fn next_double(&mut self) -> f64;

    /// f32 in [0.0, 1.0)
    fn next_float(&mut self) -> f32;

    /// Any i32
    fn next_int(&mut self) -> i32;

    /// i32 in [0, bound). Fails with [`RandomError::InvalidBound`] when
    /// `bound <= 0`.
    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RandomError>;

    /// Any i64
    fn next_long(&mut self) -> i64;

    /// Always [`RandomError::UnsupportedOperation`] for this engine
    fn next_boolean(&mut self) -> Result<bool, RandomError>;

    /// Always [`RandomError::UnsupportedOperation`]; `bytes` is left untouched
    fn next_bytes(&mut self, bytes: &mut [u8]) -> Result<(), RandomError>;

    /// Always [`RandomError::UnsupportedOperation`] for this engine
    fn next_gaussian(&mut self) -> Result<f64, RandomError>;

    /// Request a reseed. Implementations may ignore it.
    fn set_seed(&mut self, seed: i64);
}

impl RandomSource for Engine {
    fn next_double(&mut self) -> f64 {
        self.next_f64()
    }

    fn next_float(&mut self) -> f32 {
        self.next_f32()
    }

    fn next_int(&mut self) -> i32 {
        self.next_i32()
    }

    /// Scales one double draw by `bound` and truncates.
    ///
    /// This mapping is slightly biased compared to rejection sampling.
    /// It is kept as-is so streams match existing consumers of this
    /// generator. No clamping is applied to the product.
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_rs::{Engine, RandomError, RandomSource};
    ///
    /// let mut rng = Engine::new(42);
    /// assert_eq!(rng.next_int_bounded(10), Ok(7));
    /// assert_eq!(
    ///     rng.next_int_bounded(0),
    ///     Err(RandomError::InvalidBound { bound: 0 })
    /// );
    /// ```
    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RandomError> {
        if bound <= 0 {
            return Err(RandomError::InvalidBound { bound });
        }
        Ok((f64::from(bound) * self.next_f64()) as i32)
    }

    fn next_long(&mut self) -> i64 {
        self.next_i64()
    }

    fn next_boolean(&mut self) -> Result<bool, RandomError> {
        Err(RandomError::UnsupportedOperation {
            operation: "next_boolean",
        })
    }

    fn next_bytes(&mut self, _bytes: &mut [u8]) -> Result<(), RandomError> {
        Err(RandomError::UnsupportedOperation {
            operation: "next_bytes",
        })
    }

    fn next_gaussian(&mut self) -> Result<f64, RandomError> {
        Err(RandomError::UnsupportedOperation {
            operation: "next_gaussian",
        })
    }

    /// Ignored: an engine keeps its construction seed for life.
    fn set_seed(&mut self, seed: i64) {
        tracing::debug!(seed, "set_seed ignored; engine cannot be reseeded");
    }
}
